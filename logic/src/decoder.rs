use crate::{
    Direction,
    diagnostics::DecoderStats,
    position::Position,
    state::InputState,
    transition::delta,
};
use core::num::Wrapping;

/// Outcome of a single [`QuadratureDecoder::poll`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Poll {
    /// The input repeated the last seen state.
    Unchanged,
    /// A legal single step was taken.
    Moved(Direction),
    /// Both channels changed at once. The position was left alone.
    Skipped,
}

impl Poll {
    /// Whether the decoder state changed, so outputs should be refreshed.
    pub fn is_update(self) -> bool {
        !matches!(self, Poll::Unchanged)
    }
}

/// Edge triggered quadrature decoder.
///
/// The transition is looked up against the previously seen input, and only when the input
/// actually changed. Polling faster than the encoder moves is therefore harmless.
#[derive(Clone, Debug)]
pub struct QuadratureDecoder {
    last_state: InputState,
    position: Position,
    skipped: Wrapping<u32>,
}

impl QuadratureDecoder {
    /// Start from one real reading of the input.
    pub fn new(initial: InputState) -> Self {
        Self::with_position(initial, Position::seeded(initial))
    }

    /// Start from an explicit position.
    ///
    /// `position` should not sit on the wrap boundary.
    pub const fn with_position(initial: InputState, position: Position) -> Self {
        Self {
            last_state: initial,
            position,
            skipped: Wrapping(0),
        }
    }

    ///Process a new reading.
    pub fn poll(&mut self, current: InputState) -> Poll {
        if current == self.last_state {
            return Poll::Unchanged;
        }
        let step = delta(self.last_state, current);
        self.last_state = current;
        match step {
            0 => {
                self.skipped += Wrapping(1);
                Poll::Skipped
            }
            step => {
                self.position.step(step);
                if step > 0 {
                    Poll::Moved(Direction::Clockwise)
                } else {
                    Poll::Moved(Direction::CounterClockwise)
                }
            }
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn last_state(&self) -> InputState {
        self.last_state
    }

    /// Number of skipped transitions seen so far. Wraps.
    pub fn skipped(&self) -> u32 {
        self.skipped.0
    }

    pub fn stats(&self) -> DecoderStats {
        DecoderStats {
            position: self.position,
            skipped: self.skipped.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Poll, QuadratureDecoder};
    use crate::{
        Direction::{Clockwise, CounterClockwise},
        position::Position,
        state::InputState,
    };

    fn decoder_at(bits: u8, count: u32) -> QuadratureDecoder {
        QuadratureDecoder::with_position(InputState::new(bits), Position::new(count))
    }

    fn feed(decoder: &mut QuadratureDecoder, inputs: &[u8]) -> Vec<Poll> {
        inputs
            .iter()
            .map(|bits| decoder.poll(InputState::new(*bits)))
            .collect()
    }

    #[test]
    fn full_forward_cycle() {
        let mut decoder = decoder_at(0, 100);
        let polls = feed(&mut decoder, &[1, 3, 2, 0]);
        assert_eq!(polls, vec![Poll::Moved(Clockwise); 4]);
        assert_eq!(decoder.position(), Position::new(104));
        assert_eq!(decoder.last_state(), InputState::new(0));
    }

    #[test]
    fn full_reverse_cycle() {
        let mut decoder = decoder_at(0, 100);
        let polls = feed(&mut decoder, &[2, 3, 1, 0]);
        assert_eq!(polls, vec![Poll::Moved(CounterClockwise); 4]);
        assert_eq!(decoder.position(), Position::new(96));
        assert_eq!(decoder.last_state(), InputState::new(0));
    }

    #[test]
    fn repeated_input_is_a_no_op() {
        let mut decoder = decoder_at(0, 100);
        assert_eq!(decoder.poll(InputState::new(1)), Poll::Moved(Clockwise));
        assert_eq!(decoder.poll(InputState::new(1)), Poll::Unchanged);
        assert_eq!(decoder.poll(InputState::new(1)), Poll::Unchanged);
        assert_eq!(decoder.position(), Position::new(101));
        assert!(!Poll::Unchanged.is_update());
    }

    #[test]
    fn diagonal_jump_is_skipped() {
        let mut decoder = decoder_at(0, 100);
        let poll = decoder.poll(InputState::new(3));
        assert_eq!(poll, Poll::Skipped);
        assert!(poll.is_update());
        assert_eq!(decoder.position(), Position::new(100));
        assert_eq!(decoder.skipped(), 1);
        // The skipped state becomes the new reference.
        assert_eq!(decoder.poll(InputState::new(2)), Poll::Moved(Clockwise));
        assert_eq!(decoder.position(), Position::new(101));
    }

    #[test]
    fn back_and_forth_returns_home() {
        let mut decoder = decoder_at(0, 100);
        feed(&mut decoder, &[1, 0, 1, 3, 1, 0, 2, 0]);
        assert_eq!(decoder.position(), Position::new(100));
        assert_eq!(decoder.skipped(), 0);
    }

    #[test]
    fn crosses_the_wrap_boundary() {
        let mut decoder = decoder_at(0, 1);
        feed(&mut decoder, &[2, 3]);
        assert_eq!(decoder.position(), Position::new(u32::MAX));
        feed(&mut decoder, &[2, 0, 1]);
        assert_eq!(decoder.position(), Position::new(2));
    }

    #[test]
    fn seeded_from_first_reading() {
        let decoder = QuadratureDecoder::new(InputState::new(0b01));
        assert_eq!(decoder.position(), Position::new(5));
        assert_eq!(decoder.last_state(), InputState::new(0b01));
        assert_eq!(decoder.stats().skipped, 0);
    }
}
