//! Decoder that may be polled from interrupt context.
use crate::{
    decoder::{Poll, QuadratureDecoder},
    position::Position,
    state::InputState,
};
use core::cell::RefCell;
use critical_section::Mutex;

/// [`QuadratureDecoder`] behind a critical section.
///
/// Every access runs with interrupts masked, so an interrupt handler and the main loop can
/// share one decoder without tearing the position or the last seen state.
///```rust
/// use quadrature_rescale_logic::{InputState, Position, QuadratureDecoder, SharedDecoder};
/// static DECODER: SharedDecoder = SharedDecoder::new(QuadratureDecoder::with_position(
///     InputState::new(0),
///     Position::new(4),
/// ));
/// DECODER.poll(InputState::new(1));
/// assert_eq!(DECODER.position(), Position::new(5));
///```
pub struct SharedDecoder(Mutex<RefCell<QuadratureDecoder>>);

impl SharedDecoder {
    pub const fn new(decoder: QuadratureDecoder) -> Self {
        Self(Mutex::new(RefCell::new(decoder)))
    }

    pub fn poll(&self, current: InputState) -> Poll {
        critical_section::with(|cs| self.0.borrow_ref_mut(cs).poll(current))
    }

    pub fn position(&self) -> Position {
        critical_section::with(|cs| self.0.borrow_ref(cs).position())
    }

    pub fn skipped(&self) -> u32 {
        critical_section::with(|cs| self.0.borrow_ref(cs).skipped())
    }

    /// Replace the decoder, e.g. to seed it from a real reading once the pins are up.
    pub fn reset(&self, decoder: QuadratureDecoder) {
        critical_section::with(|cs| {
            self.0.replace(cs, decoder);
        });
    }
}
