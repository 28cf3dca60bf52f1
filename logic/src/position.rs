use crate::{gray::to_gray, state::InputState};
use core::num::Wrapping;

/// Raw counts per mechanical detent.
pub const COUNTS_PER_DETENT: u32 = 4;

/// Seeds start one detent above the wrap boundary.
const SEED_ORIGIN: u32 = COUNTS_PER_DETENT;

///Accumulated quadrature count. (4 counts per detent)
///
/// Wraps at the `u32` boundary in both directions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position(Wrapping<u32>);

#[cfg(feature = "defmt")]
mod defmt_impl {
    use super::Position;
    #[mutants::skip]
    impl defmt::Format for Position {
        fn format(&self, fmt: defmt::Formatter) {
            defmt::Format::format(&self.0.0, fmt);
        }
    }
}

impl Position {
    pub const fn new(count: u32) -> Self {
        Self(Wrapping(count))
    }

    /// Starting position for a decoder that first saw `initial`.
    ///
    /// The low two bits match the index of `initial` on the forward cycle, so detents
    /// (input `00`) land on multiples of four.
    ///```rust
    /// use quadrature_rescale_logic::{InputState, Position};
    /// assert_eq!(Position::seeded(InputState::new(0b00)), Position::new(4));
    /// assert_eq!(Position::seeded(InputState::new(0b11)), Position::new(6));
    /// assert_eq!(Position::seeded(InputState::new(0b10)), Position::new(7));
    ///```
    pub fn seeded(initial: InputState) -> Self {
        Self::new(SEED_ORIGIN + u32::from(to_gray(initial.bits())))
    }

    pub fn raw(self) -> u32 {
        self.0.0
    }

    /// Count modulo four.
    pub fn low_bits(self) -> u8 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "masked to two bits before the cast"
        )]
        {
            (self.0.0 & 0b11) as u8
        }
    }

    /// True for the two counts either side of the `u32` wrap.
    pub fn is_on_wrap_boundary(self) -> bool {
        self.0.0 == 0 || self.0.0 == u32::MAX
    }

    pub fn step(&mut self, delta: i8) {
        self.0 = Wrapping(self.0.0.wrapping_add_signed(i32::from(delta)));
    }
}
