//! Reduce the decoded count to a quarter of its resolution.
//!
//! The detents are around the 0 mark of the input encoding, so the output must not change
//! between counts 3 and 4 (0 and -1 from the detent's point of view): that edge would sit right
//! on the rest position and chatter. Dividing `count + 1` instead moves the edge towards the
//! middle between detents.
//!
//! ```md
//!  detent
//!   |                       |                       |
//!   V                       V                       V
//!   0 --- 1 --- 2 --- 3 --- 4 --- 5 --- 6 --- 7 --- 8   count
//!   0 --- 0 --- 0 --- 0 --- 1 --- 1 --- 1 --- 1 --- 2   count >> 2
//!                        ^                       ^
//!   0 --- 0 --- 0 --- 1 --- 1 --- 1 --- 1 --- 2 --- 2   (count + 1) >> 2
//!                  ^                       ^
//! ```
use crate::{gray::to_gray, position::Position, state::OutputState};

/// Reduced resolution index, before Gray encoding.
pub fn phase_index(position: Position) -> u32 {
    position.raw().wrapping_add(1) >> 2
}

/// Output state for `position`.
///```rust
/// use quadrature_rescale_logic::{OutputState, Position, rescaler::rescale};
/// assert_eq!(rescale(Position::new(2)), OutputState::new(0b00));
/// assert_eq!(rescale(Position::new(3)), OutputState::new(0b01));
/// assert_eq!(rescale(Position::new(7)), OutputState::new(0b11));
/// assert_eq!(rescale(Position::new(11)), OutputState::new(0b10));
///```
pub fn rescale(position: Position) -> OutputState {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "masked to two bits before the cast"
    )]
    let phase = (phase_index(position) & 0b11) as u8;
    OutputState::new(to_gray(phase))
}

/// What the two indicators mirror.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorSource {
    /// The output state actually driven on the lines.
    #[default]
    Phase,
    /// The low two bits of the raw count.
    Counter,
}

/// Levels for indicator 1 and indicator 2 (bit 0 and bit 1 of the source).
pub fn indicator_levels(
    source: IndicatorSource,
    position: Position,
    output: OutputState,
) -> [bool; 2] {
    let bits = match source {
        IndicatorSource::Phase => output.bits(),
        IndicatorSource::Counter => position.low_bits(),
    };
    [bits & 0b01 != 0, bits & 0b10 != 0]
}
