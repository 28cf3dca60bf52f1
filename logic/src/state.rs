//! Two channel line states as seen by the decoder and as driven on the output.
//!
//! Both directions use the same active low convention: a set bit means the line is low.

/// The two quadrature input channels, sampled in one go.
///
/// Bit 0 is channel 0 and bit 1 is channel 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputState(u8);

impl InputState {
    /// Only the low two bits are kept.
    pub const fn new(bits: u8) -> Self {
        Self(bits & 0b11)
    }

    /// Build from the sensed line levels (`true` = line is high).
    ///```rust
    /// use quadrature_rescale_logic::InputState;
    /// assert_eq!(InputState::from_levels(true, true), InputState::new(0b00));
    /// assert_eq!(InputState::from_levels(false, true), InputState::new(0b01));
    /// assert_eq!(InputState::from_levels(true, false), InputState::new(0b10));
    ///```
    pub const fn from_levels(channel_0_high: bool, channel_1_high: bool) -> Self {
        let mut bits = 0;
        if !channel_0_high {
            bits |= 0b01;
        }
        if !channel_1_high {
            bits |= 0b10;
        }
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Value driven onto the two output lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputState(u8);

impl OutputState {
    /// Only the low two bits are kept.
    pub const fn new(bits: u8) -> Self {
        Self(bits & 0b11)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Per channel assertion. An asserted channel is pulled low.
    pub const fn channels(self) -> [bool; 2] {
        [self.0 & 0b01 != 0, self.0 & 0b10 != 0]
    }
}

#[cfg(test)]
mod tests {
    use super::{InputState, OutputState};

    #[test]
    fn masks_to_two_bits() {
        assert_eq!(InputState::new(0b1110).bits(), 0b10);
        assert_eq!(OutputState::new(0xff).bits(), 0b11);
    }

    #[test]
    fn low_lines_read_as_set_bits() {
        assert_eq!(InputState::from_levels(false, false).bits(), 0b11);
        assert_eq!(InputState::from_levels(true, true).bits(), 0b00);
    }

    #[test]
    fn output_channels() {
        assert_eq!(OutputState::new(0b00).channels(), [false, false]);
        assert_eq!(OutputState::new(0b01).channels(), [true, false]);
        assert_eq!(OutputState::new(0b10).channels(), [false, true]);
        assert_eq!(OutputState::new(0b11).channels(), [true, true]);
    }
}
