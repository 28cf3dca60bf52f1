//! The hardware seam.
//!
//! Everything above this module is plain arithmetic and can be tested on the host.
use crate::state::{InputState, OutputState};
use embedded_hal::digital::{InputPin, OutputPin, PinState};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    One,
    Two,
}

impl Indicator {
    pub const ALL: [Indicator; 2] = [Indicator::One, Indicator::Two];

    fn index(self) -> usize {
        match self {
            Indicator::One => 0,
            Indicator::Two => 1,
        }
    }
}

/// Two quadrature inputs, two quadrature outputs and two indicators.
///
/// This trait exists as a seam so that a mock port can be injected when unit testing the relay.
pub trait QuadraturePort {
    type Error;
    /// Sample both input channels. Lines are active low.
    fn read_input(&mut self) -> Result<InputState, Self::Error>;
    /// Drive the output channels. A set bit pulls the line low, a clear bit releases it.
    fn write_output(&mut self, state: OutputState) -> Result<(), Self::Error>;
    /// `on` drives the indicator high.
    fn set_indicator(&mut self, indicator: Indicator, on: bool) -> Result<(), Self::Error>;
}

/// [`QuadraturePort`] over `embedded-hal` pins.
///
/// The output pins are expected to behave as open drain lines: `set_low` drives the line low,
/// `set_high` releases it to the pull-up.
pub struct PinPort<I, O, L> {
    inputs: [I; 2],
    outputs: [O; 2],
    indicators: [L; 2],
}

impl<I, O, L> PinPort<I, O, L> {
    pub fn new(inputs: [I; 2], outputs: [O; 2], indicators: [L; 2]) -> Self {
        Self {
            inputs,
            outputs,
            indicators,
        }
    }

    pub fn release(self) -> ([I; 2], [O; 2], [L; 2]) {
        (self.inputs, self.outputs, self.indicators)
    }
}

impl<I, O, L> QuadraturePort for PinPort<I, O, L>
where
    I: InputPin,
    O: OutputPin<Error = I::Error>,
    L: OutputPin<Error = I::Error>,
{
    type Error = I::Error;

    fn read_input(&mut self) -> Result<InputState, Self::Error> {
        let [channel_0, channel_1] = &mut self.inputs;
        Ok(InputState::from_levels(
            channel_0.is_high()?,
            channel_1.is_high()?,
        ))
    }

    fn write_output(&mut self, state: OutputState) -> Result<(), Self::Error> {
        for (line, asserted) in self.outputs.iter_mut().zip(state.channels()) {
            if asserted {
                line.set_low()?;
            } else {
                line.set_high()?;
            }
        }
        Ok(())
    }

    fn set_indicator(&mut self, indicator: Indicator, on: bool) -> Result<(), Self::Error> {
        self.indicators[indicator.index()].set_state(PinState::from(on))
    }
}
