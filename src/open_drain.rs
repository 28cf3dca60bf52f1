//! Output line that is either pulled low or released to its pull-up.
use core::convert::Infallible;
use embassy_rp::{
    Peripheral,
    gpio::{Flex, Pin, Pull},
};
use embedded_hal::digital::{ErrorType, OutputPin};

/// One of the two rescaled quadrature lines.
///
/// `set_low` enables the driver with a low level, `set_high` turns the pin back into an input
/// with the pull-up on.
pub struct ReleasedLine<'d> {
    pin: Flex<'d>,
}

impl<'d> ReleasedLine<'d> {
    /// Starts released.
    pub fn new(pin: impl Peripheral<P = impl Pin> + 'd) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_pull(Pull::Up);
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }
}

impl ErrorType for ReleasedLine<'_> {
    type Error = Infallible;
}

impl OutputPin for ReleasedLine<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low();
        self.pin.set_as_output();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_as_input();
        Ok(())
    }
}
