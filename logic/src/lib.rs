//! This crate contains all the logic for decoding a quadrature signal and re-emitting it at a
//! quarter of the resolution.
//! Nothing here depends on a chip HAL, so the unit tests run on the
//! host machine.
#![cfg_attr(not(test), no_std)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
pub mod decoder;
pub mod diagnostics;
pub mod gray;
pub mod port;
mod position;
pub mod relay;
pub mod rescaler;
mod shared;
mod state;
pub mod transition;

pub use decoder::{Poll, QuadratureDecoder};
pub use diagnostics::{DecoderStats, Heartbeat};
pub use port::{Indicator, PinPort, QuadraturePort};
pub use position::{COUNTS_PER_DETENT, Position};
pub use relay::{QuadratureRelay, RelayConfig};
pub use rescaler::IndicatorSource;
pub use shared::SharedDecoder;
pub use state::{InputState, OutputState};

/// Direction of a single decoded step. Clockwise is the direction that increases the count.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}
impl Direction {
    pub fn invert(&self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}
