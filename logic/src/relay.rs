use crate::{
    decoder::{Poll, QuadratureDecoder},
    diagnostics::DecoderStats,
    port::{Indicator, QuadraturePort},
    rescaler::{IndicatorSource, indicator_levels, rescale},
    state::OutputState,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayConfig {
    pub indicator_source: IndicatorSource,
}

/// Reads the quadrature input, tracks the position and re-emits it at a quarter of the
/// resolution.
pub struct QuadratureRelay<P> {
    port: P,
    decoder: QuadratureDecoder,
    config: RelayConfig,
    output: OutputState,
}

impl<P: QuadraturePort> QuadratureRelay<P> {
    /// Seed the decoder from one reading of the port and publish the starting output.
    pub fn new(mut port: P, config: RelayConfig) -> Result<Self, P::Error> {
        let initial = port.read_input()?;
        Self::with_decoder(port, QuadratureDecoder::new(initial), config)
    }

    /// Like [`QuadratureRelay::new`] with an already seeded decoder.
    pub fn with_decoder(
        port: P,
        decoder: QuadratureDecoder,
        config: RelayConfig,
    ) -> Result<Self, P::Error> {
        let mut relay = Self {
            port,
            decoder,
            config,
            output: OutputState::default(),
        };
        relay.publish()?;
        Ok(relay)
    }

    /// One pass of the control loop.
    ///
    /// Outputs are only rewritten when the decoder state changed.
    pub fn service(&mut self) -> Result<Poll, P::Error> {
        let input = self.port.read_input()?;
        let poll = self.decoder.poll(input);
        if poll.is_update() {
            self.publish()?;
        }
        Ok(poll)
    }

    fn publish(&mut self) -> Result<(), P::Error> {
        let position = self.decoder.position();
        self.output = rescale(position);
        self.port.write_output(self.output)?;
        let levels = indicator_levels(self.config.indicator_source, position, self.output);
        for (indicator, on) in Indicator::ALL.into_iter().zip(levels) {
            self.port.set_indicator(indicator, on)?;
        }
        Ok(())
    }

    pub fn decoder(&self) -> &QuadratureDecoder {
        &self.decoder
    }

    /// Last output state written to the port.
    pub fn output(&self) -> OutputState {
        self.output
    }

    pub fn stats(&self) -> DecoderStats {
        self.decoder.stats()
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }
}
