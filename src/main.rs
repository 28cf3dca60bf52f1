#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Duration, Instant};
use quadrature_rescale_logic::{Heartbeat, PinPort, Poll, QuadratureRelay, RelayConfig};
use {defmt_rtt as _, panic_probe as _};

mod open_drain;
use open_drain::ReleasedLine;

/// How often the position and skip counter are logged.
const HEARTBEAT_PERIOD: Duration = Duration::from_secs(1);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // Pinout
    // Purpose  GPIO
    // QIN0     16   input, pull-up, low active
    // QIN1     17   input, pull-up, low active
    // QOUT0    18   pulled low or released
    // QOUT1    19   pulled low or released
    // LED1     25
    // LED2     15
    let port = PinPort::new(
        [Input::new(p.PIN_16, Pull::Up), Input::new(p.PIN_17, Pull::Up)],
        [ReleasedLine::new(p.PIN_18), ReleasedLine::new(p.PIN_19)],
        [
            Output::new(p.PIN_25, Level::High),
            Output::new(p.PIN_15, Level::High),
        ],
    );

    let config = RelayConfig::default();
    let Ok(mut relay) = QuadratureRelay::new(port, config);
    info!(
        "relay up: indicators from {}, {}",
        config.indicator_source,
        relay.stats()
    );

    let mut heartbeat = Heartbeat::new(Instant::now(), HEARTBEAT_PERIOD);
    loop {
        let Ok(poll) = relay.service();
        if poll == Poll::Skipped {
            debug!("skipped transition at {}", relay.decoder().position());
        }
        if heartbeat.due(Instant::now()) {
            info!("{} output {}", relay.stats(), relay.output());
        }
    }
}
