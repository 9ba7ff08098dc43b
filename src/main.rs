//! Doorbell: host entry point.
//!
//! A bring-up check: identifies the board, resolves its pins, opens the
//! button and LED on the in-memory GPIO, logs the mapping and exits.  It
//! does not run the button/LED loop; a device build drives
//! [`DoorbellService::poll_button`], [`DoorbellService::on_picture_taken`]
//! and [`DoorbellService::tick`] from its own clock and camera callbacks.
//!
//! Any bring-up failure is fatal and exits non-zero: an unrecognised board
//! (the message names the identifier) and also a pin that fails to open.
//! Continuing with a button or LED that never opened would leave a doorbell
//! that cannot ring, so a GPIO failure halts startup too.
//!
//! ```text
//!  DoorbellConfig ──▶ BoardSource ──▶ BoardResolver ──▶ DoorbellService
//!  (env / JSON)       (property)      (pin table)       (GpioPort, EventSink)
//! ```

use anyhow::{Context, Result};
use log::{error, info};

use doorbell::BoardResolver;
use doorbell::adapters::board_source::board_source_for;
use doorbell::adapters::log_sink::LogEventSink;
use doorbell::adapters::sim_gpio::SimGpio;
use doorbell::app::service::DoorbellService;
use doorbell::config::DoorbellConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Doorbell v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Configuration ──────────────────────────────────────
    let config = DoorbellConfig::from_env().context("loading configuration")?;

    // ── 2. Board identity ─────────────────────────────────────
    let board_id = board_source_for(&config)
        .board_id()
        .context("reading board identifier")?;
    let resolver = BoardResolver::new(&board_id);

    // ── 3. Peripheral bring-up ────────────────────────────────
    let mut gpio = SimGpio::new();
    let mut sink = LogEventSink::new();
    let service = match DoorbellService::init(&resolver, &mut gpio, &config, &mut sink) {
        Ok(service) => service,
        Err(e) => {
            error!("Startup halted: {}", e);
            return Err(e).with_context(|| {
                format!("bringing up peripherals for board '{}'", resolver.board_id())
            });
        }
    };

    info!(
        "Pins: {}",
        serde_json::to_string(&service.pins()).context("encoding pin mapping")?
    );
    Ok(())
}
