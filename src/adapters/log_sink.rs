//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing doorbell events to the `log` facade
//! (stderr via `env_logger` on the host).  A camera or notification
//! adapter would implement the same trait.

use log::info;

use crate::app::events::DoorbellEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`DoorbellEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &DoorbellEvent) {
        match event {
            DoorbellEvent::BoardResolved { board, pins } => {
                info!(
                    "BOARD | {} | button={} led={} pwm={}",
                    board, pins.button_gpio, pins.led_gpio, pins.pwm_port
                );
            }
            DoorbellEvent::Ready => info!("READY"),
            DoorbellEvent::ButtonPressed { at_ms } => info!("RING  | at {}ms", at_ms),
            DoorbellEvent::CaptureRequested => info!("CAPTURE | requested"),
            DoorbellEvent::LedChanged(on) => {
                info!("LED   | {}", if *on { "ON" } else { "OFF" });
            }
        }
    }
}
