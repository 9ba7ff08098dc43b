//! Application service: the hexagonal core.
//!
//! [`DoorbellService`] owns the button and LED handles opened on the pins
//! resolved for the running board.  It is tick-driven: the caller feeds a
//! monotonic millisecond clock, and all I/O flows through port traits, so
//! the whole service runs against mock adapters in tests.
//!
//! ```text
//!  BoardResolver ──▶ ┌──────────────────────┐ ──▶ EventSink
//!                    │   DoorbellService    │
//!       GpioPort ◀──│  button · LED hold   │
//!                    └──────────────────────┘
//! ```

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::{debug, info};

use crate::board::{Board, BoardResolver, PinMapping};
use crate::config::{DoorbellConfig, Edge};
use crate::error::{GpioError, Result};

use super::events::DoorbellEvent;
use super::ports::{EventSink, GpioPort};

// ───────────────────────────────────────────────────────────────
// DoorbellService
// ───────────────────────────────────────────────────────────────

pub struct DoorbellService<I, O> {
    board: Board,
    pins: PinMapping,
    button: I,
    led: O,
    edge: Edge,
    led_hold_ms: u32,
    /// Time the LED was (last) lit; `None` while dark.
    led_on_since: Option<u32>,
    /// Button level seen on the previous poll.
    last_button_high: Option<bool>,
}

impl<I: InputPin, O: OutputPin> DoorbellService<I, O> {
    /// Resolve the board and open its peripherals.
    ///
    /// The LED is opened first, driven low; the button second, as an
    /// input on the configured edge.  An unsupported board fails before
    /// any pin is touched.
    pub fn init<G>(
        resolver: &BoardResolver,
        gpio: &mut G,
        config: &DoorbellConfig,
        sink: &mut impl EventSink,
    ) -> Result<Self>
    where
        G: GpioPort<Input = I, Output = O>,
    {
        let board = resolver.board()?;
        let pins = board.pins();
        info!(
            "Board '{}': button={} led={} pwm={}",
            board, pins.button_gpio, pins.led_gpio, pins.pwm_port
        );
        sink.emit(&DoorbellEvent::BoardResolved { board, pins });

        let led = gpio.open_output(pins.led_gpio, PinState::Low)?;
        let button = gpio.open_input(pins.button_gpio, config.button_edge)?;

        sink.emit(&DoorbellEvent::Ready);
        info!(
            "Doorbell ready (edge={:?}, led hold={}ms)",
            config.button_edge, config.led_hold_ms
        );

        Ok(Self {
            board,
            pins,
            button,
            led,
            edge: config.button_edge,
            led_hold_ms: config.led_hold_ms,
            led_on_since: None,
            last_button_high: None,
        })
    }

    // ── Inputs ────────────────────────────────────────────────

    /// Sample the button and report a press if the configured edge
    /// occurred since the previous poll.  The first poll only records
    /// the level.
    pub fn poll_button(&mut self, now_ms: u32, sink: &mut impl EventSink) -> Result<bool> {
        let high = self.button.is_high().map_err(|_| GpioError::ReadFailed)?;
        let pressed = match (self.last_button_high.replace(high), self.edge) {
            (Some(true), Edge::Falling) => !high,
            (Some(false), Edge::Rising) => high,
            _ => false,
        };
        if pressed {
            self.on_button_edge(now_ms, sink);
        }
        Ok(pressed)
    }

    /// Handle a button edge delivered by an interrupt-style callback.
    pub fn on_button_edge(&mut self, now_ms: u32, sink: &mut impl EventSink) {
        info!("Button pressed at {}ms", now_ms);
        sink.emit(&DoorbellEvent::ButtonPressed { at_ms: now_ms });
        sink.emit(&DoorbellEvent::CaptureRequested);
    }

    /// A picture was taken: light the LED and (re)start the hold timer.
    pub fn on_picture_taken(&mut self, now_ms: u32, sink: &mut impl EventSink) -> Result<()> {
        self.led.set_high().map_err(|_| GpioError::WriteFailed)?;
        if self.led_on_since.is_none() {
            sink.emit(&DoorbellEvent::LedChanged(true));
        }
        self.led_on_since = Some(now_ms);
        Ok(())
    }

    // ── Per-tick ──────────────────────────────────────────────

    /// Turn the LED off once the hold period has elapsed.
    pub fn tick(&mut self, now_ms: u32, sink: &mut impl EventSink) -> Result<()> {
        let Some(since) = self.led_on_since else {
            return Ok(());
        };
        if now_ms.wrapping_sub(since) >= self.led_hold_ms {
            self.led.set_low().map_err(|_| GpioError::WriteFailed)?;
            self.led_on_since = None;
            debug!("LED hold elapsed at {}ms", now_ms);
            sink.emit(&DoorbellEvent::LedChanged(false));
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn pins(&self) -> PinMapping {
        self.pins
    }

    /// PWM port for drivers that need one (buzzer, dimmable LED).
    pub fn pwm_port(&self) -> &'static str {
        self.pins.pwm_port
    }

    pub fn is_led_on(&self) -> bool {
        self.led_on_since.is_some()
    }
}
