//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DoorbellService (domain)
//! ```
//!
//! Driven adapters (board identity, GPIO, event sinks) implement these
//! traits.  The [`DoorbellService`](super::service::DoorbellService)
//! consumes them via generics, so the domain core never touches the host
//! directly.

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::config::Edge;
use crate::error::{GpioError, Result};

// ───────────────────────────────────────────────────────────────
// Board identity port (driven adapter: host → domain)
// ───────────────────────────────────────────────────────────────

/// Supplies the identifier of the board the process is running on.
pub trait BoardSource {
    /// Read the board identifier, exactly as the host reports it.
    fn board_id(&self) -> Result<String>;
}

// ───────────────────────────────────────────────────────────────
// GPIO port (driven adapter: domain ↔ peripheral manager)
// ───────────────────────────────────────────────────────────────

/// Opens named GPIO lines.  Returned handles speak `embedded-hal`.
///
/// Pin names are the strings from the board table (`BCM6`,
/// `GPIO2_IO05`, ...).  Some boards share one line between the button and
/// the LED; implementations decide whether a second open of the same name
/// is allowed.
pub trait GpioPort {
    type Input: InputPin;
    type Output: OutputPin;

    /// Open `name` as an input that reports presses on `edge`.
    fn open_input(
        &mut self,
        name: &'static str,
        edge: Edge,
    ) -> core::result::Result<Self::Input, GpioError>;

    /// Open `name` as an output driven to `initial` before returning.
    fn open_output(
        &mut self,
        name: &'static str,
        initial: PinState,
    ) -> core::result::Result<Self::Output, GpioError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`DoorbellEvent`](super::events::DoorbellEvent)s
/// through this port.  Adapters decide where they go (log, camera
/// trigger, network, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::DoorbellEvent);
}
