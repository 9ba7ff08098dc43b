//! Outbound application events.
//!
//! The [`DoorbellService`](super::service::DoorbellService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them: log them, fire the camera,
//! publish a ring notification.

use crate::board::{Board, PinMapping};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoorbellEvent {
    /// The board was identified and its pins looked up.
    BoardResolved { board: Board, pins: PinMapping },

    /// Button and LED are open; the service is accepting presses.
    Ready,

    /// The button produced its configured edge.
    ButtonPressed { at_ms: u32 },

    /// A picture should be taken now.
    CaptureRequested,

    /// The indicator LED was switched (true = lit).
    LedChanged(bool),
}
