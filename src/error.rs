//! Unified error types for the doorbell crate.
//!
//! A single `Error` enum that every subsystem converts into, so the startup
//! path handles failures uniformly.  The binary wraps these in `anyhow`
//! with context; library code returns [`Result`].

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The board identifier matches none of the known boards.  Carries the
    /// identifier exactly as supplied.
    UnsupportedBoard(String),
    /// The board identifier could not be obtained from the host.
    BoardSource(&'static str),
    /// A GPIO operation failed.
    Gpio(GpioError),
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedBoard(id) => write!(f, "unsupported board: '{id}'"),
            Self::BoardSource(msg) => write!(f, "board source: {msg}"),
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// The named pin does not exist or is already claimed.
    OpenFailed,
    /// Reading the pin level failed.
    ReadFailed,
    /// Driving the pin failed.
    WriteFailed,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenFailed => write!(f, "pin open failed"),
            Self::ReadFailed => write!(f, "pin read failed"),
            Self::WriteFailed => write!(f, "pin write failed"),
        }
    }
}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

impl embedded_hal::digital::Error for GpioError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
