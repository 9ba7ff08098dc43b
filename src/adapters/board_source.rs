//! Board identity sources.
//!
//! The identifier the resolver matches against comes from the host's
//! device-model property (`ro.product.device` on Android).  It can be
//! overridden from configuration (`board`, or `DOORBELL_BOARD`) or pinned
//! to a fixed value for tests.
//! Sources return the identifier verbatim apart from stripping the line
//! terminator a property tool prints; they never normalise case.

use log::debug;

use crate::app::ports::BoardSource;
use crate::config::DoorbellConfig;
use crate::error::{Error, Result};

/// Property holding the device model on Android.
pub const DEVICE_PROPERTY: &str = "ro.product.device";

/// A fixed identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBoard(pub String);

impl BoardSource for FixedBoard {
    fn board_id(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Reads the host's device-model property.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProperty;

/// Query the property through `getprop`.
#[cfg(target_os = "android")]
impl BoardSource for SystemProperty {
    fn board_id(&self) -> Result<String> {
        let output = std::process::Command::new("getprop")
            .arg(DEVICE_PROPERTY)
            .output()
            .map_err(|_| Error::BoardSource("getprop could not be run"))?;
        if !output.status.success() {
            return Err(Error::BoardSource("getprop failed"));
        }
        let text = String::from_utf8(output.stdout)
            .map_err(|_| Error::BoardSource("device property is not UTF-8"))?;
        let id = strip_line_end(&text);
        if id.is_empty() {
            return Err(Error::BoardSource("device property is empty"));
        }
        debug!("{} = '{}'", DEVICE_PROPERTY, id);
        Ok(id.to_string())
    }
}

/// Simulation: hosts without the property report it as unavailable.
#[cfg(not(target_os = "android"))]
impl BoardSource for SystemProperty {
    fn board_id(&self) -> Result<String> {
        debug!("{} unavailable on this host", DEVICE_PROPERTY);
        Err(Error::BoardSource("device property unavailable on this host"))
    }
}

/// Remove a single trailing `\n` or `\r\n`, nothing else.
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
fn strip_line_end(s: &str) -> &str {
    match s.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => s,
    }
}

/// Source selected by configuration: the `board` override if set,
/// otherwise the system property.
pub fn board_source_for(config: &DoorbellConfig) -> Box<dyn BoardSource> {
    match &config.board {
        Some(board) => {
            debug!("Board override from config: '{}'", board);
            Box::new(FixedBoard(board.clone()))
        }
        None => Box::new(SystemProperty),
    }
}
