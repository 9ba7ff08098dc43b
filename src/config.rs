//! Doorbell configuration parameters.
//!
//! Loaded once at startup: defaults, then an optional JSON file named by
//! `DOORBELL_CONFIG`, then individual environment overrides.  Nothing here
//! changes the board table; it only selects which board to resolve and how
//! the button/LED behave.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable holding a path to a JSON config file.
pub const ENV_CONFIG_PATH: &str = "DOORBELL_CONFIG";
/// Environment variable overriding the detected board identifier.
pub const ENV_BOARD: &str = "DOORBELL_BOARD";
/// Environment variable overriding [`DoorbellConfig::led_hold_ms`].
pub const ENV_LED_HOLD_MS: &str = "DOORBELL_LED_HOLD_MS";

/// Signal edge that counts as a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// High-to-low transition (active-low switch with pull-up).
    Falling,
    /// Low-to-high transition.
    Rising,
}

/// Core doorbell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorbellConfig {
    /// Board identifier to use instead of the host's device-model property.
    pub board: Option<String>,
    /// How long the LED stays lit after a picture is taken (milliseconds).
    pub led_hold_ms: u32,
    /// Edge on the button GPIO that triggers a ring.
    pub button_edge: Edge,
}

impl Default for DoorbellConfig {
    fn default() -> Self {
        Self {
            board: None,
            led_hold_ms: 5_000,
            button_edge: Edge::Falling,
        }
    }
}

impl DoorbellConfig {
    /// Parse and validate a JSON document.  Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `var` to look up environment values.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match var(ENV_CONFIG_PATH) {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .map_err(|_| Error::Config("config file unreadable"))?;
                Self::from_json(&text)?
            }
            None => Self::default(),
        };

        if let Some(board) = var(ENV_BOARD).filter(|b| !b.is_empty()) {
            config.board = Some(board);
        }
        if let Some(hold) = var(ENV_LED_HOLD_MS) {
            config.led_hold_ms = hold
                .trim()
                .parse()
                .map_err(|_| Error::Config("DOORBELL_LED_HOLD_MS is not a number"))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values the service cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.led_hold_ms == 0 {
            return Err(Error::Config("led_hold_ms must be non-zero"));
        }
        // Keeps the wrapping deadline comparison in the service unambiguous.
        if self.led_hold_ms > u32::MAX / 2 {
            return Err(Error::Config("led_hold_ms too large"));
        }
        if self.board.as_ref().is_some_and(|b| b.is_empty()) {
            return Err(Error::Config("board override is empty"));
        }
        Ok(())
    }
}
