//! Board-to-pin assignments for the supported single-board computers.
//!
//! Single source of truth: every peripheral opened by the doorbell takes its
//! pin name from here rather than hard-coding it.  The table is fixed at
//! build time and read-only for the life of the process.
//!
//! | BoardId       | Button GPIO  | LED GPIO     | PWM port |
//! |---------------|--------------|--------------|----------|
//! | `rpi3`        | `BCM6`       | `BCM6`       | `PWM0`   |
//! | `imx6ul_pico` | `GPIO4_IO22` | `GPIO4_IO22` | `PWM7`   |
//! | `imx7d_pico`  | `GPIO2_IO05` | `GPIO6_IO14` | `PWM1`   |

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Known boards
// ---------------------------------------------------------------------------

/// A board this crate has a pin mapping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Board {
    /// Raspberry Pi 3.
    Rpi3,
    /// NXP i.MX6UL on a PICO carrier.
    Imx6ulPico,
    /// NXP i.MX7D on a PICO carrier.
    Imx7dPico,
}

impl Board {
    /// Every supported board, in table order.
    pub const ALL: [Board; 3] = [Board::Rpi3, Board::Imx6ulPico, Board::Imx7dPico];

    /// Identifier reported by the host's device-model property.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rpi3 => "rpi3",
            Self::Imx6ulPico => "imx6ul_pico",
            Self::Imx7dPico => "imx7d_pico",
        }
    }

    /// Exact, case-sensitive match of `id` against the known identifiers.
    pub fn lookup(id: &str) -> Option<Board> {
        Self::ALL.into_iter().find(|b| b.as_str() == id)
    }

    /// Pin assignments for this board.
    pub const fn pins(self) -> PinMapping {
        // Table rows are ordered like `ALL`.
        BOARD_TABLE[self as usize].1
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::lookup(s).ok_or_else(|| Error::UnsupportedBoard(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Pin table
// ---------------------------------------------------------------------------

/// Pin and port names for one board, as understood by the host's
/// peripheral manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinMapping {
    /// Doorbell push-button input.
    pub button_gpio: &'static str,
    /// Indicator LED output.
    pub led_gpio: &'static str,
    /// Preferred PWM output port.
    pub pwm_port: &'static str,
}

/// One row per supported board.
pub const BOARD_TABLE: [(Board, PinMapping); 3] = [
    (
        Board::Rpi3,
        PinMapping {
            button_gpio: "BCM6",
            led_gpio: "BCM6",
            pwm_port: "PWM0",
        },
    ),
    (
        Board::Imx6ulPico,
        PinMapping {
            button_gpio: "GPIO4_IO22",
            led_gpio: "GPIO4_IO22",
            pwm_port: "PWM7",
        },
    ),
    (
        Board::Imx7dPico,
        PinMapping {
            button_gpio: "GPIO2_IO05",
            led_gpio: "GPIO6_IO14",
            pwm_port: "PWM1",
        },
    ),
];

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Resolves pin names for the board identified at startup.
///
/// The identifier is passed in rather than read from global state.  Every
/// operation is a pure function of the identifier the resolver was built
/// with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResolver {
    board_id: String,
    board: Option<Board>,
}

impl BoardResolver {
    pub fn new(board_id: &str) -> Self {
        Self {
            board_id: board_id.to_string(),
            board: Board::lookup(board_id),
        }
    }

    /// Identifier this resolver was built with.
    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// The matched board, or `UnsupportedBoard` carrying the identifier.
    pub fn board(&self) -> Result<Board> {
        self.board
            .ok_or_else(|| Error::UnsupportedBoard(self.board_id.clone()))
    }

    /// All three pin names at once.
    pub fn mapping(&self) -> Result<PinMapping> {
        self.board().map(Board::pins)
    }

    /// GPIO the doorbell button is wired to.
    pub fn resolve_button_pin(&self) -> Result<&'static str> {
        self.mapping().map(|m| m.button_gpio)
    }

    /// GPIO the indicator LED is wired to.
    pub fn resolve_led_pin(&self) -> Result<&'static str> {
        self.mapping().map(|m| m.led_gpio)
    }

    /// Preferred PWM port.
    pub fn resolve_pwm_port(&self) -> Result<&'static str> {
        self.mapping().map(|m| m.pwm_port)
    }
}
