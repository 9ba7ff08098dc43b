//! Doorbell board-support library.
//!
//! Maps the running board's identifier to its button GPIO, LED GPIO and
//! PWM port, then brings up the doorbell's button and LED on those pins.
//! Everything host-specific sits behind the port traits in
//! [`app::ports`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod board;
pub mod config;
pub mod error;

pub use board::{Board, BoardResolver, PinMapping};
pub use error::{Error, Result};
