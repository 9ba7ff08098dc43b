//! Application core: pure domain logic, zero I/O.
//!
//! Brings up the doorbell's button and LED on the pins resolved for the
//! running board and turns button edges into capture requests.  All
//! interaction with the host happens through **port traits** defined in
//! [`ports`], keeping this layer testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
