//! Mock GPIO adapter for integration tests.
//!
//! Records every open and write so tests can assert on the full command
//! history without touching real pins.

use std::cell::RefCell;
use std::rc::Rc;

use doorbell::app::events::DoorbellEvent;
use doorbell::app::ports::{EventSink, GpioPort};
use doorbell::config::Edge;
use doorbell::error::GpioError;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState};

// ── GPIO call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum GpioCall {
    OpenInput { name: &'static str, edge: Edge },
    OpenOutput { name: &'static str, initial: PinState },
    Write { name: &'static str, high: bool },
}

type CallLog = Rc<RefCell<Vec<GpioCall>>>;

// ── MockGpio ──────────────────────────────────────────────────

#[derive(Default)]
pub struct MockGpio {
    pub calls: CallLog,
    /// Level every input reports.
    pub input_level: Rc<RefCell<bool>>,
    /// Writes to outputs fail when set.
    pub fail_writes: bool,
    /// Opening this name fails.
    pub fail_open: Option<&'static str>,
}

#[allow(dead_code)]
impl MockGpio {
    pub fn new() -> Self {
        let gpio = Self::default();
        *gpio.input_level.borrow_mut() = true;
        gpio
    }

    pub fn calls(&self) -> Vec<GpioCall> {
        self.calls.borrow().clone()
    }

    pub fn last_write(&self) -> Option<GpioCall> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find(|c| matches!(c, GpioCall::Write { .. }))
            .cloned()
    }
}

impl GpioPort for MockGpio {
    type Input = MockInput;
    type Output = MockOutput;

    fn open_input(&mut self, name: &'static str, edge: Edge) -> Result<MockInput, GpioError> {
        if self.fail_open == Some(name) {
            return Err(GpioError::OpenFailed);
        }
        self.calls.borrow_mut().push(GpioCall::OpenInput { name, edge });
        Ok(MockInput {
            level: Rc::clone(&self.input_level),
        })
    }

    fn open_output(
        &mut self,
        name: &'static str,
        initial: PinState,
    ) -> Result<MockOutput, GpioError> {
        if self.fail_open == Some(name) {
            return Err(GpioError::OpenFailed);
        }
        self.calls.borrow_mut().push(GpioCall::OpenOutput { name, initial });
        Ok(MockOutput {
            name,
            calls: Rc::clone(&self.calls),
            fail_writes: self.fail_writes,
        })
    }
}

pub struct MockInput {
    level: Rc<RefCell<bool>>,
}

impl ErrorType for MockInput {
    type Error = GpioError;
}

impl InputPin for MockInput {
    fn is_high(&mut self) -> Result<bool, GpioError> {
        Ok(*self.level.borrow())
    }

    fn is_low(&mut self) -> Result<bool, GpioError> {
        Ok(!*self.level.borrow())
    }
}

pub struct MockOutput {
    name: &'static str,
    calls: CallLog,
    fail_writes: bool,
}

impl MockOutput {
    fn write(&mut self, high: bool) -> Result<(), GpioError> {
        if self.fail_writes {
            return Err(GpioError::WriteFailed);
        }
        self.calls.borrow_mut().push(GpioCall::Write {
            name: self.name,
            high,
        });
        Ok(())
    }
}

impl ErrorType for MockOutput {
    type Error = GpioError;
}

impl OutputPin for MockOutput {
    fn set_low(&mut self) -> Result<(), GpioError> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), GpioError> {
        self.write(true)
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct VecSink {
    pub events: Vec<DoorbellEvent>,
}

#[allow(dead_code)]
impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, wanted: &DoorbellEvent) -> usize {
        self.events.iter().filter(|e| *e == wanted).count()
    }
}

impl EventSink for VecSink {
    fn emit(&mut self, event: &DoorbellEvent) {
        self.events.push(event.clone());
    }
}
