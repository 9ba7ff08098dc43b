//! In-memory GPIO adapter.
//!
//! Implements [`GpioPort`] without touching hardware, for host runs and
//! tests.  Pin handles implement the `embedded-hal` digital traits and
//! share their level with the adapter, so the level of an opened line can
//! be read back or driven from outside after the service owns the handle.
//!
//! Inputs and outputs are tracked separately: a name opened both ways
//! (the rpi3 button and LED share `BCM6`) does not loop the LED level back
//! into the button.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState};

use crate::app::ports::GpioPort;
use crate::config::Edge;
use crate::error::GpioError;

/// Simulated peripheral manager.
#[derive(Debug, Default)]
pub struct SimGpio {
    inputs: HashMap<&'static str, (Rc<Cell<bool>>, Edge)>,
    outputs: HashMap<&'static str, Rc<Cell<bool>>>,
    failing: HashSet<&'static str>,
}

impl SimGpio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later open of `name` fail.
    pub fn fail_open(&mut self, name: &'static str) {
        self.failing.insert(name);
    }

    /// Drive an opened input.  Returns `false` if `name` is not open.
    pub fn set_input(&self, name: &str, high: bool) -> bool {
        match self.inputs.get(name) {
            Some((level, _)) => {
                level.set(high);
                true
            }
            None => false,
        }
    }

    /// Current level of an opened output.
    pub fn output_level(&self, name: &str) -> Option<bool> {
        self.outputs.get(name).map(|level| level.get())
    }

    /// Edge an input was opened with.
    pub fn input_edge(&self, name: &str) -> Option<Edge> {
        self.inputs.get(name).map(|(_, edge)| *edge)
    }

    /// Number of lines opened so far (inputs plus outputs).
    pub fn open_count(&self) -> usize {
        self.inputs.len() + self.outputs.len()
    }
}

impl GpioPort for SimGpio {
    type Input = SimInputPin;
    type Output = SimOutputPin;

    fn open_input(&mut self, name: &'static str, edge: Edge) -> Result<SimInputPin, GpioError> {
        if self.failing.contains(name) || self.inputs.contains_key(name) {
            return Err(GpioError::OpenFailed);
        }
        // Idle level is the opposite of the edge that signals a press.
        let level = Rc::new(Cell::new(edge == Edge::Falling));
        self.inputs.insert(name, (Rc::clone(&level), edge));
        Ok(SimInputPin { level })
    }

    fn open_output(
        &mut self,
        name: &'static str,
        initial: PinState,
    ) -> Result<SimOutputPin, GpioError> {
        if self.failing.contains(name) || self.outputs.contains_key(name) {
            return Err(GpioError::OpenFailed);
        }
        let level = Rc::new(Cell::new(initial == PinState::High));
        self.outputs.insert(name, Rc::clone(&level));
        Ok(SimOutputPin { level })
    }
}

// ── Pin handles ───────────────────────────────────────────────

#[derive(Debug)]
pub struct SimInputPin {
    level: Rc<Cell<bool>>,
}

impl ErrorType for SimInputPin {
    type Error = GpioError;
}

impl InputPin for SimInputPin {
    fn is_high(&mut self) -> Result<bool, GpioError> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, GpioError> {
        Ok(!self.level.get())
    }
}

#[derive(Debug)]
pub struct SimOutputPin {
    level: Rc<Cell<bool>>,
}

impl ErrorType for SimOutputPin {
    type Error = GpioError;
}

impl OutputPin for SimOutputPin {
    fn set_low(&mut self) -> Result<(), GpioError> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), GpioError> {
        self.level.set(true);
        Ok(())
    }
}
