//! Handles that let rendered LED controls issue commands.

use std::fmt;
use std::rc::Rc;

use ledboard_domain::id::LedNumber;
use ledboard_domain::led::LedAction;

/// Callback that dispatches a command for an LED.
pub type ControlDispatch = Rc<dyn Fn(LedNumber, LedAction)>;

/// Controls bound to one LED, handed to the surface when the entry is created.
#[derive(Clone)]
pub struct LedControls {
    number: LedNumber,
    dispatch: ControlDispatch,
}

impl LedControls {
    #[must_use]
    pub fn new(number: LedNumber, dispatch: ControlDispatch) -> Self {
        Self { number, dispatch }
    }

    #[must_use]
    pub fn number(&self) -> LedNumber {
        self.number
    }

    /// Request `action` on this LED. Fire-and-forget.
    pub fn trigger(&self, action: LedAction) {
        (self.dispatch)(self.number, action);
    }
}

impl fmt::Debug for LedControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedControls")
            .field("number", &self.number)
            .finish_non_exhaustive()
    }
}
