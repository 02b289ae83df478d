//! What each rendered entry should show, independent of the medium.

use ledboard_domain::button::ButtonState;
use ledboard_domain::id::{ButtonNumber, LedNumber};
use ledboard_domain::led::LedState;
use ledboard_domain::status::ConnectionStatus;

/// State text colour while a button is held.
pub const BUTTON_PRESSED_COLOR: &str = "#4caf50";
/// State text colour while a button is released.
pub const BUTTON_RELEASED_COLOR: &str = "#757575";

/// Presentation of one button entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub number: ButtonNumber,
    pub label: String,
    pub pressed: bool,
    pub count: u64,
}

impl ButtonView {
    /// `Pressed` or `Released`.
    #[must_use]
    pub fn state_text(&self) -> &'static str {
        if self.pressed { "Pressed" } else { "Released" }
    }

    #[must_use]
    pub fn state_color(&self) -> &'static str {
        if self.pressed {
            BUTTON_PRESSED_COLOR
        } else {
            BUTTON_RELEASED_COLOR
        }
    }

    /// Whether the entry carries the `active` class.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.pressed
    }
}

impl From<&ButtonState> for ButtonView {
    fn from(button: &ButtonState) -> Self {
        Self {
            number: button.number,
            label: button.label(),
            pressed: button.pressed,
            count: button.count,
        }
    }
}

/// Presentation of one LED entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedView {
    pub number: LedNumber,
    pub label: String,
    /// Whether the indicator carries the `on` class.
    pub is_on: bool,
}

impl From<&LedState> for LedView {
    fn from(led: &LedState) -> Self {
        Self {
            number: led.number,
            label: led.label(),
            is_on: led.is_on,
        }
    }
}

/// Message shown in a category's region when it has nothing to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub text: &'static str,
    pub visible: bool,
}

impl Placeholder {
    /// Reset after a successful button poll; visible only if it was empty.
    #[must_use]
    pub fn waiting_for_buttons(empty: bool) -> Self {
        Self {
            text: "Waiting for button data...",
            visible: empty,
        }
    }

    /// Reset after a successful LED poll; visible only if it was empty.
    #[must_use]
    pub fn waiting_for_leds(empty: bool) -> Self {
        Self {
            text: "Waiting for LED data...",
            visible: empty,
        }
    }

    #[must_use]
    pub fn buttons_unavailable() -> Self {
        Self {
            text: "Failed to load button data",
            visible: true,
        }
    }

    #[must_use]
    pub fn leds_unavailable() -> Self {
        Self {
            text: "Failed to load LED data",
            visible: true,
        }
    }
}

/// Text of the connectivity indicator.
#[must_use]
pub fn connection_label(status: ConnectionStatus) -> String {
    format!("\u{2b24} {status}")
}

/// CSS classes of the connectivity indicator.
#[must_use]
pub fn connection_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "info-value status-online",
        ConnectionStatus::Disconnected => "info-value status-offline",
    }
}
