//! Line-oriented terminal surfaces.
//!
//! Entries are not redrawn in place: each surface prints a line when an
//! entry appears, changes or disappears, so the output reads as a log of
//! the board's state.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

use ledboard_app::controls::LedControls;
use ledboard_app::ports::{ButtonSurface, Feedback, LedSurface};
use ledboard_app::presentation::{ButtonView, LedView, Placeholder, connection_label};
use ledboard_domain::error::ValidationError;
use ledboard_domain::id::{ButtonNumber, LedNumber};
use ledboard_domain::led::LedAction;
use ledboard_domain::status::ConnectionStatus;

/// Shared writer used by every surface of a session.
pub struct Console<W>(Rc<RefCell<W>>);

impl<W> Clone for Console<W> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<W: Write> Console<W> {
    pub fn new(writer: W) -> Self {
        Self(Rc::new(RefCell::new(writer)))
    }

    fn line(&self, args: fmt::Arguments<'_>) {
        let mut writer = self.0.borrow_mut();
        if let Err(err) = writer.write_fmt(args).and_then(|()| writer.write_all(b"\n")) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }

    /// Run `f` with the underlying writer.
    pub fn with_writer<T>(&self, f: impl FnOnce(&W) -> T) -> T {
        f(&self.0.borrow())
    }
}

/// Remembers the last printed line of an entry.
#[derive(Debug)]
struct Row {
    last: Option<String>,
}

impl Row {
    fn new() -> Self {
        Self { last: None }
    }

    fn update<W: Write>(&mut self, console: &Console<W>, line: String) {
        if self.last.as_deref() != Some(line.as_str()) {
            console.line(format_args!("{line}"));
            self.last = Some(line);
        }
    }
}

fn print_placeholder<W: Write>(
    console: &Console<W>,
    last: &mut Option<Placeholder>,
    placeholder: Placeholder,
) {
    if placeholder.visible && *last != Some(placeholder) {
        console.line(format_args!("  {}", placeholder.text));
    }
    *last = Some(placeholder);
}

/// Button rows.
pub struct TerminalButtons<W> {
    console: Console<W>,
    placeholder: Option<Placeholder>,
}

impl<W: Write> TerminalButtons<W> {
    pub fn new(console: Console<W>) -> Self {
        Self {
            console,
            placeholder: None,
        }
    }
}

/// A rendered button row.
#[derive(Debug)]
pub struct ButtonRow {
    number: ButtonNumber,
    row: Row,
}

impl<W: Write> ButtonSurface for TerminalButtons<W> {
    type Entry = ButtonRow;

    fn create_entry(&mut self, number: ButtonNumber) -> Option<ButtonRow> {
        self.console.line(format_args!("+ button {number}"));
        Some(ButtonRow {
            number,
            row: Row::new(),
        })
    }

    fn render_entry(&mut self, entry: &mut ButtonRow, view: &ButtonView) {
        let line = format!(
            "  button {:<3} {:<16} {:<9} count {}",
            view.number,
            view.label,
            view.state_text(),
            view.count
        );
        entry.row.update(&self.console, line);
    }

    fn remove_entry(&mut self, entry: ButtonRow) {
        self.console.line(format_args!("- button {}", entry.number));
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        print_placeholder(&self.console, &mut self.placeholder, placeholder);
    }
}

/// Controls of the currently rendered LEDs, keyed by number.
#[derive(Clone, Default)]
pub struct ControlPanel(Rc<RefCell<BTreeMap<LedNumber, LedControls>>>);

/// Why a typed command could not be dispatched.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("usage: <led number> <on|off|toggle>")]
    Usage,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("LED {0} is not shown")]
    NotShown(LedNumber),
}

impl ControlPanel {
    /// Parse `<number> <action>` and trigger the matching LED control.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError`] when the line is malformed or the LED is not
    /// currently rendered.
    pub fn dispatch(&self, line: &str) -> Result<(), PanelError> {
        let mut words = line.split_whitespace();
        let (Some(number), Some(action), None) = (words.next(), words.next(), words.next())
        else {
            return Err(PanelError::Usage);
        };
        let number: LedNumber = number.parse()?;
        let action: LedAction = action.parse()?;

        let controls = self.0.borrow().get(&number).cloned();
        let controls = controls.ok_or(PanelError::NotShown(number))?;
        controls.trigger(action);
        Ok(())
    }

    /// Rendered LED numbers in ascending order.
    #[must_use]
    pub fn numbers(&self) -> Vec<LedNumber> {
        self.0.borrow().keys().copied().collect()
    }

    fn insert(&self, controls: LedControls) {
        self.0.borrow_mut().insert(controls.number(), controls);
    }

    fn remove(&self, number: LedNumber) {
        self.0.borrow_mut().remove(&number);
    }
}

/// LED rows; each LED's controls are registered on the [`ControlPanel`].
pub struct TerminalLeds<W> {
    console: Console<W>,
    panel: ControlPanel,
    placeholder: Option<Placeholder>,
}

impl<W: Write> TerminalLeds<W> {
    pub fn new(console: Console<W>, panel: ControlPanel) -> Self {
        Self {
            console,
            panel,
            placeholder: None,
        }
    }
}

/// A rendered LED row.
#[derive(Debug)]
pub struct LedRow {
    number: LedNumber,
    row: Row,
}

impl<W: Write> LedSurface for TerminalLeds<W> {
    type Entry = LedRow;

    fn create_entry(
        &mut self,
        number: LedNumber,
        controls: LedControls,
        _before: Option<&LedRow>,
    ) -> Option<LedRow> {
        self.console.line(format_args!("+ led {number}"));
        self.panel.insert(controls);
        Some(LedRow {
            number,
            row: Row::new(),
        })
    }

    fn render_entry(&mut self, entry: &mut LedRow, view: &LedView) {
        let state = if view.is_on { "on" } else { "off" };
        let line = format!("  led {:<6} {:<16} {state}", view.number, view.label);
        entry.row.update(&self.console, line);
    }

    fn remove_entry(&mut self, entry: LedRow) {
        self.panel.remove(entry.number);
        self.console.line(format_args!("- led {}", entry.number));
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        print_placeholder(&self.console, &mut self.placeholder, placeholder);
    }
}

/// Connectivity changes and alerts.
pub struct TerminalFeedback<W> {
    console: Console<W>,
    connection: Option<ConnectionStatus>,
}

impl<W: Write> TerminalFeedback<W> {
    pub fn new(console: Console<W>) -> Self {
        Self {
            console,
            connection: None,
        }
    }
}

impl<W: Write> Feedback for TerminalFeedback<W> {
    fn show_connection(&mut self, status: ConnectionStatus) {
        if self.connection.replace(status) != Some(status) {
            self.console.line(format_args!("{}", connection_label(status)));
        }
    }

    fn alert(&mut self, message: &str) {
        self.console.line(format_args!("! {message}"));
    }
}
