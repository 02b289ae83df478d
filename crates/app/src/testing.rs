//! In-memory fakes for the ports, shared by the unit tests.
//!
//! Every fake is a cheap handle over shared state so a test can keep a clone
//! after moving the original into a reconciler or dashboard.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use ledboard_domain::error::DeviceError;
use ledboard_domain::id::{ButtonNumber, LedNumber};
use ledboard_domain::led::{LedAction, LedCommand};
use ledboard_domain::status::ConnectionStatus;
use serde_json::Value;

use crate::controls::{ControlDispatch, LedControls};
use crate::ports::{ButtonSurface, DeviceApi, Feedback, LedSurface, Runtime};
use crate::presentation::{ButtonView, LedView, Placeholder};

/// What a rendered button shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonNode {
    pub label: String,
    pub state_text: &'static str,
    pub count: String,
    pub active: bool,
}

#[derive(Default)]
struct ButtonGrid {
    nodes: Vec<(ButtonNumber, Option<ButtonNode>)>,
    placeholder: Option<Placeholder>,
    created: usize,
    removed: Vec<f64>,
    missing_template: bool,
}

/// Button surface keeping nodes in append order, like a DOM grid.
#[derive(Clone, Default)]
pub struct FakeButtonSurface(Rc<RefCell<ButtonGrid>>);

impl FakeButtonSurface {
    pub fn without_template() -> Self {
        let surface = Self::default();
        surface.0.borrow_mut().missing_template = true;
        surface
    }

    pub fn restore_template(&self) {
        self.0.borrow_mut().missing_template = false;
    }

    pub fn node(&self, number: impl Into<f64>) -> Option<ButtonNode> {
        let number = ButtonNumber::from_f64(number.into());
        self.0
            .borrow()
            .nodes
            .iter()
            .find(|(n, _)| Some(*n) == number)
            .and_then(|(_, node)| node.clone())
    }

    pub fn grid_order(&self) -> Vec<f64> {
        self.0.borrow().nodes.iter().map(|(n, _)| n.get()).collect()
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        self.0.borrow().placeholder
    }

    pub fn created(&self) -> usize {
        self.0.borrow().created
    }

    pub fn removed(&self) -> Vec<f64> {
        self.0.borrow().removed.clone()
    }
}

impl ButtonSurface for FakeButtonSurface {
    type Entry = ButtonNumber;

    fn create_entry(&mut self, number: ButtonNumber) -> Option<Self::Entry> {
        let mut grid = self.0.borrow_mut();
        if grid.missing_template {
            return None;
        }
        grid.created += 1;
        grid.nodes.push((number, None));
        Some(number)
    }

    fn render_entry(&mut self, entry: &mut Self::Entry, view: &ButtonView) {
        let mut grid = self.0.borrow_mut();
        if let Some((_, node)) = grid.nodes.iter_mut().find(|(n, _)| n == entry) {
            *node = Some(ButtonNode {
                label: view.label.clone(),
                state_text: view.state_text(),
                count: view.count.to_string(),
                active: view.is_active(),
            });
        }
    }

    fn remove_entry(&mut self, entry: Self::Entry) {
        let mut grid = self.0.borrow_mut();
        grid.nodes.retain(|(n, _)| *n != entry);
        grid.removed.push(entry.get());
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.0.borrow_mut().placeholder = Some(placeholder);
    }
}

#[derive(Default)]
struct LedGrid {
    nodes: Vec<(LedNumber, Option<LedView>, LedControls)>,
    placeholder: Option<Placeholder>,
    removed: Vec<f64>,
}

/// LED surface inserting nodes before the given entry, like a DOM grid,
/// with clickable controls.
#[derive(Clone, Default)]
pub struct FakeLedSurface(Rc<RefCell<LedGrid>>);

impl FakeLedSurface {
    pub fn node(&self, number: impl Into<f64>) -> Option<LedView> {
        let number = LedNumber::from_f64(number.into());
        self.0
            .borrow()
            .nodes
            .iter()
            .find(|(n, _, _)| Some(*n) == number)
            .and_then(|(_, view, _)| view.clone())
    }

    pub fn grid_order(&self) -> Vec<f64> {
        self.0
            .borrow()
            .nodes
            .iter()
            .map(|(n, _, _)| n.get())
            .collect()
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        self.0.borrow().placeholder
    }

    pub fn removed(&self) -> Vec<f64> {
        self.0.borrow().removed.clone()
    }

    /// Simulate a click on the control for `action` of LED `number`.
    pub fn click(&self, number: impl Into<f64>, action: LedAction) {
        let number = LedNumber::from_f64(number.into());
        let controls = self
            .0
            .borrow()
            .nodes
            .iter()
            .find(|(n, _, _)| Some(*n) == number)
            .map(|(_, _, controls)| controls.clone());
        if let Some(controls) = controls {
            controls.trigger(action);
        }
    }
}

impl LedSurface for FakeLedSurface {
    type Entry = LedNumber;

    fn create_entry(
        &mut self,
        number: LedNumber,
        controls: LedControls,
        before: Option<&Self::Entry>,
    ) -> Option<Self::Entry> {
        let mut grid = self.0.borrow_mut();
        let index = before
            .and_then(|before| grid.nodes.iter().position(|(n, _, _)| n == before))
            .unwrap_or(grid.nodes.len());
        grid.nodes.insert(index, (number, None, controls));
        Some(number)
    }

    fn render_entry(&mut self, entry: &mut Self::Entry, view: &LedView) {
        let mut grid = self.0.borrow_mut();
        if let Some((_, node, _)) = grid.nodes.iter_mut().find(|(n, _, _)| n == entry) {
            *node = Some(view.clone());
        }
    }

    fn remove_entry(&mut self, entry: Self::Entry) {
        let mut grid = self.0.borrow_mut();
        grid.nodes.retain(|(n, _, _)| *n != entry);
        grid.removed.push(entry.get());
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.0.borrow_mut().placeholder = Some(placeholder);
    }
}

/// Dispatch that records every call.
pub type DispatchCalls = Rc<RefCell<Vec<(LedNumber, LedAction)>>>;

pub fn recording_dispatch() -> (ControlDispatch, DispatchCalls) {
    let calls = DispatchCalls::default();
    let recorded = Rc::clone(&calls);
    let dispatch: ControlDispatch =
        Rc::new(move |number, action| recorded.borrow_mut().push((number, action)));
    (dispatch, calls)
}

#[derive(Default)]
struct FeedbackState {
    connection: Option<ConnectionStatus>,
    alerts: Vec<String>,
}

/// Feedback recording the connection indicator and alerts.
#[derive(Clone, Default)]
pub struct FakeFeedback(Rc<RefCell<FeedbackState>>);

impl FakeFeedback {
    pub fn connection(&self) -> Option<ConnectionStatus> {
        self.0.borrow().connection
    }

    pub fn alerts(&self) -> Vec<String> {
        self.0.borrow().alerts.clone()
    }
}

impl Feedback for FakeFeedback {
    fn show_connection(&mut self, status: ConnectionStatus) {
        self.0.borrow_mut().connection = Some(status);
    }

    fn alert(&mut self, message: &str) {
        self.0.borrow_mut().alerts.push(message.to_string());
    }
}

type Reply = Result<Value, DeviceError>;

#[derive(Default)]
struct ApiState {
    buttons: RefCell<VecDeque<Reply>>,
    leds: RefCell<VecDeque<Reply>>,
    command_failure: RefCell<Option<DeviceError>>,
    commands: RefCell<Vec<LedCommand>>,
    button_fetches: Cell<usize>,
    led_fetches: Cell<usize>,
}

/// Device API replaying queued replies. The last reply of each queue is
/// repeated once the queue is drained; an empty queue answers `503`.
#[derive(Clone, Default)]
pub struct FakeDeviceApi(Rc<ApiState>);

impl FakeDeviceApi {
    pub fn push_buttons(&self, reply: Reply) {
        self.0.buttons.borrow_mut().push_back(reply);
    }

    pub fn push_leds(&self, reply: Reply) {
        self.0.leds.borrow_mut().push_back(reply);
    }

    pub fn fail_commands(&self, err: DeviceError) {
        *self.0.command_failure.borrow_mut() = Some(err);
    }

    pub fn commands(&self) -> Vec<LedCommand> {
        self.0.commands.borrow().clone()
    }

    pub fn button_fetches(&self) -> usize {
        self.0.button_fetches.get()
    }

    pub fn led_fetches(&self) -> usize {
        self.0.led_fetches.get()
    }

    fn next(queue: &RefCell<VecDeque<Reply>>) -> Reply {
        let mut queue = queue.borrow_mut();
        if queue.len() > 1 {
            queue.pop_front().unwrap_or(Err(DeviceError::Status(503)))
        } else {
            queue.front().cloned().unwrap_or(Err(DeviceError::Status(503)))
        }
    }
}

impl DeviceApi for FakeDeviceApi {
    fn fetch_buttons(&self) -> impl Future<Output = Result<Value, DeviceError>> {
        self.0.button_fetches.set(self.0.button_fetches.get() + 1);
        let reply = Self::next(&self.0.buttons);
        async { reply }
    }

    fn fetch_leds(&self) -> impl Future<Output = Result<Value, DeviceError>> {
        self.0.led_fetches.set(self.0.led_fetches.get() + 1);
        let reply = Self::next(&self.0.leds);
        async { reply }
    }

    fn send_led_command(
        &self,
        command: LedCommand,
    ) -> impl Future<Output = Result<(), DeviceError>> {
        self.0.commands.borrow_mut().push(command);
        let reply = match self.0.command_failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        };
        async { reply }
    }
}

/// Runtime backed by the tokio local executor; tests run inside a `LocalSet`.
#[derive(Clone, Copy, Default)]
pub struct TestRuntime;

impl Runtime for TestRuntime {
    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static {
        tokio::time::sleep(duration)
    }
}
