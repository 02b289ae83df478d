//! Dashboard session: the context shared by the poller and the LED controls.
//!
//! A [`Dashboard`] is created once per page (or terminal session) and owns
//! both reconcilers, the device client and the feedback surface. It is
//! always held in an [`Rc`]: LED controls keep a weak handle back to it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use ledboard_domain::button::ButtonReport;
use ledboard_domain::error::LedboardError;
use ledboard_domain::id::LedNumber;
use ledboard_domain::led::{LedAction, LedCommand, LedReport};
use ledboard_domain::status::ConnectionStatus;

use crate::availability::AvailableLeds;
use crate::config::DashboardConfig;
use crate::controls::{ControlDispatch, LedControls};
use crate::ports::{ButtonSurface, DeviceApi, Feedback, LedSurface, Runtime};
use crate::reconciler::{ButtonReconciler, LedReconciler};

/// Rendering targets handed to [`Dashboard::new`].
pub struct Surfaces<B, L, F> {
    pub buttons: B,
    pub leds: L,
    pub feedback: F,
}

/// Live dashboard session.
pub struct Dashboard<A, R, B: ButtonSurface, L: LedSurface, F> {
    api: A,
    runtime: R,
    follow_up_delay: Duration,
    buttons: RefCell<ButtonReconciler<B>>,
    leds: RefCell<LedReconciler<L>>,
    feedback: RefCell<F>,
}

impl<A, R, B, L, F> Dashboard<A, R, B, L, F>
where
    A: DeviceApi + 'static,
    R: Runtime,
    B: ButtonSurface + 'static,
    L: LedSurface + 'static,
    F: Feedback + 'static,
{
    /// Create a session. Nothing is fetched until a poll is requested.
    pub fn new(
        config: &DashboardConfig,
        api: A,
        runtime: R,
        surfaces: Surfaces<B, L, F>,
    ) -> Rc<Self> {
        Rc::new_cyclic(|this| {
            let dispatch = Self::dispatcher(this.clone(), runtime.clone());
            Self {
                api,
                runtime,
                follow_up_delay: config.follow_up_delay(),
                buttons: RefCell::new(ButtonReconciler::new(surfaces.buttons)),
                leds: RefCell::new(LedReconciler::new(surfaces.leds, dispatch)),
                feedback: RefCell::new(surfaces.feedback),
            }
        })
    }

    /// LED controls run their command as a background task on the runtime.
    fn dispatcher(this: Weak<Self>, runtime: R) -> ControlDispatch {
        Rc::new(move |number, action| {
            let Some(dashboard) = this.upgrade() else {
                tracing::debug!(led = %number, "dashboard dropped, ignoring control");
                return;
            };
            runtime.spawn(async move {
                // failures are already logged and surfaced by `control_led`
                let _ = dashboard.control_led(number, action).await;
            });
        })
    }

    /// Start one button poll and one LED poll, independently.
    pub fn tick(self: &Rc<Self>) {
        let dashboard = Rc::clone(self);
        self.runtime
            .spawn(async move { dashboard.poll_buttons().await });
        let dashboard = Rc::clone(self);
        self.runtime.spawn(async move { dashboard.poll_leds().await });
    }

    /// Fetch button states and reconcile them.
    ///
    /// Button polls drive the connectivity indicator. Failures are logged
    /// and shown in the button placeholder; rendered entries are kept.
    #[tracing::instrument(skip(self))]
    pub async fn poll_buttons(&self) {
        match self.api.fetch_buttons().await {
            Ok(body) => {
                match ButtonReport::from_json(&body) {
                    Some(report) => self.buttons.borrow_mut().reconcile(&report),
                    None => tracing::warn!("button response has no button list"),
                }
                self.feedback
                    .borrow_mut()
                    .show_connection(ConnectionStatus::Connected);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to update button states");
                self.buttons.borrow_mut().show_unavailable();
                self.feedback
                    .borrow_mut()
                    .show_connection(ConnectionStatus::Disconnected);
            }
        }
    }

    /// Fetch LED states, reconcile them and publish the available LEDs.
    ///
    /// Failures are logged and shown in the LED placeholder; they never
    /// change the connectivity indicator.
    #[tracing::instrument(skip(self))]
    pub async fn poll_leds(&self) {
        match self.api.fetch_leds().await {
            Ok(body) => {
                let report = LedReport::from_json(&body);
                self.leds.borrow_mut().reconcile(&report);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to update LED states");
                self.leds.borrow_mut().show_unavailable();
            }
        }
    }

    /// Send `action` to LED `number`, then refresh the LEDs after the
    /// follow-up delay.
    ///
    /// The returned future completes once the follow-up poll has been
    /// reconciled, so callers can await a consistent view.
    ///
    /// # Errors
    ///
    /// Returns [`LedboardError::UnavailableLed`] without any request when
    /// `number` was not in the latest LED snapshot, or
    /// [`LedboardError::Device`] when the device rejected the command (the
    /// user has already been alerted).
    #[tracing::instrument(skip(self, number, action), fields(led = %number, action = %action))]
    pub async fn control_led(
        &self,
        number: LedNumber,
        action: LedAction,
    ) -> Result<(), LedboardError> {
        if !self.leds.borrow().is_available(number) {
            tracing::warn!(led = %number, "LED is not available on this board");
            return Err(LedboardError::UnavailableLed(number));
        }

        let command = LedCommand {
            led: number,
            action,
        };
        if let Err(err) = self.api.send_led_command(command).await {
            tracing::error!(led = %number, %action, error = %err, "failed to control LED");
            self.feedback
                .borrow_mut()
                .alert(&format!("Failed to control LED {number}: {err}"));
            return Err(err.into());
        }
        tracing::info!(led = %number, %action, "LED command sent");

        self.runtime.sleep(self.follow_up_delay).await;
        self.poll_leds().await;
        Ok(())
    }

    /// Control handle for `number`, independent of whether it is rendered.
    ///
    /// Triggering it spawns [`control_led`](Self::control_led), so the
    /// availability guard still applies.
    #[must_use]
    pub fn controls_for(&self, number: LedNumber) -> LedControls {
        self.leds.borrow().controls_for(number)
    }

    /// LEDs currently accepted by [`control_led`](Self::control_led).
    #[must_use]
    pub fn available_leds(&self) -> AvailableLeds {
        self.leds.borrow().available().clone()
    }
}
