//! LED reconciler: also publishes which LEDs may receive commands.

use std::collections::BTreeSet;
use std::rc::Rc;

use ledboard_domain::id::LedNumber;
use ledboard_domain::led::LedReport;

use crate::availability::AvailableLeds;
use crate::controls::{ControlDispatch, LedControls};
use crate::ports::LedSurface;
use crate::presentation::{LedView, Placeholder};
use crate::rendered::RenderedEntries;

/// Keeps a [`LedSurface`] in sync with the latest LED snapshot.
pub struct LedReconciler<S: LedSurface> {
    surface: S,
    entries: RenderedEntries<LedNumber, S::Entry>,
    dispatch: ControlDispatch,
    available: AvailableLeds,
}

impl<S: LedSurface> LedReconciler<S> {
    /// `dispatch` is bound to every entry created from now on.
    pub fn new(surface: S, dispatch: ControlDispatch) -> Self {
        Self {
            surface,
            entries: RenderedEntries::new(),
            dispatch,
            available: AvailableLeds::default(),
        }
    }

    /// Render `report` in ascending LED order, drop entries for LEDs it no
    /// longer lists, then publish the reported numbers as available.
    ///
    /// A new entry is created in front of the next higher rendered LED, so
    /// the surface stays sorted across polls.
    pub fn reconcile(&mut self, report: &LedReport) {
        self.surface
            .show_placeholder(Placeholder::waiting_for_leds(report.is_empty()));

        let mut seen = BTreeSet::new();
        for led in &report.leds {
            seen.insert(led.number);

            let surface = &mut self.surface;
            let dispatch = &self.dispatch;
            let Some(entry) = self.entries.get_or_create_ordered(led.number, |before| {
                let controls = LedControls::new(led.number, Rc::clone(dispatch));
                surface.create_entry(led.number, controls, before)
            }) else {
                continue;
            };
            surface.render_entry(entry, &LedView::from(led));
        }

        let surface = &mut self.surface;
        self.entries.prune(&seen, |number, entry| {
            tracing::debug!(led = %number, "removing stale LED");
            surface.remove_entry(entry);
        });

        self.available = AvailableLeds::from(seen);
    }

    /// Signal that the last fetch failed. Entries and availability are kept.
    pub fn show_unavailable(&mut self) {
        self.surface.show_placeholder(Placeholder::leds_unavailable());
    }

    /// Whether `number` was part of the latest successful snapshot.
    #[must_use]
    pub fn is_available(&self, number: LedNumber) -> bool {
        self.available.contains(number)
    }

    /// A control handle for `number`, wired like the rendered entries.
    #[must_use]
    pub fn controls_for(&self, number: LedNumber) -> LedControls {
        LedControls::new(number, Rc::clone(&self.dispatch))
    }

    pub fn available(&self) -> &AvailableLeds {
        &self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeLedSurface, recording_dispatch};
    use ledboard_domain::led::LedAction;
    use serde_json::json;

    fn report(body: serde_json::Value) -> LedReport {
        LedReport::from_json(&body)
    }

    fn led(n: u32) -> LedNumber {
        LedNumber::new(n).unwrap()
    }

    #[test]
    fn should_render_leds_in_ascending_order() {
        let surface = FakeLedSurface::default();
        let (dispatch, _) = recording_dispatch();
        let mut reconciler = LedReconciler::new(surface.clone(), dispatch);

        reconciler.reconcile(&report(json!({
            "leds": [{"number": 2, "is_on": true}, {"number": 1, "is_on": false}]
        })));

        assert_eq!(surface.grid_order(), vec![1.0, 2.0]);
        assert!(surface.node(2).unwrap().is_on);
        assert!(!surface.node(1).unwrap().is_on);
        assert_eq!(surface.node(1).unwrap().label, "LED 1");
    }

    #[test]
    fn should_insert_late_led_before_higher_rendered_ones() {
        let surface = FakeLedSurface::default();
        let (dispatch, _) = recording_dispatch();
        let mut reconciler = LedReconciler::new(surface.clone(), dispatch);

        reconciler.reconcile(&report(json!({"leds": [{"number": 2}, {"number": 4}]})));
        reconciler.reconcile(&report(json!({
            "leds": [{"number": 4}, {"number": 2}, {"number": 1}, {"number": 3}, {"number": 2.5}]
        })));

        assert_eq!(surface.grid_order(), vec![1.0, 2.0, 2.5, 3.0, 4.0]);
        assert_eq!(surface.node(2.5).unwrap().label, "LED 2.5");
    }

    #[test]
    fn should_publish_available_numbers() {
        let surface = FakeLedSurface::default();
        let (dispatch, _) = recording_dispatch();
        let mut reconciler = LedReconciler::new(surface, dispatch);

        reconciler.reconcile(&report(json!({
            "leds": [{"number": 3, "is_on": false}, {"number": 1, "is_on": false}]
        })));

        assert!(reconciler.is_available(led(1)));
        assert!(reconciler.is_available(led(3)));
        assert!(!reconciler.is_available(led(2)));
        assert_eq!(
            reconciler.available().iter().map(LedNumber::get).collect::<Vec<_>>(),
            vec![1.0, 3.0]
        );
    }

    #[test]
    fn should_prune_and_unpublish_missing_leds() {
        let surface = FakeLedSurface::default();
        let (dispatch, _) = recording_dispatch();
        let mut reconciler = LedReconciler::new(surface.clone(), dispatch);

        reconciler.reconcile(&report(json!({
            "leds": [{"number": 1, "is_on": false}, {"number": 2, "is_on": true}]
        })));
        reconciler.reconcile(&report(json!({"leds": [{"number": 2, "is_on": false}]})));

        assert_eq!(surface.grid_order(), vec![2.0]);
        assert_eq!(surface.removed(), vec![1.0]);
        assert!(!reconciler.is_available(led(1)));
        assert!(!surface.node(2).unwrap().is_on);
    }

    #[test]
    fn should_clear_everything_when_leds_field_is_malformed() {
        let surface = FakeLedSurface::default();
        let (dispatch, _) = recording_dispatch();
        let mut reconciler = LedReconciler::new(surface.clone(), dispatch);

        reconciler.reconcile(&report(json!({"leds": [{"number": 1, "is_on": true}]})));
        reconciler.reconcile(&report(json!({"leds": 42})));

        assert!(surface.grid_order().is_empty());
        assert!(reconciler.available().is_empty());
        let placeholder = surface.placeholder().unwrap();
        assert!(placeholder.visible);
        assert_eq!(placeholder.text, "Waiting for LED data...");
    }

    #[test]
    fn should_wire_controls_to_dispatch_with_led_number() {
        let surface = FakeLedSurface::default();
        let (dispatch, calls) = recording_dispatch();
        let mut reconciler = LedReconciler::new(surface.clone(), dispatch);

        reconciler.reconcile(&report(json!({"leds": [{"number": 2, "is_on": false}]})));
        surface.click(2, LedAction::Toggle);

        assert_eq!(*calls.borrow(), vec![(led(2), LedAction::Toggle)]);
    }

    #[test]
    fn should_keep_availability_when_fetch_fails() {
        let surface = FakeLedSurface::default();
        let (dispatch, _) = recording_dispatch();
        let mut reconciler = LedReconciler::new(surface.clone(), dispatch);

        reconciler.reconcile(&report(json!({"leds": [{"number": 1, "is_on": false}]})));
        reconciler.show_unavailable();

        assert!(reconciler.is_available(led(1)));
        assert_eq!(surface.placeholder().unwrap(), Placeholder::leds_unavailable());
    }
}
