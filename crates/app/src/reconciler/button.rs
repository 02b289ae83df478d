//! Button reconciler.

use std::collections::BTreeSet;

use ledboard_domain::button::ButtonReport;
use ledboard_domain::id::ButtonNumber;

use crate::ports::ButtonSurface;
use crate::presentation::{ButtonView, Placeholder};
use crate::rendered::RenderedEntries;

/// Keeps a [`ButtonSurface`] in sync with the latest button snapshot.
pub struct ButtonReconciler<S: ButtonSurface> {
    surface: S,
    entries: RenderedEntries<ButtonNumber, S::Entry>,
}

impl<S: ButtonSurface> ButtonReconciler<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            entries: RenderedEntries::new(),
        }
    }

    /// Render `report`, then drop entries for buttons it no longer lists.
    ///
    /// The placeholder follows the raw record count: a report made only of
    /// invalid records hides it without rendering anything.
    pub fn reconcile(&mut self, report: &ButtonReport) {
        self.surface
            .show_placeholder(Placeholder::waiting_for_buttons(report.is_empty()));

        let mut seen = BTreeSet::new();
        for button in &report.buttons {
            seen.insert(button.number);

            let surface = &mut self.surface;
            let Some(entry) = self
                .entries
                .get_or_create(button.number, || surface.create_entry(button.number))
            else {
                continue;
            };
            surface.render_entry(entry, &ButtonView::from(button));
        }

        let surface = &mut self.surface;
        self.entries.prune(&seen, |number, entry| {
            tracing::debug!(button = %number, "removing stale button");
            surface.remove_entry(entry);
        });
    }

    /// Signal that the last fetch failed. Rendered entries are kept.
    pub fn show_unavailable(&mut self) {
        self.surface
            .show_placeholder(Placeholder::buttons_unavailable());
    }

    /// Rendered button numbers in ascending order.
    pub fn rendered(&self) -> impl Iterator<Item = ButtonNumber> + '_ {
        self.entries.keys()
    }
}
