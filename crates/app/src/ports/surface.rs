//! Surface ports: where reconciled entries are rendered.
//!
//! A surface owns the rendering medium (DOM grid, terminal, test recorder).
//! The reconciler owns the entries it creates and hands them back for
//! every update and for removal.

use ledboard_domain::id::{ButtonNumber, LedNumber};

use crate::controls::LedControls;
use crate::presentation::{ButtonView, LedView, Placeholder};

/// Rendering medium for the button category.
pub trait ButtonSurface {
    /// A live rendered button plus whatever sub-element handles it caches.
    type Entry;

    /// Instantiate a new entry for `number`, or `None` when the surface
    /// cannot render (e.g. its template is missing).
    fn create_entry(&mut self, number: ButtonNumber) -> Option<Self::Entry>;

    /// Apply the latest view to an existing entry.
    fn render_entry(&mut self, entry: &mut Self::Entry, view: &ButtonView);

    /// Detach and destroy an entry whose button disappeared.
    fn remove_entry(&mut self, entry: Self::Entry);

    /// Update the placeholder shown instead of (or next to) the entries.
    fn show_placeholder(&mut self, placeholder: Placeholder);
}

/// Rendering medium for the LED category.
pub trait LedSurface {
    /// A live rendered LED plus whatever sub-element handles it caches.
    type Entry;

    /// Instantiate a new entry for `number`, wiring its controls to `controls`.
    ///
    /// `before` is the rendered entry with the next higher number; the new
    /// entry goes in front of it, or last when it is `None`.
    fn create_entry(
        &mut self,
        number: LedNumber,
        controls: LedControls,
        before: Option<&Self::Entry>,
    ) -> Option<Self::Entry>;

    /// Apply the latest view to an existing entry.
    fn render_entry(&mut self, entry: &mut Self::Entry, view: &LedView);

    /// Detach and destroy an entry whose LED disappeared.
    fn remove_entry(&mut self, entry: Self::Entry);

    /// Update the placeholder shown instead of (or next to) the entries.
    fn show_placeholder(&mut self, placeholder: Placeholder);
}
