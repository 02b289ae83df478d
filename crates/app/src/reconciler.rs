//! Reconcilers: map a device snapshot onto the set of rendered entries.
//!
//! After `reconcile`, the rendered identifiers equal the identifiers of the
//! snapshot: new ones are created, existing ones updated in place, missing
//! ones removed.

pub mod button;
pub mod led;

pub use button::ButtonReconciler;
pub use led::LedReconciler;
