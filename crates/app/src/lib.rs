//! # ledboard-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DeviceApi`: fetch button/LED snapshots, send LED commands
//!   - `ButtonSurface` / `LedSurface`: create, update and remove rendered entries
//!   - `Feedback`: connectivity indicator and user-facing alerts
//!   - `Runtime`: spawn local tasks and sleep
//! - Reconcile each snapshot onto the rendered entries (`reconciler`)
//! - Own the dashboard session (`Dashboard`) and its polling timer (`Poller`)
//!
//! ## Dependency rule
//! Depends on `ledboard-domain` only. Never imports adapter crates.
//! Everything here runs on a single thread; futures are not `Send`.

pub mod availability;
pub mod config;
pub mod controls;
pub mod dashboard;
pub mod poller;
pub mod ports;
pub mod presentation;
pub mod reconciler;
pub mod rendered;

#[cfg(test)]
pub(crate) mod testing;
