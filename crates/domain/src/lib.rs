//! # ledboard-domain
//!
//! Pure domain model for the ledboard device dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed button/LED numbers, error conventions
//! - Define **button** and **LED** snapshots as reported by the device API
//! - Define **LED commands** (`on`, `off`, `toggle`) and their wire body
//! - Decode loosely-typed JSON payloads, dropping records that cannot be
//!   identified instead of failing the whole response
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod coerce;
pub mod error;
pub mod id;
pub mod status;

pub mod button;
pub mod led;
