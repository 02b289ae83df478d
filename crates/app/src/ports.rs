//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! None of the returned futures are required to be `Send`: the browser
//! adapter runs on a single-threaded event loop.

pub mod device_api;
pub mod feedback;
pub mod runtime;
pub mod surface;

pub use device_api::DeviceApi;
pub use feedback::Feedback;
pub use runtime::Runtime;
pub use surface::{ButtonSurface, LedSurface};
