//! Feedback port: page-level signals that are not tied to a single entry.

use ledboard_domain::status::ConnectionStatus;

/// Connectivity indicator and user-facing alerts.
pub trait Feedback {
    /// Reflect the outcome of the latest button poll.
    fn show_connection(&mut self, status: ConnectionStatus);

    /// Tell the user that an action failed.
    fn alert(&mut self, message: &str);
}
