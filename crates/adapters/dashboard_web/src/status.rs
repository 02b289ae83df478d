//! Connection indicator and alerts.

use ledboard_app::ports::Feedback;
use ledboard_app::presentation::{connection_class, connection_label};
use ledboard_domain::status::ConnectionStatus;
use web_sys::{Document, Window};

pub const CONNECTION_STATUS_ID: &str = "connection-status";

/// The `#connection-status` element. Silently absent on pages without one.
pub struct DomStatusIndicator {
    document: Document,
}

impl DomStatusIndicator {
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
        }
    }

    pub fn show(&self, status: ConnectionStatus) {
        if let Some(element) = self.document.get_element_by_id(CONNECTION_STATUS_ID) {
            element.set_text_content(Some(&connection_label(status)));
            element.set_class_name(connection_class(status));
        }
    }
}

/// Blocking `window.alert`.
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
        }
    }

    pub fn notify(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::warn!(error = ?err, message, "failed to show alert");
        }
    }
}

pub struct DomFeedback {
    pub status: DomStatusIndicator,
    pub alerts: AlertNotifier,
}

impl Feedback for DomFeedback {
    fn show_connection(&mut self, status: ConnectionStatus) {
        self.status.show(status);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.notify(message);
    }
}
