//! # ledboard-adapter-dashboard-web
//!
//! Browser front end for the board's button/LED API, compiled to wasm and
//! served by the board next to the page markup.
//!
//! On load it reads its settings from the `<body>` data attributes, attaches
//! the DOM surfaces, polls immediately and then on every refresh interval.
//! Polling stops on `beforeunload`.

pub mod api;
pub mod buttons;
mod config;
pub mod dom;
pub mod leds;
pub mod logging;
pub mod runtime;
pub mod status;

use std::cell::RefCell;
use std::rc::Rc;

use ledboard_app::dashboard::{Dashboard, Surfaces};
use ledboard_app::poller::Poller;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Window};

use crate::api::GlooDeviceApi;
use crate::buttons::DomButtonSurface;
use crate::dom::DomError;
use crate::leds::DomLedSurface;
use crate::runtime::BrowserRuntime;
use crate::status::{AlertNotifier, DomFeedback, DomStatusIndicator};

pub const WIFI_SSID_ID: &str = "wifi-ssid";

/// Everything that must outlive [`start`].
struct Session {
    poller: Poller<BrowserRuntime>,
    _on_unload: Closure<dyn FnMut(web_sys::Event)>,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();

    let Some(window) = web_sys::window() else {
        tracing::error!(error = %DomError::NoWindow, "dashboard not started");
        return;
    };
    let Some(document) = window.document() else {
        tracing::error!("dashboard not started: no document");
        return;
    };

    if document.ready_state() == DocumentReadyState::Loading {
        let target = document.clone();
        let on_ready = Closure::once_into_js(move || mount_or_log(&window, &document));
        if let Err(err) =
            target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            tracing::error!(error = ?err, "failed to wait for DOMContentLoaded");
        }
    } else {
        mount_or_log(&window, &document);
    }
}

/// Stop polling. Called on `beforeunload`; also exported to the page.
#[wasm_bindgen]
pub fn stop() {
    SESSION.with(|session| {
        if let Some(session) = session.borrow().as_ref() {
            session.poller.stop();
        }
    });
}

fn mount_or_log(window: &Window, document: &Document) {
    match mount(window, document) {
        Ok(session) => {
            SESSION.with(|slot| *slot.borrow_mut() = Some(session));
            tracing::info!("dashboard initialized");
        }
        Err(err) => tracing::error!(error = %err, "failed to start dashboard"),
    }
}

fn mount(window: &Window, document: &Document) -> Result<Session, DomError> {
    let config = config::from_body(document);
    let surfaces = Surfaces {
        buttons: DomButtonSurface::attach(document),
        leds: DomLedSurface::attach(document),
        feedback: DomFeedback {
            status: DomStatusIndicator::new(document),
            alerts: AlertNotifier::new(window),
        },
    };
    let dashboard = Dashboard::new(
        &config,
        GlooDeviceApi::new(config.api_base.clone()),
        BrowserRuntime,
        surfaces,
    );

    let poller = {
        let dashboard = Rc::clone(&dashboard);
        Poller::new(BrowserRuntime, config.refresh_interval(), move || {
            dashboard.tick();
        })
    };
    poller.start();
    dashboard.tick();

    if let Some(ssid) = document.get_element_by_id(WIFI_SSID_ID) {
        ssid.set_text_content(Some(&config.wifi_ssid));
    }

    let on_unload = Closure::<dyn FnMut(web_sys::Event)>::new(|_: web_sys::Event| stop());
    window.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref())?;

    Ok(Session {
        poller,
        _on_unload: on_unload,
    })
}
