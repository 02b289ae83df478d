//! LED cards cloned from `#led-template` into `#led-grid`.
//!
//! Cards are kept in ascending LED order: a new card goes in front of the
//! card of the next higher LED.
//!
//! Every `button[data-action]` inside a card gets a click listener that
//! triggers the card's [`LedControls`]. The listeners live in the card and
//! are released when it is removed.

use ledboard_app::controls::LedControls;
use ledboard_app::ports::LedSurface;
use ledboard_app::presentation::{LedView, Placeholder};
use ledboard_domain::id::LedNumber;
use ledboard_domain::led::LedAction;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Node};

use crate::dom;

pub const GRID_ID: &str = "led-grid";
pub const TEMPLATE_ID: &str = "led-template";
pub const PLACEHOLDER_ID: &str = "led-placeholder";

type ClickListener = Closure<dyn FnMut(web_sys::Event)>;

/// Renders LEDs and their controls into the page.
///
/// Without a `#led-grid` no card is created; the placeholder still works.
pub struct DomLedSurface {
    document: Document,
    grid: Option<Element>,
}

/// A cloned LED card.
pub struct LedCard {
    root: Element,
    indicator: Option<Element>,
    name: Option<Element>,
    _listeners: Vec<ClickListener>,
}

impl DomLedSurface {
    pub fn attach(document: &Document) -> Self {
        let grid = document.get_element_by_id(GRID_ID);
        if grid.is_none() {
            tracing::warn!(id = GRID_ID, "no LED grid, LEDs will not be rendered");
        }
        Self {
            document: document.clone(),
            grid,
        }
    }
}

fn wire_controls(root: &Element, controls: &LedControls) -> Vec<ClickListener> {
    let number = controls.number();
    let mut listeners = Vec::new();
    for button in dom::children(root, "button[data-action]") {
        let Some(raw) = button.get_attribute("data-action").filter(|a| !a.is_empty()) else {
            continue;
        };
        let action = match raw.parse::<LedAction>() {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!(led = %number, action = %raw, error = %err, "ignoring LED control");
                continue;
            }
        };

        let controls = controls.clone();
        let on_click = ClickListener::new(move |_: web_sys::Event| controls.trigger(action));
        match button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            Ok(()) => listeners.push(on_click),
            Err(err) => tracing::warn!(led = %number, error = ?err, "failed to add click listener"),
        }
    }
    listeners
}

impl LedSurface for DomLedSurface {
    type Entry = LedCard;

    fn create_entry(
        &mut self,
        number: LedNumber,
        controls: LedControls,
        before: Option<&LedCard>,
    ) -> Option<LedCard> {
        let grid = self.grid.as_ref()?;
        let root = dom::clone_template(&self.document, TEMPLATE_ID)?;
        root.set_id(&format!("led{number}"));

        let indicator = dom::child(&root, ".led-indicator");
        if let Some(indicator) = &indicator {
            indicator.set_id(&format!("led{number}-indicator"));
        }
        let name = dom::child(&root, ".led-name");
        let listeners = wire_controls(&root, &controls);

        let anchor: Option<&Node> = before.map(|card| card.root.as_ref());
        if let Err(err) = grid.insert_before(&root, anchor) {
            tracing::warn!(led = %number, error = ?err, "failed to insert LED card");
            return None;
        }
        Some(LedCard {
            root,
            indicator,
            name,
            _listeners: listeners,
        })
    }

    fn render_entry(&mut self, card: &mut LedCard, view: &LedView) {
        dom::set_text(card.name.as_ref(), &view.label);
        if let Some(indicator) = &card.indicator {
            dom::toggle_class(indicator, "on", view.is_on);
        }
    }

    fn remove_entry(&mut self, card: LedCard) {
        card.root.remove();
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        dom::show_placeholder(&self.document, PLACEHOLDER_ID, placeholder);
    }
}
