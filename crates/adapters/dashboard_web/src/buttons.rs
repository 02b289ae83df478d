//! Button cards cloned from `#button-template` into `#button-grid`.

use ledboard_app::ports::ButtonSurface;
use ledboard_app::presentation::{ButtonView, Placeholder};
use ledboard_domain::id::ButtonNumber;
use web_sys::{Document, Element};

use crate::dom;

pub const GRID_ID: &str = "button-grid";
pub const TEMPLATE_ID: &str = "button-template";
pub const PLACEHOLDER_ID: &str = "button-placeholder";

/// Renders buttons into the page.
///
/// Without a `#button-grid` no card is created; the placeholder still works.
pub struct DomButtonSurface {
    document: Document,
    grid: Option<Element>,
}

/// A cloned button card and the parts that change on every poll.
pub struct ButtonCard {
    root: Element,
    name: Option<Element>,
    state: Option<Element>,
    count: Option<Element>,
}

impl DomButtonSurface {
    pub fn attach(document: &Document) -> Self {
        let grid = document.get_element_by_id(GRID_ID);
        if grid.is_none() {
            tracing::warn!(id = GRID_ID, "no button grid, buttons will not be rendered");
        }
        Self {
            document: document.clone(),
            grid,
        }
    }
}

impl ButtonSurface for DomButtonSurface {
    type Entry = ButtonCard;

    fn create_entry(&mut self, number: ButtonNumber) -> Option<ButtonCard> {
        let grid = self.grid.as_ref()?;
        let root = dom::clone_template(&self.document, TEMPLATE_ID)?;
        root.set_id(&format!("button{number}"));

        dom::set_text(dom::child(&root, ".button-icon").as_ref(), &number.to_string());
        let name = dom::child(&root, ".button-name");
        let state = dom::child(&root, ".button-state");
        let count = dom::child(&root, ".button-count span");
        if let Some(state) = &state {
            state.set_id(&format!("btn{number}-state"));
        }
        if let Some(count) = &count {
            count.set_id(&format!("btn{number}-count"));
        }

        if let Err(err) = grid.append_child(&root) {
            tracing::warn!(button = %number, error = ?err, "failed to insert button card");
            return None;
        }
        Some(ButtonCard {
            root,
            name,
            state,
            count,
        })
    }

    fn render_entry(&mut self, card: &mut ButtonCard, view: &ButtonView) {
        dom::set_text(card.name.as_ref(), &view.label);
        if let Some(state) = &card.state {
            state.set_text_content(Some(view.state_text()));
            dom::set_style(state, "color", view.state_color());
        }
        dom::set_text(card.count.as_ref(), &view.count.to_string());
        dom::toggle_class(&card.root, "active", view.is_active());
    }

    fn remove_entry(&mut self, card: ButtonCard) {
        card.root.remove();
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        dom::show_placeholder(&self.document, PLACEHOLDER_ID, placeholder);
    }
}
