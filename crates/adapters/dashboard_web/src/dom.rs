//! Small helpers over `web-sys` shared by the surfaces.

use ledboard_app::presentation::Placeholder;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlTemplateElement};

/// Errors raised while attaching the dashboard to the page.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no browser window")]
    NoWindow,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Deep-clone the first element of the `<template id=template_id>`.
///
/// `None` when the template is missing or empty.
pub(crate) fn clone_template(document: &Document, template_id: &str) -> Option<Element> {
    let template = document
        .get_element_by_id(template_id)?
        .dyn_into::<HtmlTemplateElement>()
        .ok()?;
    let root = template.content().first_element_child()?;
    root.clone_node_with_deep(true).ok()?.dyn_into::<Element>().ok()
}

pub(crate) fn child(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub(crate) fn children(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn set_text(element: Option<&Element>, text: &str) {
    if let Some(element) = element {
        element.set_text_content(Some(text));
    }
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = element.style().set_property(property, value) {
        tracing::warn!(error = ?err, property, "failed to set style");
    }
}

pub(crate) fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        tracing::warn!(error = ?err, class, "failed to toggle class");
    }
}

/// Apply a placeholder to the element `id`, if the page has one.
pub(crate) fn show_placeholder(document: &Document, id: &str, placeholder: Placeholder) {
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    element.set_text_content(Some(placeholder.text));
    let display = if placeholder.visible { "block" } else { "none" };
    set_style(&element, "display", display);
}
