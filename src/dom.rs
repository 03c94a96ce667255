use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::CONFIG_SCRIPT_ID;

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Element the widgets can be mounted into.
pub fn mount_point(id: &str) -> Option<HtmlElement> {
    element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// All elements with `class`, in document order.
pub fn elements_by_class(class: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return vec![];
    };
    let collection = doc.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

pub fn text_of(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

/// Overwrite each element's text with the string at the same index.
pub fn set_texts(elements: &[Element], texts: &[String]) {
    for (el, text) in elements.iter().zip(texts) {
        el.set_text_content(Some(text));
    }
}

/// Option names from the children of the ingredient list container:
/// the `value` attribute, or the text when there is none.
pub fn option_names(container: &Element) -> Vec<String> {
    let children = container.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .map(|child| {
            child
                .get_attribute("value")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| text_of(&child))
        })
        .collect()
}

/// Current `location.search`, including the leading `?`.
pub fn query_string() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn config_json() -> Option<String> {
    element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content())
}

/// Run `handler` whenever the `<form>` enclosing `el` is submitted.
/// Returns `false` when `el` isn't inside a form.
pub fn on_enclosing_form_submit(el: &Element, handler: impl Fn() + 'static) -> bool {
    let Some(form) = el.closest("form").ok().flatten() else {
        return false;
    };

    let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| handler());
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}
