//! Small DOM helpers for keyboard navigation and outside clicks.

use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, HtmlElement, Node};

/// Moves keyboard focus to the element with the given DOM id, if it exists.
pub fn focus_element(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    if let Some(el) = element {
        let _ = el.focus();
    }
}

/// Whether the event target is `container` or one of its descendants.
pub fn event_within(ev: &Event, container: &Element) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

/// DOM id of a registered child element (tab header, toolbar button).
pub fn child_dom_id(scope: &str, id: &str) -> String {
    format!("{}-{}", scope, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_dom_id() {
        assert_eq!(child_dom_id("tab", "rent"), "tab-rent");
    }
}
