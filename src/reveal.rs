use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

/// Fraction of a section that must be visible before it is revealed.
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Shrinks the observation box 100px at the bottom so sections reveal
/// slightly before reaching the true viewport edge.
const ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Observe every `section` on the page and reveal each one the first time it
/// crosses into view.
///
/// The `visible` marker is one-way: sections that later leave the viewport
/// keep it.
pub fn init_scroll_animations() {
    let Some(doc) = dom::document() else {
        return;
    };

    let callback = Closure::wrap(Box::new(
        |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                    && entry.is_intersecting()
                {
                    mark_visible(&entry.target());
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(VISIBILITY_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                dom::console_error(&format!(
                    "failed to create visibility observer: {}",
                    dom::js_error_message(&err)
                ));
                return;
            }
        };

    if let Ok(sections) = doc.query_selector_all("section") {
        for index in 0..sections.length() {
            if let Some(section) = sections
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                observer.observe(&section);
            }
        }
    }

    // The observer and its callback live for the rest of the page.
    callback.forget();
}

/// Permanently add the `visible` marker to a revealed section.
pub fn mark_visible(target: &Element) {
    let _ = target.class_list().add_1("visible");
}
