use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

/// Smooth in-page scrolling that accounts for the sticky navbar.
pub struct ScrollNavigator {
    navbar: HtmlElement,
}

impl ScrollNavigator {
    #[must_use]
    pub const fn new(navbar: HtmlElement) -> Self {
        Self { navbar }
    }

    /// Smooth-scroll so the first element matching `selector` lands just
    /// below the navbar. Selectors that match nothing are ignored.
    pub fn scroll_to_target(&self, selector: &str) {
        let Some(doc) = dom::document() else {
            return;
        };
        let Ok(Some(el)) = doc.query_selector(selector) else {
            return;
        };
        let Ok(section) = el.dyn_into::<HtmlElement>() else {
            return;
        };

        let top = scroll_target(
            f64::from(section.offset_top()),
            f64::from(self.navbar.offset_height()),
        );
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        if let Some(win) = dom::window() {
            win.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Vertical offset that lands `element_top` just below a navbar of the given
/// rendered height.
#[must_use]
pub(crate) fn scroll_target(element_top: f64, navbar_height: f64) -> f64 {
    element_top - navbar_height
}
