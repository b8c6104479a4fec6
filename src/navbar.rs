use web_sys::Element;

/// Scroll offset past which the navbar switches to its condensed style.
const SCROLL_THRESHOLD: f64 = 50.0;

/// Applies the `scrolled` marker once the page moves past the threshold.
pub struct NavbarStyle {
    navbar: Element,
}

impl NavbarStyle {
    #[must_use]
    pub const fn new(navbar: Element) -> Self {
        Self { navbar }
    }

    /// Mark or unmark the navbar for the given scroll offset.
    ///
    /// Purely a function of `scroll_y`; re-applying the same offset leaves
    /// the element unchanged.
    pub fn apply(&self, scroll_y: f64) {
        let _ = if scrolled_past_threshold(scroll_y) {
            self.navbar.class_list().add_1("scrolled")
        } else {
            self.navbar.class_list().remove_1("scrolled")
        };
    }
}

/// Strictly greater than the threshold; an offset of exactly 50 stays
/// unscrolled.
#[must_use]
pub(crate) fn scrolled_past_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}
