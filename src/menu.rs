use web_sys::{Element, Node};

/// Mobile navigation panel plus its toggle control.
///
/// The `active` marker on the two elements is always written as a single
/// open/closed state, so they cannot drift apart.
#[derive(Clone)]
pub struct MenuController {
    panel: Element,
    toggle: Element,
}

impl MenuController {
    #[must_use]
    pub const fn new(panel: Element, toggle: Element) -> Self {
        Self { panel, toggle }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.class_list().contains("active")
    }

    /// Flip the panel between open and closed.
    pub fn toggle_open(&self) {
        self.set_open(!self.is_open());
    }

    /// Close the panel. Already-closed panels are left untouched.
    pub fn close(&self) {
        if self.is_open() {
            self.set_open(false);
        }
    }

    /// Whether `node` lives inside the panel or the toggle control.
    #[must_use]
    pub fn contains(&self, node: &Node) -> bool {
        self.panel.contains(Some(node)) || self.toggle.contains(Some(node))
    }

    fn set_open(&self, open: bool) {
        for el in [&self.panel, &self.toggle] {
            let _ = if open {
                el.class_list().add_1("active")
            } else {
                el.class_list().remove_1("active")
            };
        }
    }
}
