// Theme preference handling

use crate::dom;

const STORAGE_KEY: &str = "theme";

/// Color scheme applied to the page root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Attribute value written to `data-theme` and to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` reads as light.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "dark" { Self::Dark } else { Self::Light }
    }

    /// The opposite scheme.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read the saved preference from localStorage.
///
/// An absent or unreadable value is a normal state and reads as light.
#[must_use]
pub fn stored_theme() -> Theme {
    dom::local_storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .map_or(Theme::Light, |value| Theme::from_name(&value))
}

/// Apply `theme` to the document root and persist it.
///
/// CSS rules keyed off the root `data-theme` attribute pick up the change
/// immediately.
pub fn set_theme(theme: Theme) {
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(storage) = dom::local_storage()
        && storage.set_item(STORAGE_KEY, theme.as_str()).is_err()
    {
        log::warn!("failed to persist theme preference");
    }
}

/// Re-apply the saved preference at page load.
pub fn init_theme() {
    set_theme(stored_theme());
}

/// Flip the saved preference and apply it.
pub fn toggle_theme() {
    set_theme(stored_theme().flipped());
}
