use web_sys::{Element, HtmlElement};

/// The active-section band starts this many pixels before a section clears
/// the navbar.
const SECTION_LEAD: f64 = 100.0;

/// Vertical band a section occupies for active-link purposes.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Marks the nav link whose target section is currently scrolled into view.
///
/// Element references are captured once at wiring time; bands are recomputed
/// from live layout on every update so viewport changes are picked up.
pub struct ActiveLinkTracker {
    navbar: HtmlElement,
    sections: Vec<HtmlElement>,
    links: Vec<Element>,
}

impl ActiveLinkTracker {
    #[must_use]
    pub const fn new(
        navbar: HtmlElement,
        sections: Vec<HtmlElement>,
        links: Vec<Element>,
    ) -> Self {
        Self {
            navbar,
            sections,
            links,
        }
    }

    /// Recompute the active section for `scroll_y` and restyle the links.
    ///
    /// When no section matches, every link is deactivated.
    pub fn update(&self, scroll_y: f64) {
        let navbar_height = f64::from(self.navbar.offset_height());
        let bounds: Vec<SectionBounds> = self
            .sections
            .iter()
            .filter(|section| !section.id().is_empty())
            .map(|section| SectionBounds {
                id: section.id(),
                top: f64::from(section.offset_top()) - navbar_height - SECTION_LEAD,
                height: f64::from(section.offset_height()),
            })
            .collect();

        let target = current_section_id(&bounds, scroll_y).map(|id| format!("#{id}"));
        for link in &self.links {
            let _ = link.class_list().remove_1("active");
            if target.is_some() && link.get_attribute("href") == target {
                let _ = link.class_list().add_1("active");
            }
        }
    }
}

/// The last section in document order whose `[top, top + height)` band
/// contains `scroll_y`. Overlapping bands therefore resolve to the later
/// section.
#[must_use]
pub fn current_section_id(bounds: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let mut current = None;
    for section in bounds {
        if scroll_y >= section.top && scroll_y < section.top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}
