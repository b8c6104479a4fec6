use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, Node};

use crate::debounce::Debouncer;
use crate::dom;
use crate::form;
use crate::links::ActiveLinkTracker;
use crate::menu::MenuController;
use crate::navbar::NavbarStyle;
use crate::reveal;
use crate::scroll::ScrollNavigator;
use crate::theme;

/// Quiet period for the shared scroll dispatcher.
const SCROLL_DEBOUNCE_MS: i32 = 100;

/// Wire the page once the document is ready.
///
/// A wasm module may be instantiated after `DOMContentLoaded` has already
/// fired; when the document is past the `loading` state, wiring runs
/// immediately.
pub fn run() {
    let Some(doc) = dom::document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        let ready = Closure::once(attach);
        match doc.add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())
        {
            Ok(()) => ready.forget(),
            Err(err) => dom::console_error(&format!(
                "failed to defer page wiring: {}",
                dom::js_error_message(&err)
            )),
        }
    } else {
        attach();
    }
}

/// Look up the page's elements once and attach every behavior whose DOM
/// surface is present. Missing elements silently disable their feature.
pub(crate) fn attach() {
    let Some(doc) = dom::document() else {
        return;
    };

    theme::init_theme();
    reveal::init_scroll_animations();

    if let Some(toggle) = doc.get_element_by_id("theme-toggle") {
        listen(&toggle, "click", move |_event| theme::toggle_theme());
    }

    let menu = wire_mobile_menu(&doc);

    let navbar = doc
        .get_element_by_id("navbar")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    let nav_links = collect_nav_links(&doc);
    wire_nav_links(&nav_links, navbar.as_ref(), menu.as_ref());

    if let Some(form_el) = doc
        .get_element_by_id("contact-form")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    {
        listen(&form_el, "submit", |event| form::handle_submit(&event));
    }

    if let Some(menu) = menu {
        wire_outside_click(&doc, menu);
    }

    if let Some(navbar) = navbar {
        wire_scroll_dispatcher(navbar, page_sections(&doc), nav_links);
    }
}

fn wire_mobile_menu(doc: &Document) -> Option<MenuController> {
    let panel = doc.get_element_by_id("nav-menu")?;
    let toggle = doc.get_element_by_id("mobile-menu-toggle")?;
    let menu = MenuController::new(panel, toggle.clone());
    {
        let menu = menu.clone();
        listen(&toggle, "click", move |_event| menu.toggle_open());
    }
    Some(menu)
}

/// Fragment links scroll in-page and close the mobile menu; every other
/// href is left to default browser navigation.
fn wire_nav_links(links: &[Element], navbar: Option<&HtmlElement>, menu: Option<&MenuController>) {
    let navigator = navbar.map(|nb| Rc::new(ScrollNavigator::new(nb.clone())));
    for link in links {
        let link_el = link.clone();
        let navigator = navigator.clone();
        let menu = menu.cloned();
        listen(link, "click", move |event| {
            let Some(href) = link_el.get_attribute("href") else {
                return;
            };
            if !href.starts_with('#') {
                return;
            }
            event.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.scroll_to_target(&href);
            }
            if let Some(menu) = &menu {
                menu.close();
            }
        });
    }
}

/// A click landing outside both the panel and its toggle closes an open menu.
fn wire_outside_click(doc: &Document, menu: MenuController) {
    listen(doc, "click", move |event| {
        if !menu.is_open() {
            return;
        }
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| menu.contains(&node));
        if !inside {
            menu.close();
        }
    });
}

/// The one debounced scroll handler; it fans out to the navbar style
/// controller and the active link tracker.
fn wire_scroll_dispatcher(navbar: HtmlElement, sections: Vec<HtmlElement>, links: Vec<Element>) {
    let style = NavbarStyle::new(navbar.clone().into());
    let tracker = ActiveLinkTracker::new(navbar, sections, links);
    let dispatcher = Debouncer::new(SCROLL_DEBOUNCE_MS, move || {
        let Some(win) = dom::window() else {
            return;
        };
        let scroll_y = win.scroll_y().unwrap_or_default();
        style.apply(scroll_y);
        tracker.update(scroll_y);
    });
    if let Some(win) = dom::window() {
        listen(&win, "scroll", move |_event| dispatcher.trigger());
    }
}

fn collect_nav_links(doc: &Document) -> Vec<Element> {
    let mut links = Vec::new();
    if let Ok(list) = doc.query_selector_all(".nav-link") {
        for index in 0..list.length() {
            if let Some(link) = list
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                links.push(link);
            }
        }
    }
    links
}

fn page_sections(doc: &Document) -> Vec<HtmlElement> {
    let mut sections = Vec::new();
    if let Ok(list) = doc.query_selector_all("section[id]") {
        for index in 0..list.length() {
            if let Some(section) = list
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                sections.push(section);
            }
        }
    }
    sections
}

/// Attach an event listener whose closure lives for the rest of the page.
fn listen(target: &EventTarget, event_name: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    match target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref()) {
        Ok(()) => closure.forget(),
        Err(err) => dom::console_error(&format!(
            "failed to attach {event_name} listener: {}",
            dom::js_error_message(&err)
        )),
    }
}
