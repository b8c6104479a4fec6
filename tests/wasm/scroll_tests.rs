use portfolio_web::dom;
use portfolio_web::scroll::ScrollNavigator;
use wasm_bindgen_test::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[wasm_bindgen_test]
fn unknown_target_is_ignored() {
    let doc = dom::document().expect("document");
    let navbar: HtmlElement = doc
        .create_element("nav")
        .expect("create navbar")
        .dyn_into()
        .expect("navbar element");
    let navigator = ScrollNavigator::new(navbar);

    let before = dom::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or_default();
    navigator.scroll_to_target("#no-such-section");
    let after = dom::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or_default();
    assert!((before - after).abs() < f64::EPSILON);
}
