#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod debounce;
pub mod dom;
pub mod form;
pub mod links;
pub mod menu;
pub mod navbar;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    bootstrap::run();
}
