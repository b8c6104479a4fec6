use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom;

/// Trailing-edge debouncer owning a single cancellable timeout.
///
/// Every `trigger` cancels whatever timeout is pending and schedules a fresh
/// one, so a burst of triggers collapses into one callback run after
/// `wait_ms` of quiescence.
pub struct Debouncer {
    wait_ms: i32,
    pending: Rc<Cell<Option<i32>>>,
    fire: Closure<dyn FnMut()>,
}

impl Debouncer {
    #[must_use]
    pub fn new(wait_ms: i32, callback: impl Fn() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let fire = Closure::wrap(Box::new({
            let pending = Rc::clone(&pending);
            move || {
                pending.set(None);
                callback();
            }
        }) as Box<dyn FnMut()>);
        Self {
            wait_ms,
            pending,
            fire,
        }
    }

    /// Reschedule the callback to run `wait_ms` from now.
    pub fn trigger(&self) {
        let Some(win) = dom::window() else {
            return;
        };
        if let Some(handle) = self.pending.take() {
            win.clear_timeout_with_handle(handle);
        }
        match win.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.fire.as_ref().unchecked_ref(),
            self.wait_ms,
        ) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(err) => dom::console_error(&format!(
                "failed to schedule debounced callback: {}",
                dom::js_error_message(&err)
            )),
        }
    }
}
