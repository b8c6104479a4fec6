use std::cell::Cell;
use std::rc::Rc;

use portfolio_web::debounce::Debouncer;
use portfolio_web::dom;
use wasm_bindgen_test::*;

fn counting_debouncer(wait_ms: i32) -> (Debouncer, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    let debouncer = {
        let count = Rc::clone(&count);
        Debouncer::new(wait_ms, move || count.set(count.get() + 1))
    };
    (debouncer, count)
}

#[wasm_bindgen_test]
async fn rapid_triggers_collapse_into_one_run() {
    let (debouncer, count) = counting_debouncer(100);
    for _ in 0..20 {
        debouncer.trigger();
    }
    dom::sleep_ms(250).await.expect("sleep");
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
async fn a_new_trigger_postpones_the_pending_run() {
    let (debouncer, count) = counting_debouncer(100);
    debouncer.trigger();
    dom::sleep_ms(50).await.expect("sleep");
    debouncer.trigger();
    dom::sleep_ms(50).await.expect("sleep");
    // 100ms after the first trigger, but only 50ms after the second.
    assert_eq!(count.get(), 0);
    dom::sleep_ms(150).await.expect("sleep");
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
async fn separate_quiet_periods_each_run_once() {
    let (debouncer, count) = counting_debouncer(100);
    debouncer.trigger();
    dom::sleep_ms(200).await.expect("sleep");
    debouncer.trigger();
    dom::sleep_ms(200).await.expect("sleep");
    assert_eq!(count.get(), 2);
}
