//! Loading screen dismissal.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom;

/// Hide the loading screen `delay_ms` after the window `load` event. If the
/// page has already loaded, the delay starts now.
pub fn dismiss_after_load(screen: Element, delay_ms: u32) {
    let schedule = move || {
        Timeout::new(delay_ms, move || dom::add_class(&screen, "hidden")).forget();
    };

    if dom::document().ready_state() == "complete" {
        schedule();
        return;
    }

    let cb = Closure::once(schedule);
    let _ = dom::window().add_event_listener_with_callback("load", cb.as_ref().unchecked_ref());
    cb.forget();
}
