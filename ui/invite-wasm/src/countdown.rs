//! Countdown display, refreshed once per second for the page's lifetime.

use gloo_console as console;
use gloo_timers::callback::Interval;
use iv_page_core::countdown::{Remaining, TICK_MS};
use wasm_bindgen::JsValue;

use crate::dom::{self, CountdownEls};

/// Parse a date-time string with the browser's `Date` parser.
pub fn parse_target(raw: &str) -> f64 {
    js_sys::Date::new(&JsValue::from_str(raw)).get_time()
}

pub fn tick(els: &CountdownEls, target_ms: f64) {
    let [days, hours, minutes, seconds] = Remaining::until(target_ms, js_sys::Date::now()).fields();
    dom::set_text(&els.days, &days);
    dom::set_text(&els.hours, &hours);
    dom::set_text(&els.minutes, &minutes);
    dom::set_text(&els.seconds, &seconds);
}

/// Render immediately, then every second. Never cancelled.
pub fn start(els: CountdownEls, target: &str) {
    let target_ms = parse_target(target);
    if target_ms.is_nan() {
        console::warn!(format!("countdown target {target:?} is not a valid date"));
    }
    tick(&els, target_ms);
    Interval::new(TICK_MS, move || tick(&els, target_ms)).forget();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn els() -> CountdownEls {
        let mk = || dom::create_element("span", None).unwrap();
        CountdownEls {
            days: mk(),
            hours: mk(),
            minutes: mk(),
            seconds: mk(),
        }
    }

    #[wasm_bindgen_test]
    fn past_target_shows_zeros() {
        let e = els();
        tick(&e, parse_target("2000-01-01T00:00:00"));
        for el in [&e.days, &e.hours, &e.minutes, &e.seconds] {
            assert_eq!(el.text_content().unwrap(), "00");
        }
    }

    #[wasm_bindgen_test]
    fn future_target_is_padded() {
        let e = els();
        tick(&e, js_sys::Date::now() + 90_500.0);
        assert_eq!(e.days.text_content().unwrap(), "00");
        assert_eq!(e.minutes.text_content().unwrap(), "01");
        assert_eq!(e.seconds.text_content().unwrap().len(), 2);
    }
}
