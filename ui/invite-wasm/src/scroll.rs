//! Scroll-driven behavior: section fades and smooth in-page anchors.

use gloo_console as console;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

use crate::dom;

const FADE_THRESHOLD: f64 = 0.2;
/// Shrinks the viewport's bottom edge so sections fade out 100px early.
const FADE_ROOT_MARGIN: &str = "0px 0px -100px 0px";
const VISIBLE_CLASS: &str = "active";

/// Toggle `active` on every section as it enters and leaves the viewport.
/// Repeats on every crossing.
pub fn observe_fades(sections: &[Element]) {
    if sections.is_empty() {
        return;
    }

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                dom::toggle_class(&entry.target(), VISIBLE_CLASS, entry.is_intersecting());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FADE_THRESHOLD));
    options.set_root_margin(FADE_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) {
        Ok(o) => o,
        Err(e) => {
            console::error!(format!("fade observer unavailable: {}", dom::describe(&e)));
            return;
        }
    };
    for section in sections {
        observer.observe(section);
    }
    cb.forget();
}

/// Smooth-scroll in-page anchors to their targets.
pub fn bind_smooth_anchors(anchors: &[Element]) {
    for anchor in anchors {
        let a = anchor.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            if let Some(target) = anchor_target(&href) {
                scroll_to(&target);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = anchor.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

/// Element referenced by an `#id` href. A bare `#` or an invalid selector
/// yields nothing.
fn anchor_target(href: &str) -> Option<HtmlElement> {
    if href.len() < 2 {
        return None;
    }
    dom::query(href)?.dyn_into::<HtmlElement>().ok()
}

fn scroll_to(target: &HtmlElement) {
    let opts = ScrollToOptions::new();
    opts.set_top(f64::from(target.offset_top()));
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&opts);
}
