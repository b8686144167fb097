//! Event binding.
//!
//! Wires every UI listener once at startup. Features whose elements were not
//! found are skipped. To add new events, add closures here and (if async)
//! spawn via `wasm_bindgen_futures::spawn_local`.

use std::rc::Rc;

use iv_page_core::{PageConfig, Strings};
use wasm_bindgen::prelude::*;

use crate::clipboard;
use crate::dom::Elements;
use crate::forms;
use crate::music::MusicToggle;
use crate::notify::Notifier;
use crate::pagination;
use crate::scroll;
use crate::wishes::WishesLoader;

/// Helper: attach sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        let _ = $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(
    els: &Elements,
    config: &Rc<PageConfig>,
    strings: &Rc<Strings>,
    notifier: &Notifier,
    wishes: Option<Rc<WishesLoader>>,
) {
    // ── Music ──
    if let Some(music) = &els.music {
        let toggle = MusicToggle::new(music.clone());
        on_click!(music.control, move |_: web_sys::MouseEvent| {
            toggle.on_activate();
        });
    }

    // ── Forms ──
    if let Some(form) = &els.rsvp_form {
        forms::bind_rsvp(form.clone(), config.clone(), notifier.clone());
    }
    if let Some(modal) = &els.wish_modal {
        forms::bind_wish_modal(modal.clone(), config.clone(), notifier.clone(), wishes.clone());
    }

    // ── Wishes pagination ──
    if let Some(loader) = wishes {
        let nav = loader.nav().clone();
        pagination::bind_clicks(&nav, loader);
    }

    // ── Copy buttons ──
    clipboard::bind(&els.copy_buttons, strings.clone());

    // ── In-page anchors ──
    scroll::bind_smooth_anchors(&els.anchors);
}
