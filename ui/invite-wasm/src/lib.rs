//! Invitation page WASM frontend.
//!
//! Binds to the page's existing markup: countdown, music toggle, wishes list
//! with pagination, RSVP and wish forms, copy buttons, notifications and
//! scroll fades. Each concern lives in its own module; decisions that do not
//! need the DOM live in `iv-page-core`.

pub mod api;
pub mod clipboard;
pub mod config;
pub mod countdown;
pub mod dom;
pub mod events;
pub mod forms;
pub mod loading;
pub mod music;
pub mod notify;
pub mod pagination;
pub mod scroll;
pub mod wishes;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init();
    Ok(())
}

/// Main initialisation sequence.
fn init() {
    let config = Rc::new(config::load());
    let strings = Rc::new(config.strings.clone());
    let els = dom::Elements::bind();

    let notifier = notify::Notifier::new(
        els.notification_container.clone(),
        strings.clone(),
        config.notification_duration_ms,
    );

    if let Some(screen) = els.loading_screen.clone() {
        loading::dismiss_after_load(screen, config.loading_screen_delay_ms);
    }

    if let Some(countdown) = els.countdown.clone() {
        countdown::start(countdown, &config.countdown_target);
    }

    let wishes = els
        .wishes
        .clone()
        .map(|w| wishes::WishesLoader::new(w, config.clone()));

    // Bind all event listeners
    events::bind_events(&els, &config, &strings, &notifier, wishes.clone());

    scroll::observe_fades(&els.fade_sections);

    if let Some(loader) = wishes {
        loader.load(1);
    }
}
