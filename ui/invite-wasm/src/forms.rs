//! RSVP and wish form submission, plus the wish modal.
//!
//! Both forms POST their fields and hand the result to
//! `iv_page_core::submission::react`, which decides what the page does next.

use std::cell::Cell;
use std::rc::Rc;

use gloo_console as console;
use iv_page_core::submission::{FormKind, Outcome, Reaction, react};
use iv_page_core::{PageConfig, Strings};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlFormElement};

use crate::api;
use crate::dom::{self, WishModalEls};
use crate::notify::Notifier;
use crate::wishes::WishesLoader;

const MODAL_OPEN_CLASS: &str = "active";

async fn submit(kind: FormKind, form: &HtmlFormElement, url: &str, config: &PageConfig) -> Reaction {
    let outcome = match api::submit_form(url, form).await {
        Ok(resp) => Outcome::from(resp),
        Err(e) => {
            console::error!(format!("Error: {e}"));
            Outcome::Unreachable
        }
    };
    react(kind, outcome, &config.strings)
}

fn on_submit<F>(form: &HtmlFormElement, mut handler: F)
where
    F: FnMut() + 'static,
{
    let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Single-request guard shared between a submit handler and its request.
#[derive(Clone, Default)]
pub struct InFlight(Rc<Cell<bool>>);

impl InFlight {
    /// `false` if a request is already running.
    pub fn try_begin(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn finish(&self) {
        self.0.set(false);
    }
}

/// Notify, then reset the form if the reaction asks for it.
pub fn apply_rsvp(form: &HtmlFormElement, reaction: &Reaction, notifier: &Notifier) {
    notifier.notify(&reaction.message, reaction.kind);
    if reaction.reset_form {
        form.reset();
    }
}

/// RSVP form. A second submit while one is in flight is ignored.
pub fn bind_rsvp(form: HtmlFormElement, config: Rc<PageConfig>, notifier: Notifier) {
    let in_flight = InFlight::default();
    let form2 = form.clone();
    on_submit(&form, move || {
        if !in_flight.try_begin() {
            console::debug!("rsvp: submit ignored, request in flight");
            return;
        }
        let form = form2.clone();
        let config = config.clone();
        let notifier = notifier.clone();
        let in_flight = in_flight.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let url = api::form_endpoint(&form, config.submit_rsvp_url());
            let reaction = submit(FormKind::Rsvp, &form, &url, &config).await;
            apply_rsvp(&form, &reaction, &notifier);
            in_flight.finish();
        });
    });
}

pub fn open_modal(modal: &Element) {
    dom::add_class(modal, MODAL_OPEN_CLASS);
}

pub fn close_modal(modal: &Element) {
    dom::remove_class(modal, MODAL_OPEN_CLASS);
}

/// Put the wish submit button into its busy state. Returns the label to
/// restore afterwards.
pub fn begin_wish_submit(els: &WishModalEls, strings: &Strings) -> String {
    let original_label = els.submit_btn.text_content().unwrap_or_default();
    els.submit_btn.set_text_content(Some(&strings.wish_submitting));
    els.submit_btn.set_disabled(true);
    original_label
}

/// Apply a wish submission's reaction and restore the submit button,
/// whatever the outcome.
pub fn finish_wish_submit(
    els: &WishModalEls,
    reaction: &Reaction,
    original_label: &str,
    notifier: &Notifier,
    loader: Option<&Rc<WishesLoader>>,
) {
    notifier.notify(&reaction.message, reaction.kind);
    if reaction.reset_form {
        els.form.reset();
    }
    if reaction.close_modal {
        close_modal(&els.modal);
    }
    if let (Some(page), Some(loader)) = (reaction.reload_wishes, loader) {
        loader.load(page);
    }

    els.submit_btn.set_text_content(Some(original_label));
    els.submit_btn.set_disabled(false);
}

/// Wish modal open/close controls and the wish form.
pub fn bind_wish_modal(
    els: WishModalEls,
    config: Rc<PageConfig>,
    notifier: Notifier,
    loader: Option<Rc<WishesLoader>>,
) {
    {
        let modal = els.modal.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            open_modal(&modal);
        }) as Box<dyn FnMut(_)>);
        let _ = els
            .open_btn
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
    {
        let modal = els.modal.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            close_modal(&modal);
        }) as Box<dyn FnMut(_)>);
        let _ = els
            .close_btn
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
    {
        // Backdrop click: only when the modal itself is the target, not its content.
        let modal = els.modal.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let on_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t == modal);
            if on_backdrop {
                close_modal(&modal);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = els
            .modal
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    let form = els.form.clone();
    on_submit(&form, move || {
        let original_label = begin_wish_submit(&els, &config.strings);

        let els = els.clone();
        let config = config.clone();
        let notifier = notifier.clone();
        let loader = loader.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let url = api::form_endpoint(&els.form, config.submit_wish_url());
            let reaction = submit(FormKind::Wish, &els.form, &url, &config).await;
            finish_wish_submit(&els, &reaction, &original_label, &notifier, loader.as_ref());
        });
    });
}
