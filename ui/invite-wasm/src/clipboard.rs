//! Account-number copy buttons.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console as console;
use gloo_timers::callback::Timeout;
use iv_page_core::Strings;
use iv_page_core::copy::{CopyMethod, FEEDBACK_MS};
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlDocument, HtmlElement, HtmlTextAreaElement};

use crate::dom;

const ACCOUNT_ATTR: &str = "data-account-number";
const COPIED_CLASS: &str = "copied";

/// A copy button and its pending feedback revert.
pub struct CopyButton {
    button: HtmlElement,
    /// Markup captured at bind time; every revert restores this.
    original_html: String,
    pending: RefCell<Option<Timeout>>,
}

impl CopyButton {
    pub fn new(button: HtmlElement) -> Rc<Self> {
        Rc::new(Self {
            original_html: button.inner_html(),
            button,
            pending: RefCell::new(None),
        })
    }

    fn account_number(&self) -> String {
        self.button.get_attribute(ACCOUNT_ATTR).unwrap_or_default()
    }

    /// Show the copied state for `FEEDBACK_MS`. A repeat activation restarts
    /// the window instead of stacking a second revert.
    fn show_feedback(&self, method: CopyMethod, copied_label: &str) {
        if let Err(e) = set_copied_content(&self.button, copied_label) {
            console::error!(format!("copy feedback: {}", dom::describe(&e)));
        }
        dom::add_class(&self.button, COPIED_CLASS);

        let badge = card_badge(&self.button);
        if let Some(badge) = &badge {
            dom::toggle_class(badge, "show", method.shows_badge());
        }

        let button = self.button.clone();
        let original_html = self.original_html.clone();
        let revert = Timeout::new(FEEDBACK_MS, move || {
            button.set_inner_html(&original_html);
            dom::remove_class(&button, COPIED_CLASS);
            if let Some(badge) = &badge {
                dom::remove_class(badge, "show");
            }
        });
        // Dropping the previous timeout cancels it.
        drop(self.pending.replace(Some(revert)));
    }
}

pub fn bind(buttons: &[HtmlElement], strings: Rc<Strings>) {
    for button in buttons {
        let copy = CopyButton::new(button.clone());
        let strings = strings.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let copy = copy.clone();
            let strings = strings.clone();
            wasm_bindgen_futures::spawn_local(async move {
                on_activate(&copy, &strings).await;
            });
        }) as Box<dyn FnMut(_)>);
        let _ = button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

pub async fn on_activate(copy: &CopyButton, strings: &Strings) {
    let account_number = copy.account_number();
    let method = match write_clipboard(&account_number).await {
        Ok(()) => CopyMethod::Clipboard,
        Err(e) => {
            console::error!(format!("Failed to copy: {}", dom::describe(&e)));
            if let Err(e) = legacy_copy(&account_number) {
                console::error!(format!("Fallback copy failed: {}", dom::describe(&e)));
            }
            CopyMethod::Legacy
        }
    };
    copy.show_feedback(method, &strings.copied);
}

async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let navigator = dom::window().navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false) {
        return Err(JsValue::from_str("clipboard API unavailable"));
    }
    JsFuture::from(navigator.clipboard().write_text(text)).await?;
    Ok(())
}

/// Off-screen textarea + `execCommand("copy")`.
fn legacy_copy(text: &str) -> Result<(), JsValue> {
    let document = dom::document();
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    textarea.set_value(text);
    textarea.set_attribute("readonly", "")?;
    textarea.style().set_property("position", "absolute")?;
    textarea.style().set_property("left", "-9999px")?;
    body.append_child(&textarea)?;
    textarea.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .map(|d| d.exec_command("copy"))
        .transpose()?
        .unwrap_or(false);
    textarea.remove();

    if !copied {
        console::warn!("execCommand(\"copy\") reported failure");
    }
    Ok(())
}

/// Check icon followed by the label.
fn set_copied_content(button: &HtmlElement, label: &str) -> Result<(), JsValue> {
    button.set_inner_html("");
    button.append_child(dom::create_element("i", Some("fas fa-check"))?.as_ref())?;
    button.append_with_str_1(" ")?;
    button.append_child(dom::create_text_element("span", "copied-label", label)?.as_ref())?;
    Ok(())
}

/// The `.copied-notification` badge inside the button's `.bank-card`.
fn card_badge(button: &HtmlElement) -> Option<Element> {
    button
        .closest(".bank-card")
        .ok()
        .flatten()?
        .query_selector(".copied-notification")
        .ok()
        .flatten()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PRISTINE: &str = "<span>Salin</span>";

    fn card() -> (Element, Rc<CopyButton>, Element) {
        let card = dom::create_element("div", Some("bank-card")).unwrap();
        let button: HtmlElement = dom::create_element("button", Some("btn-copy"))
            .unwrap()
            .dyn_into()
            .unwrap();
        button.set_inner_html(PRISTINE);
        button.set_attribute(ACCOUNT_ATTR, "1234567890").unwrap();
        let badge = dom::create_element("div", Some("copied-notification")).unwrap();
        card.append_child(&button).unwrap();
        card.append_child(&badge).unwrap();
        dom::document().body().unwrap().append_child(&card).unwrap();
        (card, CopyButton::new(button), badge)
    }

    #[wasm_bindgen_test]
    async fn feedback_reverts_after_delay() {
        let (_card, copy, badge) = card();
        copy.show_feedback(CopyMethod::Clipboard, "Tersalin");

        assert!(dom::has_class(&copy.button, COPIED_CLASS));
        assert!(dom::has_class(&badge, "show"));
        assert!(copy.button.text_content().unwrap().contains("Tersalin"));

        TimeoutFuture::new(FEEDBACK_MS + 100).await;
        assert!(!dom::has_class(&copy.button, COPIED_CLASS));
        assert!(!dom::has_class(&badge, "show"));
        assert_eq!(copy.button.inner_html(), PRISTINE);
    }

    #[wasm_bindgen_test]
    async fn repeat_activation_restarts_window_and_restores_original() {
        let (_card, copy, _badge) = card();
        copy.show_feedback(CopyMethod::Clipboard, "Tersalin");
        TimeoutFuture::new(500).await;
        copy.show_feedback(CopyMethod::Clipboard, "Tersalin");

        // Past the first window: the restarted one is still showing.
        TimeoutFuture::new(FEEDBACK_MS - 500 + 200).await;
        assert!(dom::has_class(&copy.button, COPIED_CLASS));
        assert!(copy.button.text_content().unwrap().contains("Tersalin"));

        TimeoutFuture::new(500).await;
        assert!(!dom::has_class(&copy.button, COPIED_CLASS));
        assert_eq!(copy.button.inner_html(), PRISTINE);
    }

    #[wasm_bindgen_test]
    fn legacy_path_skips_badge() {
        let (_card, copy, badge) = card();
        copy.show_feedback(CopyMethod::Legacy, "Tersalin");
        assert!(dom::has_class(&copy.button, COPIED_CLASS));
        assert!(!dom::has_class(&badge, "show"));
    }

    #[wasm_bindgen_test]
    fn legacy_copy_cleans_up_textarea() {
        let before = dom::query_all("textarea").len();
        legacy_copy("1234567890").unwrap();
        assert_eq!(dom::query_all("textarea").len(), before);
    }

    #[wasm_bindgen_test]
    async fn activation_shows_feedback_on_either_path() {
        let (_card, copy, _badge) = card();
        on_activate(&copy, &Strings::default()).await;
        assert!(dom::has_class(&copy.button, COPIED_CLASS));
        assert!(copy.button.text_content().unwrap().contains("Tersalin"));

        TimeoutFuture::new(FEEDBACK_MS + 100).await;
        assert_eq!(copy.button.inner_html(), PRISTINE);
    }
}
