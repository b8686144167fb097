//! Transient notification popups.

use std::cell::Cell;
use std::rc::Rc;

use gloo_console as console;
use gloo_timers::callback::Timeout;
use iv_page_core::notification::{EXIT_ANIMATION_MS, Lifecycle};
use iv_page_core::{NotificationKind, Strings};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom;

#[derive(Clone)]
pub struct Notifier {
    container: Option<Element>,
    strings: Rc<Strings>,
    default_duration_ms: u32,
}

impl Notifier {
    pub fn new(container: Option<Element>, strings: Rc<Strings>, default_duration_ms: u32) -> Self {
        Self {
            container,
            strings,
            default_duration_ms,
        }
    }

    /// Show with the page's configured duration.
    pub fn notify(&self, message: &str, kind: NotificationKind) {
        self.show(message, kind, self.default_duration_ms);
    }

    /// Append a panel, reveal it on the next frame and hide it after `duration_ms`.
    pub fn show(&self, message: &str, kind: NotificationKind, duration_ms: u32) {
        let Some(container) = &self.container else {
            console::error!("Notification container not found!");
            return;
        };
        let panel = match self.build_panel(message, kind) {
            Ok(p) => p,
            Err(e) => {
                console::error!(format!("notification: {}", dom::describe(&e)));
                return;
            }
        };
        if let Err(e) = container.append_child(&panel.root) {
            console::error!(format!("notification: {}", dom::describe(&e)));
            return;
        }

        let lifecycle = Rc::new(Cell::new(Lifecycle::default()));

        {
            let root = panel.root.clone();
            let lifecycle = lifecycle.clone();
            let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
                hide(&root, &lifecycle);
            }) as Box<dyn FnMut(_)>);
            let _ = panel
                .close_btn
                .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
            cb.forget();
        }

        // Adding the class in the same frame as insertion would skip the enter transition.
        {
            let root = panel.root.clone();
            let lifecycle = lifecycle.clone();
            let cb = Closure::once_into_js(move || {
                let mut l = lifecycle.get();
                if l.reveal() {
                    dom::add_class(&root, "show");
                }
                lifecycle.set(l);
            });
            let _ = dom::window().request_animation_frame(cb.unchecked_ref());
        }

        let root = panel.root;
        Timeout::new(duration_ms, move || hide(&root, &lifecycle)).forget();
    }

    fn build_panel(&self, message: &str, kind: NotificationKind) -> Result<Panel, JsValue> {
        let class = format!("notification {}", kind.css_class());
        let root = dom::create_element("div", Some(class.as_str()))?;

        let header = dom::create_element("div", Some("notification-header"))?;
        let title = dom::create_element("span", None)?;
        dom::set_text(&title, kind.title(&self.strings));
        let close_btn = dom::create_element("button", Some("notification-close"))?;
        dom::set_text(&close_btn, "\u{00d7}");
        header.append_child(&title)?;
        header.append_child(&close_btn)?;

        let body = dom::create_element("div", Some("notification-body"))?;
        dom::set_text(&body, message);

        root.append_child(&header)?;
        root.append_child(&body)?;
        Ok(Panel { root, close_btn })
    }
}

struct Panel {
    root: Element,
    close_btn: Element,
}

fn hide(root: &Element, lifecycle: &Rc<Cell<Lifecycle>>) {
    let mut l = lifecycle.get();
    if !l.begin_hide() {
        return;
    }
    lifecycle.set(l);
    dom::remove_class(root, "show");

    let root = root.clone();
    let lifecycle = lifecycle.clone();
    Timeout::new(EXIT_ANIMATION_MS, move || {
        let mut l = lifecycle.get();
        if l.finish() {
            dom::detach(&root);
        }
        lifecycle.set(l);
    })
    .forget();
}
