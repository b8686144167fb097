//! DOM element bindings.
//!
//! Elements are resolved once at startup and grouped by feature. A group whose
//! elements are missing is logged and left out; the rest of the page still
//! works. To add new UI elements, add a field to the relevant group and bind it
//! in that group's `bind()`.

use gloo_console as console;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlAudioElement, HtmlButtonElement, HtmlElement, HtmlFormElement,
};

#[derive(Debug, Error)]
#[error("missing element {0}")]
pub struct MissingElement(pub String);

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(nl) => collect_elements(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect_elements(&nl),
        Err(_) => Vec::new(),
    }
}

fn collect_elements(nl: &web_sys::NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

/// Create an element with an optional class attribute.
pub fn create_element(tag: &str, class: Option<&str>) -> Result<Element, JsValue> {
    let el = document().create_element(tag)?;
    if let Some(class) = class {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Create an element holding `text` as plain text (never parsed as HTML).
pub fn create_text_element(tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let el = create_element(tag, Some(class))?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// Detach `el` if it is still in the document.
pub fn detach(el: &Element) {
    if let Some(parent) = el.parent_node() {
        let _ = parent.remove_child(el);
    }
}

/// Render a JS error value for logs.
pub fn describe(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{:?}", err)
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| MissingElement(format!("#{}", $id)))?
    };
}

macro_rules! get_typed {
    ($ty:ty, $id:expr) => {
        by_id_typed::<$ty>($id).ok_or_else(|| {
            MissingElement(format!("#{} ({})", $id, stringify!($ty)))
        })?
    };
}

// ── Feature groups ──

#[derive(Clone)]
pub struct CountdownEls {
    pub days: Element,
    pub hours: Element,
    pub minutes: Element,
    pub seconds: Element,
}

impl CountdownEls {
    pub fn bind() -> Result<Self, MissingElement> {
        Ok(Self {
            days: get_el!("days"),
            hours: get_el!("hours"),
            minutes: get_el!("minutes"),
            seconds: get_el!("seconds"),
        })
    }
}

#[derive(Clone)]
pub struct MusicEls {
    pub control: Element,
    pub audio: HtmlAudioElement,
}

impl MusicEls {
    pub fn bind() -> Result<Self, MissingElement> {
        Ok(Self {
            control: get_el!("musicPlayer"),
            audio: get_typed!(HtmlAudioElement, "bgMusic"),
        })
    }
}

#[derive(Clone)]
pub struct WishesEls {
    pub container: Element,
    pub nav: Element,
}

impl WishesEls {
    pub fn bind() -> Result<Self, MissingElement> {
        Ok(Self {
            container: get_el!("wishesContainer"),
            nav: get_el!("paginationNav"),
        })
    }
}

#[derive(Clone)]
pub struct WishModalEls {
    pub open_btn: Element,
    pub modal: Element,
    pub close_btn: Element,
    pub form: HtmlFormElement,
    pub submit_btn: HtmlButtonElement,
}

impl WishModalEls {
    pub fn bind() -> Result<Self, MissingElement> {
        let form = get_typed!(HtmlFormElement, "wishForm");
        let submit_btn = form
            .query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok())
            .ok_or_else(|| MissingElement(r#"#wishForm button[type="submit"]"#.to_string()))?;
        Ok(Self {
            open_btn: get_el!("addWishBtn"),
            modal: get_el!("wishModal"),
            close_btn: get_el!("closeModal"),
            form,
            submit_btn,
        })
    }
}

/// All DOM references used by the page.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    /// Checked on every `show()`, so it stays optional rather than failing a group.
    pub notification_container: Option<Element>,
    pub loading_screen: Option<Element>,
    pub countdown: Option<CountdownEls>,
    pub music: Option<MusicEls>,
    pub rsvp_form: Option<HtmlFormElement>,
    pub wishes: Option<WishesEls>,
    pub wish_modal: Option<WishModalEls>,
    pub copy_buttons: Vec<HtmlElement>,
    pub fade_sections: Vec<Element>,
    pub anchors: Vec<Element>,
}

impl Elements {
    /// Resolve all DOM references. Call once after the document is parsed.
    pub fn bind() -> Elements {
        Elements {
            notification_container: by_id("notificationContainer"),
            loading_screen: by_id("loadingScreen"),
            countdown: logged(CountdownEls::bind()),
            music: logged(MusicEls::bind()),
            rsvp_form: logged(
                by_id_typed::<HtmlFormElement>("rsvpForm")
                    .ok_or_else(|| MissingElement("#rsvpForm".to_string())),
            ),
            wishes: logged(WishesEls::bind()),
            wish_modal: logged(WishModalEls::bind()),
            copy_buttons: query_all(".btn-copy")
                .into_iter()
                .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
                .collect(),
            fade_sections: query_all(".fade-in"),
            anchors: query_all(r##"a[href^="#"]"##),
        }
    }
}

fn logged<T>(bound: Result<T, MissingElement>) -> Option<T> {
    match bound {
        Ok(v) => Some(v),
        Err(e) => {
            console::error!(format!("{e}; feature disabled"));
            None
        }
    }
}
