//! Pagination navigation for the wishes list.
//!
//! Links are rebuilt on every render; the single click listener lives on the
//! nav container and is bound once at startup.

use std::rc::Rc;

use iv_page_core::pagination::{LINK_CLASS, PAGE_ATTR, build_links, parse_page};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom;
use crate::wishes::WishesLoader;

pub fn render(nav: &Element, current_page: u32, total_pages: u32) -> Result<(), JsValue> {
    nav.set_inner_html("");

    for link in build_links(current_page, total_pages) {
        let li = dom::create_element("li", None)?;
        let a = dom::create_element("a", Some(link.class_name().as_str()))?;
        a.set_attribute("href", "#wishes")?;
        a.set_attribute(PAGE_ATTR, &link.target.to_string())?;
        dom::set_text(&a, &link.label);
        li.append_child(&a)?;
        nav.append_child(&li)?;
    }
    Ok(())
}

/// Page requested by a click on `target`, if the click landed on an enabled,
/// non-active link.
pub fn clicked_page(target: &Element) -> Option<u32> {
    let link = target.closest(&format!(".{LINK_CLASS}")).ok().flatten()?;
    if dom::has_class(&link, "disabled") || dom::has_class(&link, "active") {
        return None;
    }
    parse_page(&link.get_attribute(PAGE_ATTR)?)
}

pub fn bind_clicks(nav: &Element, loader: Rc<WishesLoader>) {
    let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        e.prevent_default();
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Some(page) = clicked_page(&target) {
            loader.load(page);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = nav.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    cb.forget();
}
