//! Wishes list loading and rendering.

use std::cell::Cell;
use std::rc::Rc;

use gloo_console as console;
use iv_page_core::PageConfig;
use iv_page_core::wishes::{WishCard, WishList, WishesView};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Node};

use crate::api;
use crate::dom::{self, WishesEls};
use crate::pagination;

const RENDERED_SELECTOR: &str = ".wish-card, .no-wish-message";

pub struct WishesLoader {
    els: WishesEls,
    config: Rc<PageConfig>,
    /// Number of the most recent `load` call. Responses from older calls are
    /// dropped so the list always reflects the last page the visitor asked for.
    latest: Cell<u64>,
}

impl WishesLoader {
    pub fn new(els: WishesEls, config: Rc<PageConfig>) -> Rc<Self> {
        Rc::new(Self {
            els,
            config,
            latest: Cell::new(0),
        })
    }

    pub fn nav(&self) -> &Element {
        &self.els.nav
    }

    /// Number of `load` calls so far.
    pub fn generation(&self) -> u64 {
        self.latest.get()
    }

    /// Fetch `page` and re-render. Fire-and-forget.
    pub fn load(self: &Rc<Self>, page: u32) {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);

        let this = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            this.fetch(page, ticket).await;
        });
    }

    async fn fetch(&self, page: u32, ticket: u64) {
        let url = self.config.wishes_url(page);
        let resp = match api::get_wishes(&url).await {
            Ok(resp) => resp,
            Err(e) => {
                console::error!(format!("Error loading wishes: {e}"));
                return;
            }
        };
        if ticket != self.latest.get() {
            console::debug!(format!("dropping stale wishes response for page {page}"));
            return;
        }
        // API-reported failures are only logged; the current list stays.
        let Some(view) = WishesView::from_response(&resp) else {
            console::error!(format!(
                "Error loading wishes: {}",
                resp.message.as_deref().unwrap_or("unknown error")
            ));
            return;
        };
        if let Err(e) = self.render(&view) {
            console::error!(format!("Error rendering wishes: {}", dom::describe(&e)));
        }
    }

    /// Clear, repopulate, then re-render pagination, in that order.
    pub fn render(&self, view: &WishesView) -> Result<(), JsValue> {
        for el in dom::query_all_within(&self.els.container, RENDERED_SELECTOR) {
            el.remove();
        }

        match &view.list {
            WishList::Cards(cards) => {
                for card in cards {
                    self.insert(&card_element(card)?)?;
                }
            }
            WishList::Empty => {
                let placeholder =
                    dom::create_text_element("p", "no-wish-message", &self.config.strings.no_wishes)?;
                placeholder.set_attribute("style", "text-align: center; opacity: 0.7;")?;
                self.insert(&placeholder)?;
            }
        }

        pagination::render(
            &self.els.nav,
            view.pagination.current_page,
            view.pagination.total_pages,
        )
    }

    /// Insert just before the pagination nav, or at the end when the nav is
    /// not a direct child of the container.
    fn insert(&self, el: &Element) -> Result<(), JsValue> {
        let container: &Node = &self.els.container;
        let nav: &Node = &self.els.nav;
        if nav.parent_node().is_some_and(|p| p.is_same_node(Some(container))) {
            container.insert_before(el, Some(nav))?;
        } else {
            self.els.container.append_child(el)?;
        }
        Ok(())
    }
}

fn card_element(card: &WishCard) -> Result<Element, JsValue> {
    let root = dom::create_element("div", Some("wish-card"))?;

    let header = dom::create_element("div", Some("wish-header"))?;
    header.append_child(dom::create_text_element("div", "wish-avatar", &card.avatar)?.as_ref())?;
    let who = dom::create_element("div", None)?;
    who.append_child(dom::create_text_element("div", "wish-name", &card.name)?.as_ref())?;
    who.append_child(dom::create_text_element("div", "wish-date", &card.date)?.as_ref())?;
    header.append_child(&who)?;

    root.append_child(&header)?;
    root.append_child(dom::create_text_element("p", "wish-content", &card.message)?.as_ref())?;
    Ok(root)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use iv_api_types::{Pagination, Wish};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn loader() -> Rc<WishesLoader> {
        let container = dom::create_element("div", None).unwrap();
        let nav = dom::create_element("ul", None).unwrap();
        container.append_child(&nav).unwrap();
        WishesLoader::new(WishesEls { container, nav }, Rc::new(PageConfig::default()))
    }

    fn view(list: WishList) -> WishesView {
        WishesView {
            list,
            pagination: Pagination {
                current_page: 1,
                total_pages: 1,
            },
        }
    }

    #[wasm_bindgen_test]
    fn empty_page_renders_one_placeholder() {
        let l = loader();
        l.render(&view(WishList::Empty)).unwrap();
        l.render(&view(WishList::Empty)).unwrap();
        let c = &l.els.container;
        assert_eq!(dom::query_all_within(c, ".no-wish-message").len(), 1);
        assert!(dom::query_all_within(c, ".wish-card").is_empty());
    }

    #[wasm_bindgen_test]
    fn card_shows_avatar_and_verbatim_fields() {
        let l = loader();
        let wish = Wish {
            name: "Ana".to_string(),
            message: "Congrats".to_string(),
            created_at_formatted: "1 Jan 2026".to_string(),
        };
        l.render(&view(WishList::Cards(vec![WishCard::from(&wish)])))
            .unwrap();

        let c = &l.els.container;
        let text = |sel: &str| c.query_selector(sel).unwrap().unwrap().text_content().unwrap();
        assert_eq!(text(".wish-avatar"), "A");
        assert_eq!(text(".wish-name"), "Ana");
        assert_eq!(text(".wish-date"), "1 Jan 2026");
        assert_eq!(text(".wish-content"), "Congrats");
        assert!(dom::query_all_within(c, ".no-wish-message").is_empty());

        // Cards sit before the nav.
        let nav: &Node = &l.els.nav;
        assert!(c.last_element_child().unwrap().is_same_node(Some(nav)));
    }
}
