//! What the wishes list shows for a successful page response.

use iv_api_types::{Pagination, Wish, WishesResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishCard {
    pub avatar: String,
    pub name: String,
    pub date: String,
    pub message: String,
}

impl From<&Wish> for WishCard {
    fn from(wish: &Wish) -> Self {
        Self {
            avatar: avatar_glyph(&wish.name),
            name: wish.name.clone(),
            date: wish.created_at_formatted.clone(),
            message: wish.message.clone(),
        }
    }
}

/// Uppercased first character of `name`; empty for an empty name.
pub fn avatar_glyph(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishList {
    Empty,
    Cards(Vec<WishCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishesView {
    pub list: WishList,
    pub pagination: Pagination,
}

impl WishesView {
    /// `None` when the API reported an error; the caller leaves the list alone.
    pub fn from_response(resp: &WishesResponse) -> Option<Self> {
        if !resp.is_success() {
            return None;
        }
        let list = if resp.data.is_empty() {
            WishList::Empty
        } else {
            WishList::Cards(resp.data.iter().map(WishCard::from).collect())
        };
        Some(Self {
            list,
            pagination: resp.pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iv_api_types::ApiStatus;

    fn response(status: ApiStatus, data: Vec<Wish>) -> WishesResponse {
        WishesResponse {
            status,
            message: None,
            data,
            pagination: Pagination {
                current_page: 1,
                total_pages: 1,
            },
        }
    }

    #[test]
    fn empty_page_shows_placeholder() {
        let view = WishesView::from_response(&response(ApiStatus::Success, vec![]));
        assert_eq!(view.map(|v| v.list), Some(WishList::Empty));
    }

    #[test]
    fn single_record_card() {
        let wish = Wish {
            name: "Ana".to_string(),
            message: "Congrats".to_string(),
            created_at_formatted: "1 Jan 2026".to_string(),
        };
        let view = WishesView::from_response(&response(ApiStatus::Success, vec![wish]));
        let Some(WishesView {
            list: WishList::Cards(cards),
            ..
        }) = view
        else {
            panic!("expected cards");
        };
        assert_eq!(
            cards,
            vec![WishCard {
                avatar: "A".to_string(),
                name: "Ana".to_string(),
                date: "1 Jan 2026".to_string(),
                message: "Congrats".to_string(),
            }]
        );
    }

    #[test]
    fn error_response_has_no_view() {
        assert!(WishesView::from_response(&response(ApiStatus::Error, vec![])).is_none());
    }

    #[test]
    fn avatar_glyph_cases() {
        assert_eq!(avatar_glyph("budi"), "B");
        assert_eq!(avatar_glyph("élodie"), "É");
        assert_eq!(avatar_glyph(""), "");
    }
}
