//! Pagination link model.
//!
//! `build_links` decides what the navigation shows; the DOM layer only turns
//! each `PageLink` into an `<li><a>` pair.

pub const LINK_CLASS: &str = "pagination-link";
pub const PAGE_ATTR: &str = "data-page";
/// Upper bound on numbered links. Larger `total_pages` values are treated as
/// this many pages.
pub const MAX_PAGES: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Previous,
    Page,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub kind: LinkKind,
    /// Page requested on click. Zero only for a disabled "previous" link.
    pub target: u32,
    pub label: String,
    pub active: bool,
    pub disabled: bool,
}

impl PageLink {
    pub fn is_clickable(&self) -> bool {
        !self.active && !self.disabled
    }

    pub fn class_name(&self) -> String {
        if self.disabled {
            format!("{LINK_CLASS} disabled")
        } else if self.active {
            format!("{LINK_CLASS} active")
        } else {
            LINK_CLASS.to_string()
        }
    }
}

/// Links for `current` of `total` pages. Empty when there is at most one page.
///
/// `total` is capped at [`MAX_PAGES`] and `current` is clamped into
/// `1..=total`, so a bogus server value can never produce an active link
/// outside the rendered range.
pub fn build_links(current: u32, total: u32) -> Vec<PageLink> {
    if total <= 1 {
        return Vec::new();
    }
    let total = total.min(MAX_PAGES);
    let current = current.clamp(1, total);

    let mut links = Vec::with_capacity(total as usize + 2);
    links.push(PageLink {
        kind: LinkKind::Previous,
        target: current - 1,
        label: "<<".to_string(),
        active: false,
        disabled: current == 1,
    });
    links.extend((1..=total).map(|page| PageLink {
        kind: LinkKind::Page,
        target: page,
        label: page.to_string(),
        active: page == current,
        disabled: false,
    }));
    links.push(PageLink {
        kind: LinkKind::Next,
        target: current.saturating_add(1),
        label: ">>".to_string(),
        active: false,
        disabled: current == total,
    });
    links
}

/// Parse a `data-page` attribute value.
pub fn parse_page(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|page| *page >= 1)
}
