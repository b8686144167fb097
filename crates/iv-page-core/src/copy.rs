//! Account-number copy feedback.

/// How long the "copied" label and badge stay visible.
pub const FEEDBACK_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// Async clipboard API.
    Clipboard,
    /// Hidden textarea plus `execCommand("copy")`.
    Legacy,
}

impl CopyMethod {
    /// Only a confirmed clipboard write reveals the card's badge.
    pub fn shows_badge(self) -> bool {
        self == CopyMethod::Clipboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_only_for_clipboard_api() {
        assert!(CopyMethod::Clipboard.shows_badge());
        assert!(!CopyMethod::Legacy.shows_badge());
    }
}
