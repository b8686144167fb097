//! Routing of form submission results to UI reactions.

use iv_api_types::SubmitResponse;

use crate::config::Strings;
use crate::notification::NotificationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Rsvp,
    Wish,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(String),
    Rejected(String),
    /// Network failure, non-2xx status or an undecodable body.
    Unreachable,
}

impl From<SubmitResponse> for Outcome {
    fn from(resp: SubmitResponse) -> Self {
        if resp.is_success() {
            Outcome::Accepted(resp.message)
        } else {
            Outcome::Rejected(resp.message)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub message: String,
    pub kind: NotificationKind,
    pub reset_form: bool,
    pub close_modal: bool,
    /// Page of wishes to reload, if any.
    pub reload_wishes: Option<u32>,
}

pub fn react(form: FormKind, outcome: Outcome, strings: &Strings) -> Reaction {
    match outcome {
        Outcome::Accepted(message) => {
            let is_wish = form == FormKind::Wish;
            Reaction {
                message,
                kind: NotificationKind::Success,
                reset_form: true,
                close_modal: is_wish,
                reload_wishes: is_wish.then_some(1),
            }
        }
        Outcome::Rejected(message) => Reaction {
            message,
            kind: NotificationKind::Error,
            reset_form: false,
            close_modal: false,
            reload_wishes: None,
        },
        Outcome::Unreachable => Reaction {
            message: match form {
                FormKind::Rsvp => strings.rsvp_failed.clone(),
                FormKind::Wish => strings.wish_failed.clone(),
            },
            kind: NotificationKind::Error,
            reset_form: false,
            close_modal: false,
            reload_wishes: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iv_api_types::ApiStatus;

    fn body(status: ApiStatus, message: &str) -> SubmitResponse {
        SubmitResponse {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn rejected_wish_keeps_form() {
        let strings = Strings::default();
        let r = react(
            FormKind::Wish,
            body(ApiStatus::Error, "Name required").into(),
            &strings,
        );
        assert_eq!(r.kind, NotificationKind::Error);
        assert!(r.message.contains("Name required"));
        assert!(!r.reset_form);
        assert!(!r.close_modal);
        assert_eq!(r.reload_wishes, None);
    }

    #[test]
    fn accepted_wish_resets_and_reloads_first_page() {
        let strings = Strings::default();
        let r = react(
            FormKind::Wish,
            body(ApiStatus::Success, "Thanks!").into(),
            &strings,
        );
        assert_eq!(r.kind, NotificationKind::Success);
        assert_eq!(r.message, "Thanks!");
        assert!(r.reset_form);
        assert!(r.close_modal);
        assert_eq!(r.reload_wishes, Some(1));
    }

    #[test]
    fn accepted_rsvp_only_resets() {
        let strings = Strings::default();
        let r = react(
            FormKind::Rsvp,
            body(ApiStatus::Success, "See you").into(),
            &strings,
        );
        assert!(r.reset_form);
        assert!(!r.close_modal);
        assert_eq!(r.reload_wishes, None);
    }

    #[test]
    fn unreachable_uses_localized_message() {
        let strings = Strings::default();
        let rsvp = react(FormKind::Rsvp, Outcome::Unreachable, &strings);
        assert_eq!(rsvp.message, strings.rsvp_failed);
        let wish = react(FormKind::Wish, Outcome::Unreachable, &strings);
        assert_eq!(wish.message, strings.wish_failed);
        assert_eq!(wish.kind, NotificationKind::Error);
        assert!(!wish.reset_form);
    }
}
