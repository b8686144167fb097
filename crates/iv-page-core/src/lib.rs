//! Browser-independent logic for the invitation page.
//!
//! Everything here is plain Rust so it can be tested natively; the
//! `invite-wasm` crate maps these decisions onto the DOM.

pub mod config;
pub mod copy;
pub mod countdown;
pub mod music;
pub mod notification;
pub mod pagination;
pub mod submission;
pub mod wishes;

pub use config::{ConfigError, PageConfig, Strings};
pub use notification::NotificationKind;
