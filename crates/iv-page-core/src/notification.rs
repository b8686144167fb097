//! Notification kinds and the show/hide lifecycle.

use crate::config::Strings;

pub const DEFAULT_DURATION_MS: u32 = 3000;
/// Must match the CSS transition on `.notification`.
pub const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn title(self, strings: &Strings) -> &str {
        match self {
            NotificationKind::Success => &strings.success_title,
            NotificationKind::Error => &strings.error_title,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Entering,
    Visible,
    Hiding,
    Removed,
}

/// Guards a single panel so that the close button and the auto-hide timer,
/// whichever fires first, run the hide path exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifecycle {
    phase: Phase,
}

impl Lifecycle {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Called on the animation frame after insertion. Returns false if the
    /// panel was already closed, in which case the visible class is not added.
    pub fn reveal(&mut self) -> bool {
        if self.phase == Phase::Entering {
            self.phase = Phase::Visible;
            true
        } else {
            false
        }
    }

    /// Returns true only for the first hide request.
    pub fn begin_hide(&mut self) -> bool {
        match self.phase {
            Phase::Entering | Phase::Visible => {
                self.phase = Phase::Hiding;
                true
            }
            Phase::Hiding | Phase::Removed => false,
        }
    }

    /// Returns true if the panel should now be detached.
    pub fn finish(&mut self) -> bool {
        if self.phase == Phase::Hiding {
            self.phase = Phase::Removed;
            true
        } else {
            false
        }
    }
}
