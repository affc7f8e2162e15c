//! UI Model
//!
//! This sub-model contains state related to the user interface itself:
//! preferences, the toast currently on screen, and visual bookkeeping.

use std::time::{Duration, Instant};

use super::types::Notification;
use crate::logic::errors::ErrorType;

/// A notification on screen and when it appeared
#[derive(Clone, Debug)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// UI preferences and transient visual state
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// How long a toast stays up
    pub toast_duration: Duration,

    // ============================================
    // NOTIFICATIONS
    // ============================================
    pub toast: Option<Toast>,

    /// Class of the most recent request failure, for the status bar
    pub last_error_type: Option<ErrorType>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// When the current loading state began (drives the loader animation)
    pub loading_since: Option<Instant>,

    /// Sixel cleanup counter (clear the terminal for N frames)
    pub sixel_cleanup_frames: u8,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, toast_duration: Duration) -> Self {
        Self {
            vim_mode,
            toast_duration,
            toast: None,
            last_error_type: None,
            loading_since: None,
            sixel_cleanup_frames: 0,
            should_quit: false,
        }
    }

    /// Notification sink: show a message, replacing any current toast
    pub fn notify(&mut self, notification: Notification) {
        tracing::debug!(kind = ?notification.kind, message = %notification.message, "notify");
        self.toast = Some(Toast {
            notification,
            shown_at: Instant::now(),
        });
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.toast.as_ref().is_some_and(|toast| {
            crate::logic::ui::should_dismiss_toast(toast.shown_at.elapsed().as_millis(), self.toast_duration)
        })
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_replaces_toast() {
        let mut ui = UiModel::new(false, Duration::from_millis(3000));
        assert!(ui.toast.is_none());

        ui.notify(Notification::info("first"));
        ui.notify(Notification::error("second"));
        let toast = ui.toast.as_ref().unwrap();
        assert_eq!(toast.notification, Notification::error("second"));
        assert!(!ui.should_dismiss_toast());

        ui.dismiss_toast();
        assert!(ui.toast.is_none());
    }

    #[test]
    fn test_zero_duration_dismisses_immediately() {
        let mut ui = UiModel::new(false, Duration::ZERO);
        ui.notify(Notification::info("gone"));
        assert!(ui.should_dismiss_toast());
    }
}
