//! UI state transition logic
//!
//! Pure functions for time-driven UI state: toast expiry and the loader
//! animation.

use std::time::Duration;

/// How long each loader frame stays on screen
pub const LOADER_FRAME_MS: u128 = 200;

const LOADER_FRAMES: [&str; 4] = ["●○○", "○●○", "○○●", "○●○"];

/// Whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use imgsearch::logic::ui::should_dismiss_toast;
///
/// let duration = Duration::from_millis(3000);
/// assert!(!should_dismiss_toast(2999, duration));
/// assert!(should_dismiss_toast(3000, duration));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128, duration: Duration) -> bool {
    elapsed_ms >= duration.as_millis()
}

/// Loader animation frame for the time since loading started
///
/// # Examples
/// ```
/// use imgsearch::logic::ui::loader_frame;
///
/// assert_eq!(loader_frame(0), "●○○");
/// assert_eq!(loader_frame(200), "○●○");
/// assert_eq!(loader_frame(800), "●○○"); // wraps around
/// ```
pub fn loader_frame(elapsed_ms: u128) -> &'static str {
    let idx = (elapsed_ms / LOADER_FRAME_MS) as usize % LOADER_FRAMES.len();
    LOADER_FRAMES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_custom_duration() {
        let duration = Duration::from_millis(500);
        assert!(!should_dismiss_toast(499, duration));
        assert!(should_dismiss_toast(10_000, duration));
    }

    #[test]
    fn test_loader_frames_cycle() {
        assert_eq!(loader_frame(199), "●○○");
        assert_eq!(loader_frame(400), "○○●");
        assert_eq!(loader_frame(600), "○●○");
    }
}
