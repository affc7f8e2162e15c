// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout and records clickable regions
// - render: Main orchestration function that coordinates all rendering
// - search: Renders the search input box
// - gallery: Renders the scrollable card grid with thumbnails
// - controls: Renders loader, Load more, error line and scroll-to-top
// - modal: Renders the enlarged image overlay
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar
// - toast: Renders toast notifications (brief pop-up messages)

pub mod controls;
pub mod gallery;
pub mod layout;
pub mod legend;
pub mod modal;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
