//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: Search results and image bytes from the background service
//! - keyboard: User keyboard input
//! - mouse: Clicks on cards and buttons, wheel scrolling
//!
//! Handlers are functions that take &mut App and dispatch to App methods.

pub mod api;
pub mod keyboard;
pub mod mouse;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
