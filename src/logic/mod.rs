//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Request failure classification and user-facing messages
//! - formatting: Like counts, truncation, page progress labels
//! - layout: Gallery grid geometry
//! - navigation: Selection movement across the card grid
//! - scroll: Viewport offsets and auto-scroll distance
//! - ui: Toast expiry and loader animation

pub mod errors;
pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod scroll;
pub mod ui;
