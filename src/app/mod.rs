//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in imgsearch::model)
//! - Services (API request queue)
//! - Handlers (in src/handlers/)
//! - UI rendering (in src/ui/)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod gallery;
pub(crate) mod images;
pub(crate) mod search;
