//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **SearchModel**: Search input buffer and focus
//! - **GalleryModel**: Query, page, accumulated results, fetch status
//! - **ModalModel**: The enlarged image, if any
//! - **ScrollModel**: Gallery viewport offset and pending auto-scroll
//! - **UiModel**: Preferences, toast, visual state
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O lives in the runtime (`App`)
//! - Transitions: Cross-model changes go through methods on `Model`

pub mod gallery;
pub mod modal;
pub mod scroll;
pub mod search;
pub mod types;
pub mod ui;

use std::time::{Duration, Instant};

pub use gallery::{FetchOutcome, GalleryModel};
pub use modal::ModalModel;
pub use scroll::ScrollModel;
pub use search::SearchModel;
pub use types::*;
pub use ui::UiModel;

use crate::api::{RequestError, SearchPage};
use crate::logic;

pub const BLANK_QUERY_MESSAGE: &str = "Please enter a search term";

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub search: SearchModel,
    pub gallery: GalleryModel,
    pub modal: ModalModel,
    pub scroll: ScrollModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool, toast_duration: Duration) -> Self {
        Self {
            search: SearchModel::new(),
            gallery: GalleryModel::new(),
            modal: ModalModel::new(),
            scroll: ScrollModel::new(),
            ui: UiModel::new(vim_mode, toast_duration),
        }
    }

    /// Submit the search form
    ///
    /// The gallery is reset before anything else happens. A blank query
    /// produces an info toast and no request.
    pub fn submit_search(&mut self) -> Option<FetchRequest> {
        let raw = self.search.submit();
        self.scroll.scroll_to_top();
        self.ui.last_error_type = None;

        let request = self.gallery.submit_query(&raw);
        match &request {
            Some(_) => self.ui.loading_since = Some(Instant::now()),
            None => {
                self.ui.loading_since = None;
                self.ui.notify(Notification::info(BLANK_QUERY_MESSAGE));
            }
        }
        request
    }

    /// Ask for the next page
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        let request = self.gallery.load_more();
        if request.is_some() {
            self.ui.loading_since = Some(Instant::now());
        }
        request
    }

    /// Apply a search response, notifying and arming auto-scroll as needed
    pub fn apply_search_result(
        &mut self,
        request: &FetchRequest,
        result: Result<SearchPage, RequestError>,
    ) -> FetchOutcome {
        let error_type = result.as_ref().err().map(logic::errors::classify_error);
        let outcome = self.gallery.apply_response(request, result);

        if outcome == FetchOutcome::Stale {
            return outcome;
        }

        self.ui.loading_since = None;

        if let Some(notification) = outcome.notification() {
            self.ui.notify(notification);
        }

        self.ui.last_error_type = error_type;

        if let FetchOutcome::Loaded {
            last_appended_id: Some(id),
            ..
        } = &outcome
        {
            self.scroll.arm(id.clone(), self.gallery.generation());
        }

        outcome
    }

    /// Open the modal on the gallery item at `index`
    pub fn open_modal(&mut self, index: usize) -> bool {
        let Some(item) = self.gallery.images().get(index).cloned() else {
            return false;
        };
        self.gallery.selected_index = Some(index);
        self.scroll.disarm();
        self.modal.open(item);
        true
    }

    pub fn open_selected(&mut self) -> bool {
        let Some(item) = self.gallery.selected_item().cloned() else {
            return false;
        };
        self.scroll.disarm();
        self.modal.open(item);
        true
    }

    pub fn close_modal(&mut self) {
        if self.modal.close().is_some() {
            // Graphics protocols like sixel leave residue behind overlays
            self.ui.sixel_cleanup_frames = 1;
        }
    }

    /// Scroll-to-top affordance; refused while the modal is open
    pub fn scroll_to_top(&mut self) -> bool {
        if !self.scroll_to_top_visible() {
            return false;
        }
        self.scroll.scroll_to_top();
        true
    }

    /// Image completion signal routed to the pending auto-scroll
    pub fn on_image_loaded(&mut self, item_id: &str) -> bool {
        self.scroll.on_image_loaded(item_id, self.gallery.generation())
    }

    /// Fire the pending auto-scroll now if its image has already settled
    ///
    /// Covers images that finished before the page was applied (cache hits)
    /// and runs without image previews, where nothing will ever signal.
    pub fn settle_pending_scroll(&mut self, is_settled: impl Fn(&str) -> bool) -> bool {
        let Some(item_id) = self.scroll.pending().map(|p| p.item_id.clone()) else {
            return false;
        };

        is_settled(&item_id) && self.on_image_loaded(&item_id)
    }

    pub fn scroll_to_top_visible(&self) -> bool {
        !self.modal.is_open()
    }

    pub fn load_more_visible(&self) -> bool {
        self.gallery.can_load_more()
    }

    pub fn loader_visible(&self) -> bool {
        self.gallery.is_loading()
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }
}
