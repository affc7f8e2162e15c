//! Gallery Model
//!
//! Paginated fetch state for the current query: page counter, accumulated
//! results, fetch status and exhaustion. All changes go through
//! `submit_query`, `load_more` and `apply_response`.

use super::types::{FetchRequest, FetchStatus, Notification};
use crate::api::{ImageItem, RequestError, SearchPage};
use crate::logic::errors::format_error_message;

pub const EMPTY_RESULTS_MESSAGE: &str =
    "Sorry, we couldn't find anything for your query. Please try different keywords.";

pub const EXHAUSTED_MESSAGE: &str =
    "There are no more images available. Try searching with different keywords or check back later.";

/// What applying a response did to the gallery
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response for an older query or page; nothing changed
    Stale,
    /// Request succeeded with zero items
    Empty,
    /// Items were stored (replaced on page 1, appended otherwise)
    Loaded {
        page: u32,
        added: usize,
        exhausted: bool,
        /// Last appended item, set for pages after the first
        last_appended_id: Option<String>,
    },
    Failed {
        message: String,
    },
}

impl FetchOutcome {
    /// Notification to surface for this outcome, if any
    pub fn notification(&self) -> Option<Notification> {
        match self {
            FetchOutcome::Stale => None,
            FetchOutcome::Empty => Some(Notification::error(EMPTY_RESULTS_MESSAGE)),
            FetchOutcome::Loaded { exhausted: true, .. } => Some(Notification::info(EXHAUSTED_MESSAGE)),
            FetchOutcome::Loaded { .. } => None,
            FetchOutcome::Failed { message } => Some(Notification::error(message.clone())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GalleryModel {
    query: String,
    page: u32,
    images: Vec<ImageItem>,
    status: FetchStatus,
    exhausted: bool,
    total_pages: Option<u32>,
    total: Option<u64>,
    generation: u64,

    /// Keyboard cursor in the grid
    pub selected_index: Option<usize>,
}

impl Default for GalleryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryModel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            images: Vec::new(),
            status: FetchStatus::Idle,
            exhausted: false,
            total_pages: None,
            total: None,
            generation: 0,
            selected_index: None,
        }
    }

    /// Start over with a new query
    ///
    /// Results, page, exhaustion and error are reset in one step and the
    /// generation advances, so anything still in flight becomes stale.
    /// Returns the page 1 request, or `None` when the trimmed query is blank.
    pub fn submit_query(&mut self, raw: &str) -> Option<FetchRequest> {
        self.query = raw.trim().to_string();
        self.page = 1;
        self.images.clear();
        self.exhausted = false;
        self.total_pages = None;
        self.total = None;
        self.selected_index = None;
        self.generation += 1;

        if self.query.is_empty() {
            self.status = FetchStatus::Idle;
            return None;
        }

        self.status = FetchStatus::Loading;
        Some(self.current_request())
    }

    /// Advance to the next page, if more results are known to exist
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if !self.can_load_more() {
            return None;
        }

        self.page += 1;
        self.status = FetchStatus::Loading;
        Some(self.current_request())
    }

    /// Whether the "load more" affordance should be offered
    pub fn can_load_more(&self) -> bool {
        !self.query.is_empty() && !self.images.is_empty() && !self.exhausted && !self.is_loading()
    }

    /// Apply the result of `request`
    pub fn apply_response(
        &mut self,
        request: &FetchRequest,
        result: Result<SearchPage, RequestError>,
    ) -> FetchOutcome {
        if request.generation != self.generation || request.page != self.page {
            tracing::debug!(
                query = %request.query,
                page = request.page,
                generation = request.generation,
                current_generation = self.generation,
                "discarding stale search response"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(page) if page.results.is_empty() => {
                self.exhausted = true;
                self.status = FetchStatus::Success;
                self.total_pages = Some(page.total_pages);
                self.total = Some(page.total);
                FetchOutcome::Empty
            }
            Ok(page) => {
                let added = page.results.len();
                if self.page == 1 {
                    self.images = page.results;
                    self.selected_index = Some(0);
                } else {
                    self.images.extend(page.results);
                }

                self.exhausted = self.page >= page.total_pages;
                self.total_pages = Some(page.total_pages);
                self.total = Some(page.total);
                self.status = FetchStatus::Success;

                let last_appended_id = if self.page > 1 {
                    self.images.last().map(|item| item.id.clone())
                } else {
                    None
                };

                FetchOutcome::Loaded {
                    page: self.page,
                    added,
                    exhausted: self.exhausted,
                    last_appended_id,
                }
            }
            Err(e) => {
                let message = format_error_message(&e);
                tracing::debug!(query = %self.query, page = self.page, error = %e, "search failed");
                self.exhausted = true;
                self.status = FetchStatus::Error(message.clone());
                FetchOutcome::Failed { message }
            }
        }
    }

    fn current_request(&self) -> FetchRequest {
        FetchRequest {
            query: self.query.clone(),
            page: self.page,
            generation: self.generation,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn images(&self) -> &[ImageItem] {
        &self.images
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn selected_item(&self) -> Option<&ImageItem> {
        self.selected_index.and_then(|idx| self.images.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{api_error, Author, ImageUrls};

    fn item(id: &str) -> ImageItem {
        ImageItem {
            id: id.to_string(),
            description: Some(format!("photo {}", id)),
            urls: ImageUrls {
                small: format!("https://img/{}/small", id),
                regular: format!("https://img/{}/regular", id),
            },
            user: Author {
                name: "tester".to_string(),
            },
            likes: 1,
        }
    }

    fn page_of(prefix: &str, count: usize, total_pages: u32) -> SearchPage {
        SearchPage {
            results: (0..count).map(|i| item(&format!("{}{}", prefix, i))).collect(),
            total_pages,
            total: (count as u64) * total_pages as u64,
        }
    }

    #[test]
    fn test_initial_state() {
        let gallery = GalleryModel::new();
        assert_eq!(gallery.page(), 1);
        assert!(gallery.images().is_empty());
        assert_eq!(gallery.status(), &FetchStatus::Idle);
        assert!(!gallery.is_exhausted());
        assert!(!gallery.can_load_more());
    }

    #[test]
    fn test_submit_trims_and_requests_page_one() {
        let mut gallery = GalleryModel::new();
        let request = gallery.submit_query("  cats  ").unwrap();
        assert_eq!(request.query, "cats");
        assert_eq!(request.page, 1);
        assert_eq!(request.generation, 1);
        assert!(gallery.is_loading());
    }

    #[test]
    fn test_blank_query_does_not_fetch() {
        let mut gallery = GalleryModel::new();
        assert!(gallery.submit_query("   ").is_none());
        assert_eq!(gallery.status(), &FetchStatus::Idle);
        assert_eq!(gallery.query(), "");
    }

    #[test]
    fn test_blank_query_still_clears_previous_results() {
        let mut gallery = GalleryModel::new();
        let request = gallery.submit_query("cats").unwrap();
        gallery.apply_response(&request, Ok(page_of("c", 3, 2)));

        assert!(gallery.submit_query("").is_none());
        assert!(gallery.images().is_empty());
    }

    #[test]
    fn test_first_page_replaces_and_selects_first() {
        let mut gallery = GalleryModel::new();
        let request = gallery.submit_query("cats").unwrap();
        let outcome = gallery.apply_response(&request, Ok(page_of("c", 10, 2)));

        assert_eq!(
            outcome,
            FetchOutcome::Loaded {
                page: 1,
                added: 10,
                exhausted: false,
                last_appended_id: None,
            }
        );
        assert_eq!(gallery.images().len(), 10);
        assert_eq!(gallery.selected_index, Some(0));
        assert_eq!(gallery.total_pages(), Some(2));
        assert!(gallery.can_load_more());
        assert!(outcome.notification().is_none());
    }

    #[test]
    fn test_load_more_refused_while_loading() {
        let mut gallery = GalleryModel::new();
        let request = gallery.submit_query("cats").unwrap();
        gallery.apply_response(&request, Ok(page_of("c", 10, 5)));

        assert!(gallery.load_more().is_some());
        assert!(gallery.load_more().is_none());
        assert_eq!(gallery.page(), 2);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut gallery = GalleryModel::new();
        let first = gallery.submit_query("cats").unwrap();
        gallery.apply_response(&first, Ok(page_of("a", 3, 3)));
        let after_first: Vec<ImageItem> = gallery.images().to_vec();

        let second = gallery.load_more().unwrap();
        let page_two = page_of("b", 3, 3);
        let outcome = gallery.apply_response(&second, Ok(page_two.clone()));

        let mut expected = after_first;
        expected.extend(page_two.results);
        assert_eq!(gallery.images(), expected.as_slice());
        assert_eq!(
            outcome,
            FetchOutcome::Loaded {
                page: 2,
                added: 3,
                exhausted: false,
                last_appended_id: Some("b2".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_results_keep_result_set() {
        let mut gallery = GalleryModel::new();
        let first = gallery.submit_query("cats").unwrap();
        gallery.apply_response(&first, Ok(page_of("a", 4, 3)));

        let second = gallery.load_more().unwrap();
        let outcome = gallery.apply_response(&second, Ok(page_of("x", 0, 3)));

        assert_eq!(outcome, FetchOutcome::Empty);
        assert_eq!(gallery.images().len(), 4);
        assert!(gallery.is_exhausted());
        assert!(!gallery.can_load_more());
        assert_eq!(outcome.notification(), Some(Notification::error(EMPTY_RESULTS_MESSAGE)));
    }

    #[test]
    fn test_failure_sets_error_and_exhaustion() {
        let mut gallery = GalleryModel::new();
        let request = gallery.submit_query("cats").unwrap();
        let outcome = gallery.apply_response(&request, Err(api_error(401, r#"{"errors":["bad key"]}"#)));

        assert_eq!(outcome, FetchOutcome::Failed { message: "bad key".to_string() });
        assert_eq!(gallery.status(), &FetchStatus::Error("bad key".to_string()));
        assert_eq!(gallery.error_message(), Some("bad key"));
        assert!(gallery.is_exhausted());
        assert_eq!(outcome.notification(), Some(Notification::error("bad key")));
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut gallery = GalleryModel::new();
        let old = gallery.submit_query("cats").unwrap();
        let current = gallery.submit_query("dogs").unwrap();

        let outcome = gallery.apply_response(&old, Ok(page_of("c", 5, 1)));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(gallery.images().is_empty());
        assert!(gallery.is_loading());

        gallery.apply_response(&current, Ok(page_of("d", 2, 1)));
        assert_eq!(gallery.images()[0].id, "d0");
    }

    #[test]
    fn test_stale_page_is_discarded() {
        let mut gallery = GalleryModel::new();
        let first = gallery.submit_query("cats").unwrap();
        gallery.apply_response(&first, Ok(page_of("a", 2, 5)));
        gallery.load_more().unwrap();

        // A duplicate page 1 answer arriving late must not replace the set
        let outcome = gallery.apply_response(&first, Ok(page_of("z", 9, 5)));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(gallery.images().len(), 2);
    }

    #[test]
    fn test_resubmitting_same_query_refetches() {
        let mut gallery = GalleryModel::new();
        let first = gallery.submit_query("cats").unwrap();
        gallery.apply_response(&first, Ok(page_of("a", 2, 1)));

        let again = gallery.submit_query("cats").unwrap();
        assert_eq!(again.page, 1);
        assert_ne!(again.generation, first.generation);
        assert!(gallery.images().is_empty());
    }
}
