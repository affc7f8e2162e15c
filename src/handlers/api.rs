//! API Response Handler
//!
//! Handles responses from the background API service: search pages and
//! downloaded image bytes.

use imgsearch::api::ImageVariant;
use imgsearch::model::FetchOutcome;

use crate::services::ApiResponse;
use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - SearchResult: One page of search results (or the failure)
/// - ImageResult: Bytes of a thumbnail or full-size image
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::SearchResult { request, result } => {
            let outcome = app.model.apply_search_result(&request, result);

            match outcome {
                FetchOutcome::Stale => {
                    tracing::debug!(
                        query = %request.query,
                        page = request.page,
                        generation = request.generation,
                        "discarding stale search response"
                    );
                }
                FetchOutcome::Loaded { page, added, exhausted, .. } => {
                    tracing::debug!(page, added, exhausted, "search page loaded");

                    // Thumbnails for the cards that were just appended
                    let images = app.model.gallery.images();
                    let new_items = images[images.len().saturating_sub(added)..].to_vec();
                    for item in &new_items {
                        app.request_image(item, ImageVariant::Thumbnail);
                    }

                    app.check_pending_scroll();
                }
                FetchOutcome::Empty => {
                    tracing::debug!(query = %request.query, page = request.page, "search returned no results");
                }
                FetchOutcome::Failed { message } => {
                    tracing::debug!(query = %request.query, page = request.page, %message, "search failed");
                }
            }
        }

        ApiResponse::ImageResult { item_id, variant, bytes } => {
            app.handle_image_bytes(item_id, variant, bytes);
        }
    }
}
