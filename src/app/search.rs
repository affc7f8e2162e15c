//! Search and pagination methods
//!
//! Turn model transitions into API requests.

use crate::services::ApiRequest;
use crate::App;

impl App {
    /// Submit the search box and fetch page 1
    pub(crate) fn submit_search(&mut self) {
        let request = self.model.submit_search();

        // Images of the previous result set are no longer reachable
        self.image_state_map.clear();

        if let Some(request) = request {
            tracing::debug!(query = %request.query, generation = request.generation, "new search");
            self.send(ApiRequest::Search(request));
        }
    }

    /// Fetch the next page, if the gallery offers one
    pub(crate) fn load_more(&mut self) {
        if let Some(request) = self.model.load_more() {
            tracing::debug!(query = %request.query, page = request.page, "load more");
            self.send(ApiRequest::Search(request));
        }
    }
}
