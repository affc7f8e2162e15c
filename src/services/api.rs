use std::collections::{HashSet, VecDeque};

use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{ImageSearch, ImageVariant, RequestError, SearchPage};
use crate::model::FetchRequest;

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // Searches (user is waiting on the loader)
    Medium, // Full-size image for the open modal
    Low,    // Gallery thumbnails
}

/// Unique identifier for deduplicating requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Search { generation: u64, page: u32 },
    Image { item_id: String, variant: ImageVariant },
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch one page of search results
    Search(FetchRequest),

    /// Download one image variant
    FetchImage {
        item_id: String,
        variant: ImageVariant,
        url: String,
    },
}

impl ApiRequest {
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::Search(_) => Priority::High,
            ApiRequest::FetchImage {
                variant: ImageVariant::Full,
                ..
            } => Priority::Medium,
            ApiRequest::FetchImage { .. } => Priority::Low,
        }
    }

    fn key(&self) -> RequestKey {
        match self {
            ApiRequest::Search(request) => RequestKey::Search {
                generation: request.generation,
                page: request.page,
            },
            ApiRequest::FetchImage { item_id, variant, .. } => RequestKey::Image {
                item_id: item_id.clone(),
                variant: *variant,
            },
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    SearchResult {
        request: FetchRequest,
        result: Result<SearchPage, RequestError>,
    },

    ImageResult {
        item_id: String,
        variant: ImageVariant,
        bytes: Result<Vec<u8>, RequestError>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that processes requests in the background
pub struct ApiService<C: ImageSearch> {
    client: C,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl<C: ImageSearch> ApiService<C> {
    pub(crate) fn new(
        client: C,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 6,
        }
    }

    /// Add a request to the queue
    ///
    /// Requests whose key is already queued or in flight are dropped; the
    /// earlier one will answer for both.
    fn enqueue(&mut self, request: ApiRequest) {
        let key = request.key();
        if self.in_flight.contains(&key) || self.request_queue.iter().any(|(r, _)| r.key() == key) {
            tracing::trace!(?key, "dropping duplicate request");
            return;
        }

        let priority = request.priority();

        // Insert based on priority (high priority at front)
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Process the next request from the queue
    fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return;
        };

        let key = request.key();
        self.in_flight.insert(key.clone());

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        // No per-request retries: a failed search halts pagination until the next query
        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed(key));
        });
    }

    async fn execute_request(client: &C, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::Search(request) => {
                tracing::debug!(query = %request.query, page = request.page, "search start");
                let result = client.search(&request.query, request.page).await;
                tracing::debug!(
                    query = %request.query,
                    page = request.page,
                    success = result.is_ok(),
                    "search end"
                );
                ApiResponse::SearchResult { request, result }
            }

            ApiRequest::FetchImage { item_id, variant, url } => {
                let bytes = client.fetch_image(&url).await;
                if let Err(e) = &bytes {
                    tracing::debug!(%item_id, ?variant, error = %e, "image download failed");
                }
                ApiResponse::ImageResult { item_id, variant, bytes }
            }
        }
    }
}

/// Spawn the API service worker
///
/// The worker exits once every request sender is dropped and its queue has
/// drained.
pub fn spawn_api_service<C: ImageSearch>(
    client: C,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);
        let mut requests_closed = false;

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                request = request_rx.recv(), if !requests_closed => {
                    match request {
                        Some(request) => service.enqueue(request),
                        None => requests_closed = true,
                    }
                }

                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                _ = tick.tick() => {
                    // Process multiple requests per tick if queue has items
                    for _ in 0..5 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next();
                    }

                    if requests_closed && service.request_queue.is_empty() && service.in_flight.is_empty() {
                        break;
                    }
                }
            }
        }

        tracing::debug!("api service stopped");
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(item_id: &str, variant: ImageVariant) -> ApiRequest {
        ApiRequest::FetchImage {
            item_id: item_id.to_string(),
            variant,
            url: format!("https://img/{}", item_id),
        }
    }

    fn search(page: u32) -> ApiRequest {
        ApiRequest::Search(FetchRequest {
            query: "cats".to_string(),
            page,
            generation: 1,
        })
    }

    #[derive(Clone)]
    struct NoopClient;

    impl ImageSearch for NoopClient {
        async fn search(&self, _query: &str, _page: u32) -> Result<SearchPage, RequestError> {
            Ok(SearchPage {
                results: vec![],
                total_pages: 0,
                total: 0,
            })
        }

        async fn fetch_image(&self, _url: &str) -> Result<Vec<u8>, RequestError> {
            Ok(vec![])
        }
    }

    fn service() -> ApiService<NoopClient> {
        let (response_tx, _response_rx) = mpsc::unbounded_channel();
        let (completion_tx, _completion_rx) = mpsc::unbounded_channel();
        ApiService::new(NoopClient, response_tx, completion_tx)
    }

    #[test]
    fn test_priority_ordering() {
        let mut service = service();
        service.enqueue(image("a", ImageVariant::Thumbnail));
        service.enqueue(image("b", ImageVariant::Full));
        service.enqueue(search(2));
        service.enqueue(image("c", ImageVariant::Thumbnail));

        let order: Vec<Priority> = service.request_queue.iter().map(|(_, p)| *p).collect();
        assert_eq!(
            order,
            vec![Priority::High, Priority::Medium, Priority::Low, Priority::Low]
        );

        // FIFO within a priority level
        let keys: Vec<RequestKey> = service.request_queue.iter().map(|(r, _)| r.key()).collect();
        assert_eq!(
            keys[2],
            RequestKey::Image {
                item_id: "a".to_string(),
                variant: ImageVariant::Thumbnail
            }
        );
    }

    #[test]
    fn test_duplicate_queued_request_dropped() {
        let mut service = service();
        service.enqueue(image("a", ImageVariant::Thumbnail));
        service.enqueue(image("a", ImageVariant::Thumbnail));
        service.enqueue(image("a", ImageVariant::Full));
        assert_eq!(service.request_queue.len(), 2);
    }

    #[test]
    fn test_duplicate_in_flight_request_dropped() {
        let mut service = service();
        service.in_flight.insert(search(2).key());
        service.enqueue(search(2));
        service.enqueue(search(3));
        assert_eq!(service.request_queue.len(), 1);
    }
}
