//! Background API service against a fake image API
//!
//! Covers what the runtime relies on: responses carry the request they
//! answer, duplicate downloads collapse into one, and the worker stops once
//! the app drops its sender.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use imgsearch::api::{api_error, Author, ImageItem, ImageSearch, ImageUrls, ImageVariant, RequestError, SearchPage};
use imgsearch::model::FetchRequest;
use imgsearch::services::{spawn_api_service, ApiRequest, ApiResponse};
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(2);

#[derive(Clone, Default)]
struct FakeApi {
    downloads: Arc<AtomicUsize>,
}

impl ImageSearch for FakeApi {
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, RequestError> {
        if query == "forbidden" {
            return Err(api_error(403, "Rate Limit Exceeded"));
        }

        Ok(SearchPage {
            results: vec![ImageItem {
                id: format!("{}-{}", query, page),
                description: None,
                urls: ImageUrls {
                    small: "https://img/small".to_string(),
                    regular: "https://img/regular".to_string(),
                },
                user: Author {
                    name: "Jeff".to_string(),
                },
                likes: 0,
            }],
            total_pages: 3,
            total: 3,
        })
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, RequestError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        // Keep the download in flight long enough for a duplicate to arrive
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(url.as_bytes().to_vec())
    }
}

fn request(query: &str, page: u32, generation: u64) -> FetchRequest {
    FetchRequest {
        query: query.to_string(),
        page,
        generation,
    }
}

#[tokio::test]
async fn test_search_response_carries_its_request() {
    let (tx, mut rx) = spawn_api_service(FakeApi::default());

    tx.send(ApiRequest::Search(request("cats", 2, 7))).expect("service alive");

    let response = timeout(WAIT, rx.recv()).await.expect("no timeout").expect("response");
    match response {
        ApiResponse::SearchResult { request, result } => {
            assert_eq!(request.query, "cats");
            assert_eq!(request.page, 2);
            assert_eq!(request.generation, 7);
            let page = result.expect("search ok");
            assert_eq!(page.results[0].id, "cats-2");
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[tokio::test]
async fn test_search_failure_is_delivered() {
    let (tx, mut rx) = spawn_api_service(FakeApi::default());

    tx.send(ApiRequest::Search(request("forbidden", 1, 1))).expect("service alive");

    let response = timeout(WAIT, rx.recv()).await.expect("no timeout").expect("response");
    let ApiResponse::SearchResult { result, .. } = response else {
        panic!("expected a search result");
    };
    let err = result.expect_err("search should fail");
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_duplicate_image_download_collapses() {
    let api = FakeApi::default();
    let downloads = api.downloads.clone();
    let (tx, mut rx) = spawn_api_service(api);

    for _ in 0..2 {
        tx.send(ApiRequest::FetchImage {
            item_id: "a".to_string(),
            variant: ImageVariant::Thumbnail,
            url: "https://img/a".to_string(),
        })
        .expect("service alive");
    }

    let response = timeout(WAIT, rx.recv()).await.expect("no timeout").expect("response");
    let ApiResponse::ImageResult { item_id, variant, bytes } = response else {
        panic!("expected an image result");
    };
    assert_eq!(item_id, "a");
    assert_eq!(variant, ImageVariant::Thumbnail);
    assert_eq!(bytes.expect("download ok"), b"https://img/a".to_vec());

    // No second answer for the duplicate
    assert!(timeout(Duration::from_millis(300), rx.recv()).await.is_err());
    assert_eq!(downloads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_service_stops_when_sender_dropped() {
    let (tx, mut rx) = spawn_api_service(FakeApi::default());

    tx.send(ApiRequest::Search(request("cats", 1, 1))).expect("service alive");
    drop(tx);

    // The queued request is still answered, then the channel closes
    let first = timeout(WAIT, rx.recv()).await.expect("no timeout");
    assert!(matches!(first, Some(ApiResponse::SearchResult { .. })));

    let closed = timeout(WAIT, rx.recv()).await.expect("no timeout");
    assert!(closed.is_none());
}
