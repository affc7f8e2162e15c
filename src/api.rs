use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when a failure carries no usable text of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageUrls {
    /// Thumbnail used by the gallery grid
    pub small: String,
    /// Full-size variant used by the modal
    pub regular: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageItem {
    pub id: String,
    #[serde(rename = "alt_description", default)]
    pub description: Option<String>,
    pub urls: ImageUrls,
    pub user: Author,
    #[serde(default)]
    pub likes: u64,
}

impl ImageItem {
    /// Description for display, "Untitled" when the API has none
    pub fn display_description(&self) -> &str {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or("Untitled")
    }

    pub fn url(&self, variant: ImageVariant) -> &str {
        match variant {
            ImageVariant::Thumbnail => &self.urls.small,
            ImageVariant::Full => &self.urls.regular,
        }
    }
}

/// Which of the two URL variants of an image is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageVariant {
    Thumbnail,
    Full,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total: u64,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    results: Vec<ImageItem>,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub results: Vec<ImageItem>,
    pub total_pages: u32,
    pub total: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// Failure talking to the image API
#[derive(Debug, Error)]
pub enum RequestError {
    /// Connection, TLS, timeout or body read failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response; `message` comes from the error body when present
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// HTTP status of the failure, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Transport(e) => e.status().map(|s| s.as_u16()),
            RequestError::Api { status, .. } => Some(*status),
            RequestError::Decode(_) => None,
        }
    }
}

/// Longest plain-text error body shown as-is
const MAX_PLAIN_ERROR_LEN: usize = 200;

/// Build an error from a non-success response body
///
/// Unsplash answers most failures with `{"errors": ["..."]}`; those messages
/// are joined. Rate limiting comes back as a short plain-text body, which is
/// used verbatim. Anything else falls back to the status line.
pub fn api_error(status: u16, body: &str) -> RequestError {
    let from_body = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => Some(parsed.errors.join("; ")),
        Err(_) => plain_text_message(body),
    }
    .filter(|m| !m.trim().is_empty());

    let message = from_body.unwrap_or_else(|| {
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Request failed");
        format!("{} {}", status, reason)
    });

    RequestError::Api { status, message }
}

/// A short single-line body that is not markup
fn plain_text_message(body: &str) -> Option<String> {
    let text = body.trim();
    let usable = !text.is_empty()
        && text.len() <= MAX_PLAIN_ERROR_LEN
        && !text.contains('\n')
        && !text.starts_with('<')
        && !text.starts_with('{');
    usable.then(|| text.to_string())
}

/// Parse a `/search/photos` response body
pub fn parse_search_response(body: &str) -> Result<SearchPage, RequestError> {
    let parsed: SearchResponse = serde_json::from_str(body)?;
    Ok(SearchPage {
        results: parsed.results,
        total_pages: parsed.total_pages,
        total: parsed.total,
    })
}

/// The remote image-search API as seen by the rest of the application
pub trait ImageSearch: Clone + Send + Sync + 'static {
    /// Fetch one page (1-indexed) of results for `query`
    fn search(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<SearchPage, RequestError>> + Send;

    /// Download the raw bytes behind an image URL
    fn fetch_image(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, RequestError>> + Send;
}

#[derive(Clone)]
pub struct UnsplashClient {
    client: Client,
    base_url: String,
    access_key: String,
    per_page: u32,
}

impl UnsplashClient {
    pub fn new(
        base_url: String,
        access_key: String,
        per_page: u32,
        timeout: Duration,
    ) -> Result<Self, RequestError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("imgsearch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key,
            per_page,
        })
    }

    pub fn search_url(&self, query: &str, page: u32) -> String {
        format!(
            "{}/search/photos?query={}&page={}&per_page={}",
            self.base_url,
            urlencoding::encode(query),
            page,
            self.per_page
        )
    }
}

impl ImageSearch for UnsplashClient {
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, RequestError> {
        let url = self.search_url(query, page);
        tracing::debug!(%url, "search request");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        parse_search_response(&body)
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, RequestError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Api {
                status: status.as_u16(),
                message: format!("Image download failed: {}", status),
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total": 133,
        "total_pages": 12,
        "results": [
            {
                "id": "eOLpJytrbsQ",
                "alt_description": "orange cat on a sofa",
                "urls": {
                    "raw": "https://images.unsplash.com/photo-1?raw",
                    "small": "https://images.unsplash.com/photo-1?w=400",
                    "regular": "https://images.unsplash.com/photo-1?w=1080"
                },
                "user": { "name": "Jane Doe", "username": "jdoe" },
                "likes": 42
            },
            {
                "id": "b2",
                "alt_description": null,
                "urls": { "small": "s", "regular": "r" },
                "user": { "name": "Someone" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_search_response() {
        let page = parse_search_response(SAMPLE).unwrap();
        assert_eq!(page.total, 133);
        assert_eq!(page.total_pages, 12);
        assert_eq!(page.results.len(), 2);

        let first = &page.results[0];
        assert_eq!(first.id, "eOLpJytrbsQ");
        assert_eq!(first.display_description(), "orange cat on a sofa");
        assert_eq!(first.url(ImageVariant::Thumbnail), "https://images.unsplash.com/photo-1?w=400");
        assert_eq!(first.url(ImageVariant::Full), "https://images.unsplash.com/photo-1?w=1080");
        assert_eq!(first.user.name, "Jane Doe");
        assert_eq!(first.likes, 42);
    }

    #[test]
    fn test_missing_description_and_likes() {
        let page = parse_search_response(SAMPLE).unwrap();
        let second = &page.results[1];
        assert_eq!(second.description, None);
        assert_eq!(second.display_description(), "Untitled");
        assert_eq!(second.likes, 0);
    }

    #[test]
    fn test_parse_garbage_is_decode_error() {
        let err = parse_search_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_api_error_uses_error_body() {
        let err = api_error(401, r#"{"errors":["OAuth error: The access token is invalid"]}"#);
        assert_eq!(err.to_string(), "OAuth error: The access token is invalid");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_api_error_joins_multiple_messages() {
        let err = api_error(400, r#"{"errors":["query is missing","page is invalid"]}"#);
        assert_eq!(err.to_string(), "query is missing; page is invalid");
    }

    #[test]
    fn test_api_error_uses_plain_text_body() {
        let err = api_error(403, "Rate Limit Exceeded\n");
        assert_eq!(err.to_string(), "Rate Limit Exceeded");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_api_error_falls_back_to_status_line() {
        let err = api_error(500, r#"{"errors":[]}"#);
        assert_eq!(err.to_string(), "500 Internal Server Error");

        let err = api_error(502, "<html><body>Bad Gateway</body></html>");
        assert_eq!(err.to_string(), "502 Bad Gateway");

        let err = api_error(503, "   ");
        assert_eq!(err.to_string(), "503 Service Unavailable");

        let err = api_error(500, &"x".repeat(500));
        assert_eq!(err.to_string(), "500 Internal Server Error");
    }

    #[test]
    fn test_search_url_encodes_query() {
        let client = UnsplashClient::new(
            "https://api.unsplash.com/".to_string(),
            "key".to_string(),
            12,
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            client.search_url("red cars & bikes", 3),
            "https://api.unsplash.com/search/photos?query=red%20cars%20%26%20bikes&page=3&per_page=12"
        );
    }
}
