use crate::api::{RequestError, FALLBACK_ERROR_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    Unauthorized, // HTTP 401
    RateLimited,  // HTTP 403 / 429 (Unsplash answers 403 when the hourly quota is spent)
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    Timeout,
    NetworkError, // DNS, refused connections, TLS, etc.
    Decode,       // Response was not the expected JSON
    Other,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Unauthorized => "Unauthorized",
            ErrorType::RateLimited => "Rate limited",
            ErrorType::NotFound => "Not found",
            ErrorType::ServerError => "Server error",
            ErrorType::Timeout => "Timeout",
            ErrorType::NetworkError => "Network error",
            ErrorType::Decode => "Bad response",
            ErrorType::Other => "Error",
        }
    }
}

/// Classify a request failure
pub fn classify_error(error: &RequestError) -> ErrorType {
    if let Some(status) = error.status() {
        return match status {
            401 => ErrorType::Unauthorized,
            403 | 429 => ErrorType::RateLimited,
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        };
    }

    match error {
        RequestError::Decode(_) => ErrorType::Decode,
        RequestError::Transport(e) if e.is_timeout() => ErrorType::Timeout,
        RequestError::Transport(e) if e.is_connect() || e.is_request() => ErrorType::NetworkError,
        _ => {
            let msg = error.to_string().to_lowercase();
            if msg.contains("timeout") || msg.contains("timed out") {
                ErrorType::Timeout
            } else if msg.contains("dns") || msg.contains("network") || msg.contains("connection refused") {
                ErrorType::NetworkError
            } else {
                ErrorType::Other
            }
        }
    }
}

/// Human-readable message for a notification
///
/// API error bodies are shown verbatim. Transport failures show the deepest
/// cause in the chain, which is usually the informative part
/// ("Connection refused", "dns error", ...). Empty messages fall back to a
/// generic one.
pub fn format_error_message(error: &RequestError) -> String {
    let message = match error {
        RequestError::Transport(_) => {
            let mut source = std::error::Error::source(error);
            let mut deepest = error.to_string();

            while let Some(err) = source {
                deepest = err.to_string();
                source = err.source();
            }

            deepest
        }
        _ => error.to_string(),
    };

    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
