use anyhow::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    RateLimited,  // HTTP 429
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    InvalidResponse,
    Other,
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // Check for HTTP status codes (via reqwest error chain)
    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if reqwest_err.is_timeout() {
            return ErrorType::Timeout;
        }
        if let Some(status) = reqwest_err.status() {
            return classify_status(status.as_u16());
        }
    }

    if error.downcast_ref::<serde_json::Error>().is_some() {
        return ErrorType::InvalidResponse;
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    // Non-2xx responses are reported as "API error (404 Not Found): ..."
    if let Some(code) = api_status_code(&error_msg) {
        return classify_status(code);
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }
    if error_msg.contains("failed to parse") {
        return ErrorType::InvalidResponse;
    }

    ErrorType::Other
}

fn classify_status(code: u16) -> ErrorType {
    match code {
        404 => ErrorType::NotFound,
        429 => ErrorType::RateLimited,
        500..=599 => ErrorType::ServerError,
        _ => ErrorType::Other,
    }
}

fn api_status_code(error_msg: &str) -> Option<u16> {
    let rest = error_msg.split("api error (").nth(1)?;
    rest.get(..3)?.parse().ok()
}

/// Short toast title for an error class
pub fn error_summary(error_type: &ErrorType) -> &'static str {
    match error_type {
        ErrorType::ConnectionRefused => "Connection refused",
        ErrorType::Timeout => "Request timed out",
        ErrorType::NotFound => "Page not found",
        ErrorType::RateLimited => "Rate limited",
        ErrorType::ServerError => "Server error",
        ErrorType::NetworkError => "Network error",
        ErrorType::InvalidResponse => "Invalid response",
        ErrorType::Other => "Failed to fetch artworks",
    }
}

/// Format error message for display - show raw error details
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    // If no reqwest error found, walk the chain to get the deepest (root cause) error
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}
