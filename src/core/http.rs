use std::time::Duration;

use reqwest::{
    header::USER_AGENT,
    Client,
    Response,
    Url,
};

use crate::core::WordbookError;

const USER_AGENT_VALUE: &str = "wordbook/0.1 (+reqwest)";

/// Builds the shared client. `None` leaves reqwest's default (no overall timeout).
pub fn http_client(timeout: Option<Duration>) -> Result<Client, WordbookError> {
    let mut builder = Client::builder().default_headers({
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(USER_AGENT, reqwest::header::HeaderValue::from_static(USER_AGENT_VALUE));
        headers
    });

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(|e| WordbookError::Custom(format!("HTTP client build failed: {e}")))
}

/// Parses and normalizes a collection endpoint such as `http://localhost:5000/words`.
pub fn parse_base_url(raw: &str) -> Result<Url, WordbookError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(WordbookError::InvalidBaseUrl("URL is empty".to_string()));
    }

    let url = Url::parse(trimmed).map_err(|e| WordbookError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(WordbookError::InvalidBaseUrl(format!("unsupported scheme '{other}'")));
        }
    }

    if url.cannot_be_a_base() {
        return Err(WordbookError::InvalidBaseUrl(trimmed.to_string()));
    }

    Ok(url)
}

/// Turns a non-2xx response into `WordbookError::Status`, keeping the server's own
/// message when the body carries one.
pub async fn ensure_success(resp: Response) -> Result<Response, WordbookError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(WordbookError::Status { status: status.as_u16(), message: status_message(status.as_u16(), &body) })
}

pub(crate) fn status_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                if !message.trim().is_empty() {
                    return message.to_string();
                }
            }
        }
    }

    format!("Request failed with status code {status}")
}
