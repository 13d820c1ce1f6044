/// Request routine: builds the URL, runs one round-trip, validates the result.
use colored::Colorize;
use serde::Serialize;
use url::Url;

use crate::client::{HttpClient, HttpMethod, RawResponse};
use crate::error::ApiError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// The single result delivered for each request.
pub type Outcome = Result<String, ApiError>;

/// Issues requests against one base URL and classifies every failure mode.
///
/// Holds no state besides the base URL; the actual transport lives behind the
/// `HttpClient` trait so tests can substitute canned responses.
#[derive(Debug, Clone)]
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` and return the UTF-8 decoded body.
    pub fn fetch<C: HttpClient>(&self, client: &C, path: &str) -> Outcome {
        self.request(client, HttpMethod::Get, path, &[], None)
    }

    /// POST `payload` as JSON to `{base_url}{path}` and return the decoded body.
    pub fn post<C: HttpClient, P: Serialize>(
        &self,
        client: &C,
        path: &str,
        payload: &P,
    ) -> Outcome {
        let body =
            serde_json::to_vec(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        self.request(client, HttpMethod::Post, path, &headers, Some(body))
    }

    /// The unified request routine behind `fetch` and `post`.
    ///
    /// Validation order is fixed: URL construction, transport error, response
    /// shape, status code, empty body, UTF-8 decoding.
    pub fn request<C: HttpClient>(
        &self,
        client: &C,
        method: HttpMethod,
        path: &str,
        headers: &[(String, String)],
        body: Option<Vec<u8>>,
    ) -> Outcome {
        let url_string = format!("{}{}", self.base_url, path);
        let url =
            Url::parse(&url_string).map_err(|_| ApiError::InvalidUrl(url_string.clone()))?;

        let method_colored = match method {
            HttpMethod::Get => "GET".green().bold(),
            HttpMethod::Post => "POST".yellow().bold(),
        };
        println!("{} {}", method_colored, url_string.underline());

        let response = client.execute(method, url.as_str(), headers, body.as_deref())?;
        validate(response)
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Check status, body presence and encoding, in that order.
fn validate(response: RawResponse) -> Outcome {
    let status = response.status;
    let status_colored = if (200..=299).contains(&status) {
        format!("{}", status).green().bold()
    } else if (400..=499).contains(&status) {
        format!("{}", status).yellow().bold()
    } else if (500..=599).contains(&status) {
        format!("{}", status).red().bold()
    } else {
        format!("{}", status).white().bold()
    };
    println!("  {} {}", "Status:".dimmed(), status_colored);

    if !(200..=299).contains(&status) {
        return Err(ApiError::Http(status));
    }

    if response.body.is_empty() {
        return Err(ApiError::NoData);
    }

    let text =
        String::from_utf8(response.body).map_err(|e| ApiError::Decoding(e.to_string()))?;
    println!("  {} {} bytes", "Received:".dimmed(), text.len());
    Ok(text)
}
