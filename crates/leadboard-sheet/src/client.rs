use std::time::Duration;

use reqwest::{header, StatusCode};
use serde_json::Value;

use crate::error::SheetError;

/// HTTP client for the Apps Script web-app endpoint that exports the lead
/// sheet as a JSON array.
///
/// Apps Script does not serve the body directly: it answers the first GET
/// with a 302 to a one-time `googleusercontent.com` URL. The deployment's
/// fetch environment does not auto-follow, so the client is built with
/// redirects disabled and follows exactly one level by hand, keeping the
/// hop observable in traces.
pub struct SheetClient {
    client: reqwest::Client,
}

impl SheetClient {
    /// Creates a `SheetClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SheetError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw JSON payload from `url`, manually following at most
    /// one 301/302 redirect.
    ///
    /// # Errors
    ///
    /// - [`SheetError::MissingLocation`] — redirect without a `Location` header.
    /// - [`SheetError::RedirectLoop`] — the redirect target redirected again.
    /// - [`SheetError::UnexpectedStatus`] — non-2xx final status.
    /// - [`SheetError::Deserialize`] — body is not valid JSON.
    /// - [`SheetError::Http`] — network or TLS failure.
    pub async fn fetch_raw(&self, url: &str) -> Result<Value, SheetError> {
        let response = self.get(url).await?;

        let response = if is_sheet_redirect(response.status()) {
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
                .ok_or_else(|| SheetError::MissingLocation {
                    url: url.to_owned(),
                })?;
            tracing::debug!(from = url, to = %location, "following sheet redirect");

            let redirected = self.get(&location).await?;
            if redirected.status().is_redirection() {
                return Err(SheetError::RedirectLoop { url: location });
            }
            redirected
        } else {
            response
        };

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "sheet payload received");
        serde_json::from_str(&body).map_err(|e| SheetError::Deserialize {
            context: format!("sheet payload from {url}"),
            source: e,
        })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, SheetError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        Ok(response)
    }
}

/// Only 301/302 get the manual follow; Apps Script emits nothing else,
/// and any other 3xx is reported as an unexpected status.
fn is_sheet_redirect(status: StatusCode) -> bool {
    status == StatusCode::MOVED_PERMANENTLY || status == StatusCode::FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_redirect_statuses() {
        assert!(is_sheet_redirect(StatusCode::MOVED_PERMANENTLY));
        assert!(is_sheet_redirect(StatusCode::FOUND));
        assert!(!is_sheet_redirect(StatusCode::SEE_OTHER));
        assert!(!is_sheet_redirect(StatusCode::TEMPORARY_REDIRECT));
        assert!(!is_sheet_redirect(StatusCode::OK));
    }
}
