//! Fetch-and-normalize orchestration with the dashboard's soft-failure
//! policy.

use leadboard_core::{AppConfig, Lead};

use crate::client::SheetClient;
use crate::error::SheetError;
use crate::normalize::normalize_rows;

/// Fetches the sheet and normalizes it into leads.
///
/// Recoverable conditions degrade to an empty collection with a warning
/// instead of an error: endpoint not configured, unexpected HTTP status
/// after redirect handling, and malformed payloads all render as "no
/// data" in the dashboard. Only a network-level failure propagates, so
/// the caller can surface "could not reach the source at all" distinctly.
///
/// # Errors
///
/// Returns [`SheetError::Http`] when the request itself fails.
pub async fn load_leads(
    client: &SheetClient,
    config: &AppConfig,
) -> Result<Vec<Lead>, SheetError> {
    let Some(url) = config.sheet_url.as_deref() else {
        tracing::warn!("LEADBOARD_SHEET_URL is not configured; returning no leads");
        return Ok(Vec::new());
    };

    match client.fetch_raw(url).await {
        Ok(payload) => {
            let leads = normalize_rows(&payload);
            tracing::info!(count = leads.len(), "leads loaded from sheet");
            Ok(leads)
        }
        Err(SheetError::Http(e)) => Err(SheetError::Http(e)),
        Err(e) => {
            tracing::warn!(error = %e, "sheet fetch degraded to an empty collection");
            Ok(Vec::new())
        }
    }
}
