use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use leadboard_core::{
    filter::{self, LeadFilter},
    metrics, Lead,
};
use serde::Serialize;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct LeadsBody {
    leads: Vec<Lead>,
}

#[derive(Debug, Serialize)]
pub(super) struct RefreshBody {
    count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SummaryBody {
    #[serde(flatten)]
    summary: metrics::LeadSummary,
    series: Vec<metrics::DailyPoint>,
    facets: filter::Facets,
}

/// `GET /api/v1/leads`: fetches the sheet, swaps the snapshot, and
/// returns the (optionally filtered) collection.
///
/// Every dashboard load re-fetches, matching the sheet-as-source-of-truth
/// model; soft upstream failures come back as an empty collection, only a
/// network-level failure produces the error banner.
pub(super) async fn list_leads(
    State(state): State<AppState>,
    Query(query): Query<LeadFilter>,
) -> Result<Json<LeadsBody>, ApiError> {
    let snapshot = fetch_and_store(&state).await?;
    let leads = filter::apply(&snapshot, &query);
    Ok(Json(LeadsBody { leads }))
}

/// `GET /api/v1/leads/summary`: aggregates over the last fetched
/// snapshot. Metrics and the chart series honor the same filter params as
/// the list; facets always come from the unfiltered snapshot so filter
/// options never shrink as filters are applied.
pub(super) async fn lead_summary(
    State(state): State<AppState>,
    Query(query): Query<LeadFilter>,
) -> Json<SummaryBody> {
    let snapshot = state.store.snapshot().await;
    let filtered = filter::apply(&snapshot, &query);

    Json(SummaryBody {
        summary: metrics::summarize(&filtered),
        series: metrics::daily_series(&filtered),
        facets: filter::facets(&snapshot),
    })
}

/// `POST /api/v1/leads/refresh`: explicit re-fetch, responding with the
/// new snapshot size.
pub(super) async fn refresh_leads(
    State(state): State<AppState>,
) -> Result<Json<RefreshBody>, ApiError> {
    let snapshot = fetch_and_store(&state).await?;
    Ok(Json(RefreshBody {
        count: snapshot.len(),
    }))
}

/// Fetches from the gateway and atomically replaces the stored snapshot.
/// Concurrent calls are last-write-wins.
async fn fetch_and_store(state: &AppState) -> Result<Arc<Vec<Lead>>, ApiError> {
    let leads = leadboard_sheet::load_leads(&state.sheet, &state.config)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "sheet fetch failed");
            ApiError::internal("failed to fetch leads from the sheet")
        })?;
    state.store.replace(leads).await;
    Ok(state.store.snapshot().await)
}
