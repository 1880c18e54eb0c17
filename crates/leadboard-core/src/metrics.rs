//! Display aggregates derived from a lead snapshot.
//!
//! All functions here are pure: they take `&[Lead]` and return owned
//! values, so the server can recompute them on every request against the
//! current snapshot without coordination.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::{Lead, LeadField};

/// Sentinel returned by [`top_value`] when no grouping value can win.
pub const NO_VALUE: &str = "N/A";

/// Number of trailing day buckets kept in the chart series.
const SERIES_CAP: usize = 30;

/// Spanish three-letter month abbreviations, indexed by `month0`, matching
/// the dashboard's display locale.
const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// One day bucket of the leads-per-day chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    /// Display label, `"DD mmm"` (e.g. `"05 ene"`). The year is dropped
    /// from the label only; ordering is computed on the full date.
    pub label: String,
    pub count: u64,
}

/// Headline metrics shown at the top of the dashboard. Recomputed from the
/// (possibly filtered) snapshot on every request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSummary {
    pub total: u64,
    pub top_producto: String,
    pub top_categoria: String,
}

/// Returns the most frequent value of `field` across `leads`.
///
/// Single left-to-right scan; the winner is the first value to reach the
/// maximum count, so the result is deterministic under insertion order.
/// Empty-string values never win. Empty input, or input where every value
/// of `field` is empty, yields [`NO_VALUE`].
#[must_use]
pub fn top_value(leads: &[Lead], field: LeadField) -> String {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut best: Option<(&str, u64)> = None;

    for lead in leads {
        let value = field.value(lead);
        if value.is_empty() {
            continue;
        }
        let count = counts.entry(value).or_insert(0);
        *count += 1;
        match best {
            Some((_, max)) if *count <= max => {}
            _ => best = Some((value, *count)),
        }
    }

    best.map_or_else(|| NO_VALUE.to_string(), |(value, _)| value.to_string())
}

/// Buckets `leads` by calendar day and returns the chart series,
/// chronological ascending, capped to the most recent [`SERIES_CAP`] days.
///
/// Leads whose timestamp does not parse are excluded from the series (the
/// count is debug-logged, never an error). Buckets are ordered by their
/// full [`NaiveDate`] and only formatted to the short `"DD mmm"` label at
/// the end, so series spanning a year boundary stay in order even though
/// the label drops the year.
#[must_use]
pub fn daily_series(leads: &[Lead]) -> Vec<DailyPoint> {
    let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    let mut skipped = 0_usize;

    for lead in leads {
        match parse_day(&lead.timestamp) {
            Some(day) => *buckets.entry(day).or_insert(0) += 1,
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "excluded leads with unparseable timestamps from daily series");
    }

    let mut points: Vec<DailyPoint> = buckets
        .into_iter()
        .map(|(day, count)| DailyPoint {
            label: day_label(day),
            count,
        })
        .collect();

    if points.len() > SERIES_CAP {
        points.drain(..points.len() - SERIES_CAP);
    }
    points
}

/// Computes the headline metrics for a lead snapshot.
#[must_use]
pub fn summarize(leads: &[Lead]) -> LeadSummary {
    LeadSummary {
        total: leads.len() as u64,
        top_producto: top_value(leads, LeadField::Producto),
        top_categoria: top_value(leads, LeadField::Categoria),
    }
}

/// Parses a sheet timestamp down to its calendar day.
///
/// Accepts RFC 3339 first (the Apps Script export format), then the
/// space-separated spreadsheet datetime, then a bare date.
fn parse_day(timestamp: &str) -> Option<NaiveDate> {
    let raw = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn day_label(day: NaiveDate) -> String {
    use chrono::Datelike;
    format!("{:02} {}", day.day(), MONTHS_ES[day.month0() as usize])
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
