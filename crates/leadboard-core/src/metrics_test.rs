use chrono::{Days, NaiveDate};

use super::*;

fn lead(timestamp: &str, producto: &str, categoria: &str) -> Lead {
    Lead {
        timestamp: timestamp.to_string(),
        nombre: "Ana".to_string(),
        telefono: "555".to_string(),
        canal: "Instagram".to_string(),
        producto: producto.to_string(),
        categoria: categoria.to_string(),
        subcategoria: String::new(),
        m2: String::new(),
        cajas: String::new(),
        precio_caja: String::new(),
        eq_m2_por_caja: String::new(),
        total_estimado: String::new(),
        link_imagen: String::new(),
    }
}

fn leads_with_productos(productos: &[&str]) -> Vec<Lead> {
    productos
        .iter()
        .map(|p| lead("2025-01-05T10:00:00Z", p, "Floor"))
        .collect()
}

// ---------------------------------------------------------------------------
// top_value
// ---------------------------------------------------------------------------

#[test]
fn top_value_empty_input_is_sentinel() {
    assert_eq!(top_value(&[], LeadField::Producto), NO_VALUE);
}

#[test]
fn top_value_singleton_returns_its_value() {
    let leads = leads_with_productos(&["Tile"]);
    assert_eq!(top_value(&leads, LeadField::Producto), "Tile");
}

#[test]
fn top_value_tie_goes_to_first_to_reach_max() {
    let leads = leads_with_productos(&["A", "B", "A", "B"]);
    assert_eq!(top_value(&leads, LeadField::Producto), "A");
}

#[test]
fn top_value_later_value_wins_with_strictly_higher_count() {
    let leads = leads_with_productos(&["A", "B", "B"]);
    assert_eq!(top_value(&leads, LeadField::Producto), "B");
}

#[test]
fn top_value_ignores_empty_values() {
    let leads = leads_with_productos(&["", "", "Tile"]);
    assert_eq!(top_value(&leads, LeadField::Producto), "Tile");
}

#[test]
fn top_value_all_empty_values_is_sentinel() {
    let leads = leads_with_productos(&["", ""]);
    assert_eq!(top_value(&leads, LeadField::Producto), NO_VALUE);
}

#[test]
fn top_value_selects_the_requested_field() {
    let leads = vec![
        lead("2025-01-05T10:00:00Z", "Tile", "Floor"),
        lead("2025-01-05T11:00:00Z", "Grout", "Wall"),
        lead("2025-01-05T12:00:00Z", "Grout", "Floor"),
    ];
    assert_eq!(top_value(&leads, LeadField::Producto), "Grout");
    assert_eq!(top_value(&leads, LeadField::Categoria), "Floor");
    assert_eq!(top_value(&leads, LeadField::Canal), "Instagram");
}

// ---------------------------------------------------------------------------
// daily_series
// ---------------------------------------------------------------------------

#[test]
fn daily_series_empty_input_is_empty() {
    assert!(daily_series(&[]).is_empty());
}

#[test]
fn daily_series_groups_leads_on_the_same_day() {
    let leads = vec![
        lead("2025-01-05T10:00:00Z", "Tile", "Floor"),
        lead("2025-01-05T18:30:00Z", "Tile", "Floor"),
        lead("2025-01-06T09:00:00Z", "Tile", "Floor"),
    ];
    let series = daily_series(&leads);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label, "05 ene");
    assert_eq!(series[0].count, 2);
    assert_eq!(series[1].label, "06 ene");
    assert_eq!(series[1].count, 1);
}

#[test]
fn daily_series_orders_across_a_year_boundary() {
    // Input deliberately out of order; labels alone ("31 dic" vs "01 ene")
    // cannot disambiguate the year.
    let leads = vec![
        lead("2025-01-01T08:00:00Z", "Tile", "Floor"),
        lead("2024-12-31T23:00:00Z", "Tile", "Floor"),
    ];
    let series = daily_series(&leads);
    assert_eq!(series[0].label, "31 dic");
    assert_eq!(series[1].label, "01 ene");
}

#[test]
fn daily_series_caps_at_thirty_most_recent_days() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
    let leads: Vec<Lead> = (0..40)
        .map(|i| {
            let day = start + Days::new(i);
            lead(&day.format("%Y-%m-%d").to_string(), "Tile", "Floor")
        })
        .collect();

    let series = daily_series(&leads);
    assert_eq!(series.len(), 30);
    // The 10 oldest days are dropped: the series starts at Jan 11.
    assert_eq!(series[0].label, "11 ene");
    assert_eq!(series[29].label, "09 feb");
}

#[test]
fn daily_series_excludes_unparseable_timestamps() {
    let leads = vec![
        lead("not-a-date", "Tile", "Floor"),
        lead("", "Tile", "Floor"),
        lead("2025-01-05T10:00:00Z", "Tile", "Floor"),
    ];
    let series = daily_series(&leads);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].count, 1);
}

#[test]
fn daily_series_accepts_spreadsheet_datetime_and_bare_date() {
    let leads = vec![
        lead("2025-01-05 10:00:00", "Tile", "Floor"),
        lead("2025-01-05", "Tile", "Floor"),
    ];
    let series = daily_series(&leads);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].count, 2);
}

#[test]
fn daily_series_labels_use_spanish_month_abbreviations() {
    let months = [
        ("2025-01-15", "15 ene"),
        ("2025-04-01", "01 abr"),
        ("2025-08-09", "09 ago"),
        ("2025-12-31", "31 dic"),
    ];
    for (date, expected) in months {
        let series = daily_series(&[lead(date, "Tile", "Floor")]);
        assert_eq!(series[0].label, expected, "for input {date}");
    }
}

// ---------------------------------------------------------------------------
// summarize
// ---------------------------------------------------------------------------

#[test]
fn summarize_empty_snapshot() {
    let summary = summarize(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.top_producto, NO_VALUE);
    assert_eq!(summary.top_categoria, NO_VALUE);
}

#[test]
fn summarize_reports_totals_and_top_values() {
    let leads = vec![
        lead("2025-01-05T10:00:00Z", "Tile", "Floor"),
        lead("2025-01-06T10:00:00Z", "Tile", "Wall"),
        lead("2025-01-07T10:00:00Z", "Grout", "Wall"),
    ];
    let summary = summarize(&leads);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.top_producto, "Tile");
    assert_eq!(summary.top_categoria, "Wall");
}
