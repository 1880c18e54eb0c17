//! Plain-text metrics report for the terminal.

use leadboard_core::{filter, format::format_currency, metrics, Lead};

/// Widest bar drawn for the busiest day in the series.
const BAR_WIDTH: u64 = 40;

/// Renders the dashboard metrics as a text report: headline numbers, the
/// per-day series as a bar chart, and the first `limit` leads as a table.
pub fn render(leads: &[Lead], limit: usize) -> String {
    let summary = metrics::summarize(leads);
    let series = metrics::daily_series(leads);
    let facets = filter::facets(leads);

    let mut out = String::new();
    out.push_str(&format!("total leads:   {}\n", summary.total));
    out.push_str(&format!("top product:   {}\n", summary.top_producto));
    out.push_str(&format!("top category:  {}\n", summary.top_categoria));
    out.push_str(&format!(
        "channels:      {}\n",
        if facets.canales.is_empty() {
            "-".to_string()
        } else {
            facets.canales.join(", ")
        }
    ));

    if !series.is_empty() {
        out.push_str("\nleads per day (last 30 days):\n");
        let max = series.iter().map(|p| p.count).max().unwrap_or(1).max(1);
        for point in &series {
            let bar = "#".repeat(usize::try_from(point.count * BAR_WIDTH / max).unwrap_or(0));
            out.push_str(&format!("  {}  {:<40} {}\n", point.label, bar, point.count));
        }
    }

    if !leads.is_empty() {
        out.push_str(&format!("\nfirst {} leads:\n", limit.min(leads.len())));
        for lead in leads.iter().take(limit) {
            out.push_str(&format!(
                "  {}  {}  {}  {}  {}\n",
                lead.timestamp,
                lead.nombre,
                lead.telefono,
                lead.producto,
                format_currency(&lead.total_estimado),
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(nombre: &str, producto: &str, total: &str) -> Lead {
        Lead {
            timestamp: "2025-01-05T10:00:00Z".to_string(),
            nombre: nombre.to_string(),
            telefono: "555".to_string(),
            canal: "Instagram".to_string(),
            producto: producto.to_string(),
            categoria: "Floor".to_string(),
            subcategoria: String::new(),
            m2: String::new(),
            cajas: String::new(),
            precio_caja: String::new(),
            eq_m2_por_caja: String::new(),
            total_estimado: total.to_string(),
            link_imagen: String::new(),
        }
    }

    #[test]
    fn empty_snapshot_reports_sentinels() {
        let report = render(&[], 20);
        assert!(report.contains("total leads:   0"));
        assert!(report.contains("top product:   N/A"));
        assert!(!report.contains("leads per day"));
    }

    #[test]
    fn report_includes_headline_metrics_and_series() {
        let leads = vec![
            lead("Ana", "Tile", "1500"),
            lead("Bruno", "Tile", "2000"),
            lead("Carla", "Grout", "500"),
        ];
        let report = render(&leads, 20);
        assert!(report.contains("total leads:   3"));
        assert!(report.contains("top product:   Tile"));
        assert!(report.contains("channels:      Instagram"));
        assert!(report.contains("05 ene"));
    }

    #[test]
    fn table_rows_are_capped_by_limit() {
        let leads = vec![
            lead("Ana", "Tile", "1500"),
            lead("Bruno", "Tile", "2000"),
            lead("Carla", "Grout", "500"),
        ];
        let report = render(&leads, 2);
        assert!(report.contains("first 2 leads:"));
        assert!(report.contains("Ana"));
        assert!(report.contains("Bruno"));
        assert!(!report.contains("Carla"));
    }

    #[test]
    fn totals_are_currency_formatted() {
        let leads = vec![lead("Ana", "Tile", "153005")];
        let report = render(&leads, 20);
        assert!(report.contains("$ 153.005,00"));
    }
}
