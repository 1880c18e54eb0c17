//! Normalization from raw sheet rows to canonical [`Lead`] records.

use leadboard_core::Lead;
use serde_json::Value;

use crate::fields;
use crate::resolve::{resolve_field, RawRecord};

/// Maps the raw export payload into canonical leads.
///
/// Fails soft on every shape problem: a non-array payload yields an empty
/// vec, and a row missing columns resolves those fields to empty strings
/// rather than being dropped. Rows with neither a timestamp nor a name
/// are blank template rows from the spreadsheet and are skipped. Input
/// order is preserved.
#[must_use]
pub fn normalize_rows(payload: &Value) -> Vec<Lead> {
    let Some(rows) = payload.as_array() else {
        tracing::warn!("sheet payload is not an array; treating as empty");
        return Vec::new();
    };

    let mut leads = Vec::with_capacity(rows.len());
    let mut dropped = 0_usize;
    for row in rows {
        match normalize_row(row) {
            Some(lead) => leads.push(lead),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, kept = leads.len(), "skipped blank sheet rows");
    }
    leads
}

fn normalize_row(row: &Value) -> Option<Lead> {
    let record: &RawRecord = row.as_object()?;

    let timestamp = resolve_field(record, fields::TIMESTAMP);
    let nombre = resolve_field(record, fields::NOMBRE);
    // A row with neither is an empty form submission or filler row.
    if timestamp.is_empty() && nombre.is_empty() {
        return None;
    }

    Some(Lead {
        timestamp,
        nombre,
        telefono: resolve_field(record, fields::TELEFONO),
        canal: resolve_field(record, fields::CANAL),
        producto: resolve_field(record, fields::PRODUCTO),
        categoria: resolve_field(record, fields::CATEGORIA),
        subcategoria: resolve_field(record, fields::SUBCATEGORIA),
        m2: resolve_field(record, fields::M2),
        cajas: resolve_field(record, fields::CAJAS),
        precio_caja: resolve_field(record, fields::PRECIO_CAJA),
        eq_m2_por_caja: resolve_field(record, fields::EQ_M2_POR_CAJA),
        total_estimado: resolve_field(record, fields::TOTAL_ESTIMADO),
        link_imagen: resolve_field(record, fields::LINK_IMAGEN),
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
