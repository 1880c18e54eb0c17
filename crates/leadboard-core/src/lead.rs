use serde::{Deserialize, Serialize};

/// A canonical sales lead, normalized from one spreadsheet row.
///
/// ## Field conventions
///
/// Every field is a `String` and is always present: unresolved source
/// columns become empty strings rather than `None`, so downstream display
/// code never branches on optionality. Numeric-looking fields (`m2`,
/// `cajas`, `precio_caja`, `eq_m2_por_caja`, `total_estimado`) stay
/// strings at this layer; consumers parse on demand (see
/// [`crate::format::format_currency`]).
///
/// Field names follow the sheet's Spanish column vocabulary; the wire
/// shape is camelCase to match what the dashboard frontend consumes.
///
/// A `Lead` is created only by the normalizer in `leadboard-sheet`, is
/// never mutated afterwards, and is discarded when a fresh fetch replaces
/// the in-memory snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Submission timestamp as received from the sheet (opaque date-like
    /// string; parsed only for time-series bucketing).
    pub timestamp: String,
    /// Customer name.
    pub nombre: String,
    /// Customer phone number.
    pub telefono: String,
    /// Acquisition channel (e.g. `"Instagram"`).
    pub canal: String,
    /// Product the inquiry is about.
    pub producto: String,
    pub categoria: String,
    pub subcategoria: String,
    /// Requested area in square meters, as a string.
    pub m2: String,
    /// Box count, as a string.
    pub cajas: String,
    /// Price per box, as a string.
    pub precio_caja: String,
    /// Area-per-box ratio, as a string.
    pub eq_m2_por_caja: String,
    /// Estimated quote total, as a string.
    pub total_estimado: String,
    /// Link to the source message or product image.
    pub link_imagen: String,
}

/// Selector for the `Lead` fields that aggregation and faceting group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Canal,
    Producto,
    Categoria,
}

impl LeadField {
    /// Returns the selected field's value on `lead`.
    #[must_use]
    pub fn value(self, lead: &Lead) -> &str {
        match self {
            LeadField::Canal => &lead.canal,
            LeadField::Producto => &lead.producto,
            LeadField::Categoria => &lead.categoria,
        }
    }
}
