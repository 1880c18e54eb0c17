//! Raw-key alias catalogue for the sheet export.
//!
//! ## Observed shape from the live export
//!
//! ### Column keys
//! The form builder writes the contact columns as `user_name` and
//! `phone_number`, while the sales team's derived columns use Spanish
//! headers (`canal`, `producto`, ...). Later sheet revisions renamed the
//! link column from `link_origen` to `link_imagen`; rows from both eras
//! coexist in one export, so both keys alias the same canonical field.
//!
//! ### Trailing whitespace
//! The export tooling is inconsistent about trailing whitespace in column
//! headers: `"m2 "` and `"m2"` both occur. The resolver (not this
//! catalogue) handles the whitespace variants, so aliases here are always
//! the trimmed spelling.
//!
//! Aliases are tried in order; the first key that resolves to a non-empty
//! value wins.

pub const TIMESTAMP: &[&str] = &["timestamp"];
pub const NOMBRE: &[&str] = &["user_name", "nombre"];
pub const TELEFONO: &[&str] = &["phone_number", "telefono"];
pub const CANAL: &[&str] = &["canal"];
pub const PRODUCTO: &[&str] = &["producto"];
pub const CATEGORIA: &[&str] = &["categoria"];
pub const SUBCATEGORIA: &[&str] = &["subcategoria"];
pub const M2: &[&str] = &["m2"];
pub const CAJAS: &[&str] = &["cajas"];
pub const PRECIO_CAJA: &[&str] = &["precio_por_caja"];
pub const EQ_M2_POR_CAJA: &[&str] = &["eq_m2_por_caja"];
pub const TOTAL_ESTIMADO: &[&str] = &["total_estimado"];
pub const LINK_IMAGEN: &[&str] = &["link_origen", "link_imagen"];
