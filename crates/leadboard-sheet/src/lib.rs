//! Data source gateway for the lead sheet.
//!
//! Fetches the Apps Script JSON export ([`client`]), resolves the export's
//! inconsistent column keys ([`resolve`] over the [`fields`] catalogue),
//! and normalizes rows into canonical [`leadboard_core::Lead`] records
//! ([`normalize`]). [`service::load_leads`] ties the pieces together with
//! the dashboard's soft-failure policy.

pub mod client;
pub mod error;
pub mod fields;
pub mod normalize;
pub mod resolve;
pub mod service;

pub use client::SheetClient;
pub use error::SheetError;
pub use normalize::normalize_rows;
pub use resolve::RawRecord;
pub use service::load_leads;
