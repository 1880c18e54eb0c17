//! Client-driven filtering and facet derivation over a lead snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Lead;

/// Sentinel select value meaning "no filter", as sent by the dashboard's
/// select controls.
pub const ALL: &str = "all";

/// Conjunction of the dashboard's filter controls. Every member is
/// optional; `None`, an empty string, and the [`ALL`] sentinel all mean
/// "match everything" for that predicate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadFilter {
    /// Free-text search: case-insensitive substring of the name, or
    /// case-sensitive substring of the phone number.
    pub search: Option<String>,
    pub canal: Option<String>,
    pub producto: Option<String>,
    pub categoria: Option<String>,
}

/// Distinct filter options, derived from the *unfiltered* snapshot so the
/// dashboard's select controls never shrink as filters are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub canales: Vec<String>,
    pub productos: Vec<String>,
    pub categorias: Vec<String>,
}

impl LeadFilter {
    /// Whether `lead` satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, lead: &Lead) -> bool {
        self.matches_search(lead)
            && select_matches(self.canal.as_deref(), &lead.canal)
            && select_matches(self.producto.as_deref(), &lead.producto)
            && select_matches(self.categoria.as_deref(), &lead.categoria)
    }

    fn matches_search(&self, lead: &Lead) -> bool {
        let Some(search) = self.search.as_deref() else {
            return true;
        };
        if search.is_empty() {
            return true;
        }
        lead.nombre.to_lowercase().contains(&search.to_lowercase())
            || lead.telefono.contains(search)
    }
}

fn select_matches(wanted: Option<&str>, value: &str) -> bool {
    match wanted {
        None => true,
        Some(w) if w.is_empty() || w == ALL => true,
        Some(w) => w == value,
    }
}

/// Applies `filter` to `leads`, preserving input order.
#[must_use]
pub fn apply(leads: &[Lead], filter: &LeadFilter) -> Vec<Lead> {
    leads
        .iter()
        .filter(|lead| filter.matches(lead))
        .cloned()
        .collect()
}

/// Derives the filter facet lists from a snapshot, first-seen order,
/// skipping empty values.
#[must_use]
pub fn facets(leads: &[Lead]) -> Facets {
    Facets {
        canales: distinct(leads, |l| &l.canal),
        productos: distinct(leads, |l| &l.producto),
        categorias: distinct(leads, |l| &l.categoria),
    }
}

fn distinct<'a>(leads: &'a [Lead], get: impl Fn(&'a Lead) -> &'a str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for lead in leads {
        let value = get(lead);
        if !value.is_empty() && seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}
