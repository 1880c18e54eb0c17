//! In-memory lead snapshot shared across request handlers.

use std::sync::Arc;

use leadboard_core::Lead;
use tokio::sync::RwLock;

/// Holds the current lead collection.
///
/// Readers take a cheap `Arc` clone of the snapshot and compute over it
/// without holding the lock; a refresh swaps the whole vector at once, so
/// a request never observes a partially updated collection. Concurrent
/// refreshes are last-write-wins: there is no in-flight fetch
/// cancellation, and rapid repeated refreshes race benignly.
#[derive(Clone, Default)]
pub struct LeadStore {
    snapshot: Arc<RwLock<Arc<Vec<Lead>>>>,
}

impl LeadStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot. The returned `Arc` stays valid (and unchanged)
    /// even if a refresh lands while the caller is still using it.
    pub async fn snapshot(&self) -> Arc<Vec<Lead>> {
        Arc::clone(&*self.snapshot.read().await)
    }

    /// Replaces the whole collection, returning the new count.
    pub async fn replace(&self, leads: Vec<Lead>) -> usize {
        let count = leads.len();
        *self.snapshot.write().await = Arc::new(leads);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(nombre: &str) -> Lead {
        Lead {
            timestamp: "2025-01-05T10:00:00Z".to_string(),
            nombre: nombre.to_string(),
            telefono: String::new(),
            canal: String::new(),
            producto: String::new(),
            categoria: String::new(),
            subcategoria: String::new(),
            m2: String::new(),
            cajas: String::new(),
            precio_caja: String::new(),
            eq_m2_por_caja: String::new(),
            total_estimado: String::new(),
            link_imagen: String::new(),
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = LeadStore::new();
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn replace_swaps_the_whole_snapshot() {
        let store = LeadStore::new();
        assert_eq!(store.replace(vec![lead("Ana"), lead("Bruno")]).await, 2);
        assert_eq!(store.snapshot().await.len(), 2);

        assert_eq!(store.replace(vec![lead("Carla")]).await, 1);
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].nombre, "Carla");
    }

    #[tokio::test]
    async fn held_snapshots_are_unaffected_by_later_replaces() {
        let store = LeadStore::new();
        store.replace(vec![lead("Ana")]).await;
        let held = store.snapshot().await;

        store.replace(Vec::new()).await;
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].nombre, "Ana");
        assert!(store.snapshot().await.is_empty());
    }
}
