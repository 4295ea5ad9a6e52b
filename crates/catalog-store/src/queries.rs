//! Read operations over the catalog tables.

use catalog_core::{Brand, BrandId, Item, ItemId};

use crate::store::CatalogStore;

impl CatalogStore {
    // ── Single Record Lookups ────────────────────────────────────

    /// First item with the given id, if any.
    pub async fn item(&self, id: ItemId) -> Option<Item> {
        let tables = self.read().await;
        tables.items.iter().find(|item| item.id == id).cloned()
    }

    /// First brand with the given id, if any.
    pub async fn brand(&self, id: BrandId) -> Option<Brand> {
        let tables = self.read().await;
        tables.brands.iter().find(|brand| brand.id == id).cloned()
    }

    // ── List Queries ─────────────────────────────────────────────

    /// All items in insertion order.
    pub async fn items(&self) -> Vec<Item> {
        self.read().await.items.clone()
    }

    /// All brands in insertion order.
    pub async fn brands(&self) -> Vec<Brand> {
        self.read().await.brands.clone()
    }

    /// Number of stored items and brands.
    pub async fn counts(&self) -> (usize, usize) {
        let tables = self.read().await;
        (tables.items.len(), tables.brands.len())
    }
}
