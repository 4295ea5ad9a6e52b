//! Shared store handle and the tables behind it.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{Brand, BrandId, CatalogError, EntityKind, Item, ItemId};

/// Both collections plus their id sequences.
///
/// Sequences only move forward, so an id freed by a delete is never handed
/// out again.
#[derive(Debug)]
pub(crate) struct Tables {
    pub(crate) items: Vec<Item>,
    pub(crate) brands: Vec<Brand>,
    next_item_id: Option<i32>,
    next_brand_id: Option<i32>,
}

impl Tables {
    fn new(items: Vec<Item>, brands: Vec<Brand>) -> Self {
        let next_item_id = first_free(items.iter().map(|i| i.id.0));
        let next_brand_id = first_free(brands.iter().map(|b| b.id.0));
        Self {
            items,
            brands,
            next_item_id,
            next_brand_id,
        }
    }

    pub(crate) fn allocate_item_id(&mut self) -> Result<ItemId, CatalogError> {
        let id = self.next_item_id.ok_or(CatalogError::IdExhausted {
            entity: EntityKind::Item,
        })?;
        self.next_item_id = id.checked_add(1);
        Ok(ItemId(id))
    }

    pub(crate) fn allocate_brand_id(&mut self) -> Result<BrandId, CatalogError> {
        let id = self.next_brand_id.ok_or(CatalogError::IdExhausted {
            entity: EntityKind::Brand,
        })?;
        self.next_brand_id = id.checked_add(1);
        Ok(BrandId(id))
    }

    pub(crate) fn item_position(&self, id: ItemId) -> Result<usize, CatalogError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CatalogError::NotFound {
                entity: EntityKind::Item,
                id: id.0,
            })
    }

    pub(crate) fn brand_position(&self, id: BrandId) -> Result<usize, CatalogError> {
        self.brands
            .iter()
            .position(|brand| brand.id == id)
            .ok_or(CatalogError::NotFound {
                entity: EntityKind::Brand,
                id: id.0,
            })
    }
}

/// First id above every existing one, never below 1. `None` once the
/// sequence has passed `i32::MAX`.
fn first_free(ids: impl Iterator<Item = i32>) -> Option<i32> {
    ids.max().unwrap_or(0).max(0).checked_add(1)
}

/// Thread-safe in-memory catalog store.
///
/// This is the single point of access for all catalog operations.
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct CatalogStore {
    tables: Arc<RwLock<Tables>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::from_records(Vec::new(), Vec::new())
    }

    /// A store holding the fixed seed records.
    pub fn seeded() -> Self {
        let store = Self::from_records(crate::seed::items(), crate::seed::brands());
        tracing::info!("Catalog store seeded");
        store
    }

    /// A store holding the given records, in order.
    pub fn from_records(items: Vec<Item>, brands: Vec<Brand>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::new(items, brands))),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
