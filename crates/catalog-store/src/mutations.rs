//! Write operations for the catalog tables.
//!
//! Each operation holds the write lock for its whole read-modify-write, so
//! concurrent creates never share an id. Update and delete of a missing id
//! fail with `NotFound` and leave the table untouched.

use catalog_core::{Brand, BrandId, BrandInput, Item, ItemId, ItemInput, Result};

use crate::store::CatalogStore;

impl CatalogStore {
    // ── Items ────────────────────────────────────────────────────

    /// Append a new item under a freshly allocated id.
    pub async fn add_item(&self, input: ItemInput) -> Result<Item> {
        let mut tables = self.write().await;
        let id = tables.allocate_item_id()?;
        let item = input.into_item(id);
        tables.items.push(item.clone());

        tracing::debug!(item_id = %id, brand_id = %item.brand_id, "Item added");
        Ok(item)
    }

    /// Replace the item with the given id, keeping its position.
    pub async fn update_item(&self, id: ItemId, input: ItemInput) -> Result<Item> {
        let mut tables = self.write().await;
        let pos = tables.item_position(id)?;
        let item = input.into_item(id);
        tables.items[pos] = item.clone();

        tracing::debug!(item_id = %id, "Item updated");
        Ok(item)
    }

    /// Remove the item with the given id and return the remaining items.
    pub async fn delete_item(&self, id: ItemId) -> Result<Vec<Item>> {
        let mut tables = self.write().await;
        let pos = tables.item_position(id)?;
        tables.items.remove(pos);

        tracing::debug!(item_id = %id, remaining = tables.items.len(), "Item deleted");
        Ok(tables.items.clone())
    }

    // ── Brands ───────────────────────────────────────────────────

    /// Append a new brand under a freshly allocated id.
    pub async fn add_brand(&self, input: BrandInput) -> Result<Brand> {
        let mut tables = self.write().await;
        let id = tables.allocate_brand_id()?;
        let brand = input.into_brand(id);
        tables.brands.push(brand.clone());

        tracing::debug!(brand_id = %id, "Brand added");
        Ok(brand)
    }

    /// Replace the brand with the given id, keeping its position.
    pub async fn update_brand(&self, id: BrandId, input: BrandInput) -> Result<Brand> {
        let mut tables = self.write().await;
        let pos = tables.brand_position(id)?;
        let brand = input.into_brand(id);
        tables.brands[pos] = brand.clone();

        tracing::debug!(brand_id = %id, "Brand updated");
        Ok(brand)
    }

    /// Remove the brand with the given id and return the remaining brands.
    ///
    /// Items referencing the brand are kept; their `brand` relation resolves
    /// to nothing afterwards.
    pub async fn delete_brand(&self, id: BrandId) -> Result<Vec<Brand>> {
        let mut tables = self.write().await;
        let pos = tables.brand_position(id)?;
        tables.brands.remove(pos);

        tracing::debug!(brand_id = %id, remaining = tables.brands.len(), "Brand deleted");
        Ok(tables.brands.clone())
    }
}
