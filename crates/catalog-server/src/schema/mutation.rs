use async_graphql::{Context, Object, Result};

use catalog_core::{BrandId, BrandInput, ItemId, ItemInput};
use catalog_store::CatalogStore;

use super::types::{BrandObject, ItemObject};
use crate::error::graphql_error;

/// Root mutation
#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add an item
    async fn add_item(
        &self,
        ctx: &Context<'_>,
        name: String,
        price: String,
        brand_id: i32,
    ) -> Result<ItemObject> {
        let store = ctx.data::<CatalogStore>()?;
        let item = store
            .add_item(ItemInput::new(name, price, BrandId(brand_id)))
            .await
            .map_err(graphql_error)?;
        Ok(item.into())
    }

    /// Add a brand
    async fn add_brand(&self, ctx: &Context<'_>, name: String) -> Result<BrandObject> {
        let store = ctx.data::<CatalogStore>()?;
        let brand = store
            .add_brand(BrandInput::new(name))
            .await
            .map_err(graphql_error)?;
        Ok(brand.into())
    }

    /// Delete an item, returning the remaining items
    async fn delete_item(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<ItemObject>> {
        let store = ctx.data::<CatalogStore>()?;
        let remaining = store.delete_item(ItemId(id)).await.map_err(graphql_error)?;
        Ok(remaining.into_iter().map(ItemObject::from).collect())
    }

    /// Delete a brand, returning the remaining brands
    async fn delete_brand(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<BrandObject>> {
        let store = ctx.data::<CatalogStore>()?;
        let remaining = store.delete_brand(BrandId(id)).await.map_err(graphql_error)?;
        Ok(remaining.into_iter().map(BrandObject::from).collect())
    }

    /// Update an item
    async fn update_item(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
        price: String,
        brand_id: i32,
    ) -> Result<ItemObject> {
        let store = ctx.data::<CatalogStore>()?;
        let item = store
            .update_item(ItemId(id), ItemInput::new(name, price, BrandId(brand_id)))
            .await
            .map_err(graphql_error)?;
        Ok(item.into())
    }

    /// Update a brand
    async fn update_brand(&self, ctx: &Context<'_>, id: i32, name: String) -> Result<BrandObject> {
        let store = ctx.data::<CatalogStore>()?;
        let brand = store
            .update_brand(BrandId(id), BrandInput::new(name))
            .await
            .map_err(graphql_error)?;
        Ok(brand.into())
    }
}
