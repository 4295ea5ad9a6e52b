use async_graphql::{Context, Object, Result};

use catalog_core::{BrandId, ItemId};
use catalog_store::CatalogStore;

use super::types::{BrandObject, ItemObject};

/// Root Query
#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// An item
    async fn item(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<ItemObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = ctx.data::<CatalogStore>()?;
        Ok(store.item(ItemId(id)).await.map(ItemObject::from))
    }

    /// List of items
    async fn items(&self, ctx: &Context<'_>) -> Result<Vec<ItemObject>> {
        let store = ctx.data::<CatalogStore>()?;
        Ok(store.items().await.into_iter().map(ItemObject::from).collect())
    }

    /// A brand
    async fn brand(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<BrandObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = ctx.data::<CatalogStore>()?;
        Ok(store.brand(BrandId(id)).await.map(BrandObject::from))
    }

    /// List of brands
    async fn brands(&self, ctx: &Context<'_>) -> Result<Vec<BrandObject>> {
        let store = ctx.data::<CatalogStore>()?;
        Ok(store.brands().await.into_iter().map(BrandObject::from).collect())
    }
}
