//! GraphQL object types.

use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use catalog_core::{Brand, BrandId, Item};
use catalog_store::CatalogStore;

/// This is a brand
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
#[graphql(name = "Brand")]
pub struct BrandObject {
    pub id: i32,
    pub name: String,
}

/// This is an item
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
#[graphql(name = "Item", complex)]
pub struct ItemObject {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub brand_id: i32,
}

#[ComplexObject]
impl ItemObject {
    /// The brand this item belongs to; null when `brandId` matches no brand.
    async fn brand(&self, ctx: &Context<'_>) -> Result<Option<BrandObject>> {
        let store = ctx.data::<CatalogStore>()?;
        Ok(store.brand(BrandId(self.brand_id)).await.map(BrandObject::from))
    }
}

impl From<Brand> for BrandObject {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id.0,
            name: brand.name,
        }
    }
}

impl From<Item> for ItemObject {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.0,
            name: item.name,
            price: item.price,
            brand_id: item.brand_id.0,
        }
    }
}
