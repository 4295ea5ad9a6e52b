//! Core domain types for the catalog.
//!
//! Items and brands form a one-to-many relationship through
//! [`Item::brand_id`]. The reference is not enforced: an item may point at a
//! brand that does not exist.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Identifiers ───────────────────────────────────────────────────

/// Identifier of an [`Item`]. Wraps the GraphQL `Int` scalar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ItemId(pub i32);

/// Identifier of a [`Brand`]. Wraps the GraphQL `Int` scalar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BrandId(pub i32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which collection a record lives in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Item,
    Brand,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => f.write_str("Item"),
            Self::Brand => f.write_str("Brand"),
        }
    }
}

// ── Records ───────────────────────────────────────────────────────

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Display price, kept as formatted text (e.g. `"$29.99"`).
    pub price: String,
    pub brand_id: BrandId,
}

/// A brand owning zero or more items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

// ── Inputs ────────────────────────────────────────────────────────

/// Caller-supplied fields for creating or replacing an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub name: String,
    pub price: String,
    pub brand_id: BrandId,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, price: impl Into<String>, brand_id: BrandId) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            brand_id,
        }
    }

    /// Build the stored record under the given id.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            price: self.price,
            brand_id: self.brand_id,
        }
    }
}

/// Caller-supplied fields for creating or replacing a brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandInput {
    pub name: String,
}

impl BrandInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn into_brand(self, id: BrandId) -> Brand {
        Brand {
            id,
            name: self.name,
        }
    }
}
