//! Fixed records loaded at process start.

use catalog_core::{Brand, BrandId, Item, ItemId};

const ITEMS: &[(i32, &str, &str, i32)] = &[
    (1, "Hoodie", "$29.99", 1),
    (2, "T-Shirt", "$19.99", 1),
    (3, "Trouser", "$14.99", 2),
    (4, "Hoodie", "$29.99", 3),
    (5, "Sneaker", "$99.99", 1),
    (6, "Pants", "$44.99", 1),
];

const BRANDS: &[(i32, &str)] = &[(1, "nike"), (2, "Tommy Hilfiger"), (3, "Levis")];

pub fn items() -> Vec<Item> {
    ITEMS
        .iter()
        .map(|&(id, name, price, brand_id)| Item {
            id: ItemId(id),
            name: name.to_string(),
            price: price.to_string(),
            brand_id: BrandId(brand_id),
        })
        .collect()
}

pub fn brands() -> Vec<Brand> {
    BRANDS
        .iter()
        .map(|&(id, name)| Brand {
            id: BrandId(id),
            name: name.to_string(),
        })
        .collect()
}
