//! Schema-level tests: GraphQL documents executed directly against the schema.

use async_graphql::{Request, Variables};
use serde_json::{json, Value};

use catalog_core::config::GraphqlConfig;
use catalog_core::{BrandId, Item, ItemId};
use catalog_server::{build_schema, schema, CatalogSchema};
use catalog_store::CatalogStore;

fn seeded_schema() -> CatalogSchema {
    build_schema(CatalogStore::seeded(), &GraphqlConfig::default())
}

async fn run(schema: &CatalogSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

async fn run_with(schema: &CatalogSchema, query: &str, vars: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(vars));
    let response = schema.execute(request).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

#[tokio::test]
async fn test_items_on_fresh_start() {
    let schema = seeded_schema();
    let data = run(&schema, "{ items { id name } }").await;

    let items = data["items"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0], json!({"id": 1, "name": "Hoodie"}));
    assert_eq!(items[5], json!({"id": 6, "name": "Pants"}));
}

#[tokio::test]
async fn test_item_with_nested_brand() {
    let schema = seeded_schema();
    let data = run(&schema, "{ item(id: 4) { name price brandId brand { id name } } }").await;

    assert_eq!(
        data["item"],
        json!({
            "name": "Hoodie",
            "price": "$29.99",
            "brandId": 3,
            "brand": {"id": 3, "name": "Levis"}
        })
    );
}

#[tokio::test]
async fn test_lookup_without_id_or_unknown_id_is_null() {
    let schema = seeded_schema();
    let data = run(
        &schema,
        "{ a: item { id } b: item(id: 40) { id } c: brand(id: null) { id } }",
    )
    .await;

    assert_eq!(data, json!({"a": null, "b": null, "c": null}));
}

#[tokio::test]
async fn test_add_item_then_query_it() {
    let schema = seeded_schema();
    let data = run_with(
        &schema,
        "mutation($name: String!, $price: String!, $brandId: Int!) {
            addItem(name: $name, price: $price, brandId: $brandId) { id name price brandId }
        }",
        json!({"name": "Beanie", "price": "$9.50", "brandId": 2}),
    )
    .await;

    let created = &data["addItem"];
    assert_eq!(created["id"], 7);

    let data = run_with(
        &schema,
        "query($id: Int) { item(id: $id) { id name price brandId } }",
        json!({"id": 7}),
    )
    .await;
    assert_eq!(&data["item"], created);
}

#[tokio::test]
async fn test_delete_item_shrinks_list_by_one() {
    let schema = seeded_schema();
    let data = run(&schema, "mutation { deleteItem(id: 2) { id } }").await;

    let remaining: Vec<i64> = data["deleteItem"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(remaining, [1, 3, 4, 5, 6]);

    let data = run(&schema, "{ items { id } }").await;
    assert_eq!(data["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_update_brand_only_touches_target() {
    let schema = seeded_schema();
    let data = run(&schema, r#"mutation { updateBrand(id: 1, name: "Nike") { id name } }"#).await;
    assert_eq!(data["updateBrand"], json!({"id": 1, "name": "Nike"}));

    let data = run(&schema, "{ brands { id name } }").await;
    assert_eq!(
        data["brands"],
        json!([
            {"id": 1, "name": "Nike"},
            {"id": 2, "name": "Tommy Hilfiger"},
            {"id": 3, "name": "Levis"}
        ])
    );
}

#[tokio::test]
async fn test_update_item_replaces_all_fields() {
    let schema = seeded_schema();
    let data = run(
        &schema,
        r#"mutation { updateItem(id: 5, name: "Runner", price: "$89.99", brandId: 2) {
            id name price brand { name }
        } }"#,
    )
    .await;

    assert_eq!(
        data["updateItem"],
        json!({"id": 5, "name": "Runner", "price": "$89.99", "brand": {"name": "Tommy Hilfiger"}})
    );
}

#[tokio::test]
async fn test_dangling_brand_resolves_to_null() {
    let orphan = Item {
        id: ItemId(1),
        name: "Orphan".to_string(),
        price: "$1.00".to_string(),
        brand_id: BrandId(99),
    };
    let store = CatalogStore::from_records(vec![orphan], Vec::new());
    let schema = build_schema(store, &GraphqlConfig::default());

    let data = run(&schema, "{ item(id: 1) { brandId brand { name } } }").await;
    assert_eq!(data["item"], json!({"brandId": 99, "brand": null}));
}

#[tokio::test]
async fn test_add_and_update_with_unknown_brand_succeed() {
    let schema = seeded_schema();
    let data = run(
        &schema,
        r#"mutation { addItem(name: "Scarf", price: "$5.00", brandId: 99) {
            id brandId brand { name }
        } }"#,
    )
    .await;
    assert_eq!(data["addItem"], json!({"id": 7, "brandId": 99, "brand": null}));

    let data = run(
        &schema,
        r#"mutation { updateItem(id: 1, name: "Hoodie", price: "$29.99", brandId: 42) {
            id brandId brand { name }
        } }"#,
    )
    .await;
    assert_eq!(data["updateItem"], json!({"id": 1, "brandId": 42, "brand": null}));

    let data = run(&schema, "{ items { id } }").await;
    assert_eq!(data["items"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_missing_record_mutations_report_not_found() {
    let schema = seeded_schema();

    for query in [
        "mutation { deleteItem(id: 50) { id } }",
        "mutation { deleteBrand(id: 50) { id } }",
        r#"mutation { updateItem(id: 50, name: "x", price: "y", brandId: 1) { id } }"#,
        r#"mutation { updateBrand(id: 50, name: "x") { id } }"#,
    ] {
        let response = schema.execute(query).await;
        assert_eq!(response.errors.len(), 1, "{query}");

        let err = serde_json::to_value(&response.errors[0]).unwrap();
        assert_eq!(err["extensions"]["code"], "NOT_FOUND", "{query}");
    }

    let data = run(&schema, "{ items { id } brands { id } }").await;
    assert_eq!(data["items"].as_array().unwrap().len(), 6);
    assert_eq!(data["brands"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_add_brand_after_delete_gets_fresh_id() {
    let schema = seeded_schema();
    run(&schema, "mutation { deleteBrand(id: 3) { id } }").await;
    let data = run(&schema, r#"mutation { addBrand(name: "Uniqlo") { id name } }"#).await;

    assert_eq!(data["addBrand"], json!({"id": 4, "name": "Uniqlo"}));
}

#[tokio::test]
async fn test_missing_required_argument_is_rejected() {
    let schema = seeded_schema();
    let response = schema.execute(r#"mutation { addBrand { id } }"#).await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn test_depth_limit_applies() {
    let config = GraphqlConfig {
        max_depth: 2,
        ..GraphqlConfig::default()
    };
    let schema = build_schema(CatalogStore::seeded(), &config);
    let response = schema.execute("{ items { brand { name } } }").await;
    assert!(!response.errors.is_empty());
}

#[test]
fn test_sdl_describes_types() {
    let sdl = schema::sdl();
    assert!(sdl.contains("type Item"));
    assert!(sdl.contains("type Brand"));
    assert!(sdl.contains("This is an item"));
    assert!(sdl.contains("brandId: Int!"));
    assert!(sdl.contains("type Mutation"));
    assert!(sdl.contains("items: [Item!]!"));
    assert!(sdl.contains("brands: [Brand!]!"));
    assert!(sdl.contains("brand: Brand\n"));
}
