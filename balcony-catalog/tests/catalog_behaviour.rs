#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for loading plant catalogs.

use std::cell::RefCell;

use balcony_catalog::{CatalogError, PlantCatalog};
use balcony_core::test_support::sample_profile;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct CatalogWorld {
    json: RefCell<String>,
    catalog: RefCell<Option<PlantCatalog>>,
    error: RefCell<Option<CatalogError>>,
}

#[fixture]
fn world() -> CatalogWorld {
    CatalogWorld::default()
}

#[given("the built-in catalog")]
fn builtin_catalog(#[from(world)] world: &CatalogWorld) {
    world.catalog.replace(Some(PlantCatalog::builtin().clone()));
}

#[given("a catalog JSON with {id} listed twice")]
fn duplicate_json(#[from(world)] world: &CatalogWorld, id: String) {
    let plants = vec![sample_profile(&id), sample_profile(&id)];
    let json = serde_json::to_string(&plants).expect("serialise duplicate profiles");
    world.json.replace(json);
}

#[given("catalog JSON that is not an array")]
fn object_json(#[from(world)] world: &CatalogWorld) {
    world.json.replace(String::from(r#"{"id": "basil"}"#));
}

#[when("I load the catalog")]
fn load_catalog(#[from(world)] world: &CatalogWorld) {
    match PlantCatalog::from_json_reader(world.json.borrow().as_bytes()) {
        Ok(catalog) => {
            world.catalog.replace(Some(catalog));
        }
        Err(err) => {
            world.error.replace(Some(err));
        }
    }
}

#[then("the catalog lists {count} plants")]
fn catalog_lists(#[from(world)] world: &CatalogWorld, count: usize) {
    let borrowed = world.catalog.borrow();
    let catalog = borrowed.as_ref().expect("catalog loaded");
    assert_eq!(catalog.len(), count);
}

#[then("the first plant is {id}")]
fn first_plant(#[from(world)] world: &CatalogWorld, id: String) {
    let borrowed = world.catalog.borrow();
    let catalog = borrowed.as_ref().expect("catalog loaded");
    let first = catalog.iter().next().expect("catalog has entries");
    assert_eq!(first.id, id);
}

#[then("loading fails because {id} is duplicated")]
fn fails_duplicate(#[from(world)] world: &CatalogWorld, id: String) {
    let borrowed = world.error.borrow();
    let err = borrowed.as_ref().expect("loading failed");
    let CatalogError::DuplicateId { id: duplicate } = err else {
        panic!("expected duplicate id error, got {err:?}");
    };
    assert_eq!(duplicate, &id);
}

#[then("loading fails with a parse error")]
fn fails_parse(#[from(world)] world: &CatalogWorld) {
    let borrowed = world.error.borrow();
    let err = borrowed.as_ref().expect("loading failed");
    assert!(matches!(err, CatalogError::Parse { .. }), "{err:?}");
}

#[scenario(path = "tests/features/catalog.feature", index = 0)]
fn loads_builtin(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 1)]
fn rejects_duplicates(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 2)]
fn rejects_malformed_json(world: CatalogWorld) {
    let _ = world;
}
