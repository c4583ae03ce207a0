/// Test helper functions and use case builders
use catalog_lib::modules::category::{
    infrastructure::InMemoryCategoryStore, CreateCategoryHandler,
};
use std::sync::Arc;

pub struct TestServices {
    pub store: InMemoryCategoryStore,
    pub create_category: CreateCategoryHandler,
}

/// Build a create handler backed by a fresh in-memory store
pub fn build_test_services() -> TestServices {
    let store = InMemoryCategoryStore::new();
    let create_category = CreateCategoryHandler::new(
        Arc::new(store.repository()),
        Arc::new(store.unit_of_work()),
    );

    TestServices {
        store,
        create_category,
    }
}
