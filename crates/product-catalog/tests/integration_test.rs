use product_catalog::clients::ProductStore;
use product_catalog::lifecycle::CatalogSystem;
use product_catalog::model::{Product, ProductCreate, Toast, ToastType};
use product_catalog::product_slice::{self, ProductAction, ProductFilter, ProductState};
use store_framework::{SliceClient, StoreActor};

fn create(id: &str, name: &str, is_available: bool) -> ProductCreate {
    ProductCreate {
        id: Some(id.to_string()),
        name: name.to_string(),
        is_available,
    }
}

/// Add, edit, delete with a success toast along the way.
#[tokio::test]
async fn test_end_to_end_product_lifecycle() {
    let system = CatalogSystem::new();
    let store = &system.store;
    assert!(store.products().await.unwrap().is_empty());

    let id = store
        .add_product(create("p1", "Widget", true))
        .await
        .expect("Failed to add product");
    let widget = Product::new("p1", "Widget", true);
    store
        .add_toast(Toast::success("Product added successfully...", &widget))
        .await
        .expect("Failed to add toast");

    assert_eq!(id, "p1");
    assert_eq!(store.products().await.unwrap(), vec![widget.clone()]);
    let toast = store.toast().await.unwrap().expect("Toast not set");
    assert_eq!(toast.toast_type, ToastType::Success);
    assert_eq!(toast.payload, widget);

    store
        .edit_product(Product::new("p1", "Widget", false))
        .await
        .expect("Failed to edit product");
    assert_eq!(
        store.products().await.unwrap(),
        vec![Product::new("p1", "Widget", false)]
    );

    store
        .delete_product("p1".to_string())
        .await
        .expect("Failed to delete product");
    assert!(store.products().await.unwrap().is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_lookup_after_add_returns_input() {
    let system = CatalogSystem::new();
    for (id, name, available) in [("a", "Anvil", true), ("b", "Bucket", false)] {
        system
            .store
            .add_product(create(id, name, available))
            .await
            .unwrap();
    }

    assert_eq!(
        system.store.find_product("b").await.unwrap(),
        Some(Product::new("b", "Bucket", false))
    );
    assert_eq!(system.store.find_product("z").await.unwrap(), None);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_ids_are_noops() {
    let system = CatalogSystem::new();
    let store = &system.store;
    store
        .add_product(create("p1", "Widget", true))
        .await
        .unwrap();
    let before = store.snapshot().await.unwrap();

    store.delete_product("nope".into()).await.unwrap();
    store
        .edit_product(Product::new("nope", "Ghost", false))
        .await
        .unwrap();
    store.toggle_product("nope".into()).await.unwrap();

    assert_eq!(store.snapshot().await.unwrap(), before);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_toggle_flips_and_restores() {
    let system = CatalogSystem::new();
    let store = &system.store;
    store
        .add_product(create("p1", "Widget", true))
        .await
        .unwrap();

    store.toggle_product("p1".into()).await.unwrap();
    let toggled = store.find_product("p1").await.unwrap().unwrap();
    assert!(!toggled.is_available);
    store.toggle_product("p1".into()).await.unwrap();
    let restored = store.find_product("p1").await.unwrap().unwrap();
    assert!(restored.is_available);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_single_toast_slot() {
    let system = CatalogSystem::new();
    let store = &system.store;
    let widget = Product::new("p1", "Widget", true);

    let first = Toast::success("first", &widget);
    let second = Toast::for_product(ToastType::Warning, "second", &widget);
    store.add_toast(first.clone()).await.unwrap();
    store.add_toast(second.clone()).await.unwrap();
    assert_eq!(store.toast().await.unwrap(), Some(second));

    store.delete_toast(first.id).await.unwrap();
    assert_eq!(store.toast().await.unwrap(), None);

    // Deleting with no toast set is harmless.
    store
        .delete_toast("garbage-\u{1f4a9}".into())
        .await
        .unwrap();
    assert_eq!(store.toast().await.unwrap(), None);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_actions_are_swallowed() {
    let system = CatalogSystem::new();
    let store = &system.store;
    store
        .add_product(create("p1", "Widget", true))
        .await
        .unwrap();
    let before = store.snapshot().await.unwrap();

    // The dispatcher sees success; the store logs and keeps its state.
    store.add_product(create("p2", "", true)).await.unwrap();
    store
        .edit_product(Product::new("", "No id", true))
        .await
        .unwrap();
    store
        .edit_product(Product::new("p1", "  ", true))
        .await
        .unwrap();

    assert_eq!(store.snapshot().await.unwrap(), before);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_filter_preserves_order() {
    let system = CatalogSystem::new();
    let store = &system.store;
    for (i, available) in [true, false, true, false, true].into_iter().enumerate() {
        store
            .add_product(create(&format!("p{i}"), &format!("Item {i}"), available))
            .await
            .unwrap();
    }

    let state = store.snapshot().await.unwrap();
    let ids: Vec<String> = state
        .filtered(ProductFilter::IsAvailable)
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec!["p0", "p2", "p4"]);
    assert_eq!(state.filtered(ProductFilter::All), state.products);
    system.shutdown().await.unwrap();
}

/// Selections only wake when their own slice changes.
#[tokio::test]
async fn test_slice_subscriptions_are_independent() {
    let system = CatalogSystem::new();
    let store = &system.store;
    let mut products = store.select_products();
    let mut toast = store.select_toast();

    let widget = Product::new("p1", "Widget", true);
    store
        .add_toast(Toast::success("hello", &widget))
        .await
        .unwrap();
    assert!(toast.refresh());
    assert!(!products.refresh());

    store
        .add_product(create("p1", "Widget", true))
        .await
        .unwrap();
    assert_eq!(products.changed().await.unwrap(), &vec![widget]);
    assert!(!toast.refresh());

    drop(products);
    drop(toast);
    system.shutdown().await.unwrap();
}

/// Operations from many tasks are applied one at a time.
#[tokio::test]
async fn test_concurrent_adds_are_all_applied() {
    let (actor, client) = product_slice::new();
    let handle = tokio::spawn(actor.run(None));
    let store = ProductStore::new(client);

    let mut tasks = Vec::new();
    for i in 0..25 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store
                .add_product(create(&format!("p{i}"), "Bulk", i % 2 == 0))
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let products = store.products().await.unwrap();
    assert_eq!(products.len(), 25);
    drop(store);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_seeded_store_and_raw_dispatch() {
    let seeded = ProductState {
        products: vec![Product::new("p1", "Widget", true)],
        toast: None,
    };
    let (actor, client) = StoreActor::with_state(seeded, 4);
    tokio::spawn(actor.run(None));
    let store = ProductStore::new(client);

    store
        .dispatch(ProductAction::ToggleProduct {
            product_id: "p1".into(),
        })
        .await
        .unwrap();
    assert_eq!(
        store.products().await.unwrap(),
        vec![Product::new("p1", "Widget", false)]
    );
}
