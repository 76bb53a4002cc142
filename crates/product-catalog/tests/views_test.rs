use product_catalog::lifecycle::CatalogSystem;
use product_catalog::model::{Product, ProductCreate, ToastType};
use product_catalog::product_slice::ProductFilter;
use product_catalog::views::{
    AddProductForm, EditProductForm, ProductItemView, ProductsPage, ToastView,
};

#[tokio::test]
async fn test_add_form_requires_a_name() {
    let system = CatalogSystem::new();
    let mut form = AddProductForm::new(system.store.clone());

    form.set_name("   ");
    assert_eq!(form.submit().await.unwrap(), None);
    assert_eq!(form.error(), Some("Name  is required"));
    assert!(system.store.products().await.unwrap().is_empty());
    assert!(system.store.toast().await.unwrap().is_none());

    form.set_name("Widget");
    let id = form.submit().await.unwrap().expect("Product not added");
    assert_eq!(form.error(), None);
    assert_eq!(form.name(), "");

    let products = system.store.products().await.unwrap();
    assert_eq!(products, vec![Product::new(id, "Widget", true)]);
    let toast = system.store.toast().await.unwrap().unwrap();
    assert_eq!(toast.toast_type, ToastType::Success);
    assert_eq!(toast.message, "Product added successfully...");
    assert_eq!(toast.header_text, "Widget");

    drop(form);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_edit_form_merges_into_original() {
    let system = CatalogSystem::new();
    let widget = Product::new("p1", "Widget", true);
    system
        .store
        .add_product(ProductCreate {
            id: Some("p1".into()),
            name: "Widget".into(),
            is_available: true,
        })
        .await
        .unwrap();

    let mut form = EditProductForm::new(system.store.clone(), widget.clone());
    assert_eq!(form.name(), "Widget");
    assert!(form.is_available());

    form.set_name("");
    assert!(!form.submit().await.unwrap());
    assert_eq!(form.error(), Some("Name  is required"));

    form.set_name("Widget Pro");
    form.set_available(false);
    assert!(form.submit().await.unwrap());

    assert_eq!(
        system.store.products().await.unwrap(),
        vec![Product::new("p1", "Widget Pro", false)]
    );
    let toast = system.store.toast().await.unwrap().unwrap();
    assert_eq!(toast.message, "Product updated successfully...");
    assert_eq!(toast.payload, widget);

    drop(form);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_item_toggle_and_confirmed_delete() {
    let system = CatalogSystem::new();
    let widget = Product::new("p1", "Widget", true);
    system
        .store
        .add_product(ProductCreate {
            id: Some("p1".into()),
            name: "Widget".into(),
            is_available: true,
        })
        .await
        .unwrap();

    let mut item = ProductItemView::new(system.store.clone(), widget.clone());
    assert!(!item.is_struck_through());
    item.toggle().await.unwrap();
    let toggled = system.store.find_product("p1").await.unwrap().unwrap();
    assert!(!toggled.is_available);

    // Without opening the confirmation nothing is deleted.
    assert!(!item.confirm_delete(None).await.unwrap());
    assert_eq!(system.store.products().await.unwrap().len(), 1);

    item.request_delete();
    assert!(item.confirmation().is_visible());
    let reset = item.confirm_delete(Some(&widget)).await.unwrap();
    assert!(reset);
    assert!(!item.confirmation().is_visible());
    assert!(system.store.products().await.unwrap().is_empty());
    assert_eq!(
        system.store.toast().await.unwrap().unwrap().message,
        "Product deleted successfully..."
    );

    drop(item);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancelled_delete_keeps_product() {
    let system = CatalogSystem::new();
    system
        .store
        .add_product(ProductCreate {
            id: Some("p1".into()),
            name: "Widget".into(),
            is_available: true,
        })
        .await
        .unwrap();

    let mut item =
        ProductItemView::new(system.store.clone(), Product::new("p1", "Widget", true));
    item.request_delete();
    item.cancel_delete();
    assert!(!item.confirm_delete(None).await.unwrap());
    assert_eq!(system.store.products().await.unwrap().len(), 1);

    drop(item);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_toast_view_dismiss_and_deactivate() {
    let system = CatalogSystem::new();
    let mut view = ToastView::new(system.store.clone());
    assert!(!view.is_visible());

    let mut form = AddProductForm::new(system.store.clone());
    form.set_name("Widget");
    form.submit().await.unwrap();

    assert!(view.refresh());
    assert!(view.is_visible());

    view.deactivate().await.unwrap();
    let toast = view.changed().await.unwrap().cloned();
    assert!(toast.is_some_and(|t| !t.is_active));
    assert!(!view.is_visible());

    view.dismiss().await.unwrap();
    assert!(view.changed().await.unwrap().is_none());

    drop(form);
    drop(view);
    system.shutdown().await.unwrap();
}

/// The full page flow: add, filter, edit, delete the item being edited.
#[tokio::test]
async fn test_products_page_flow() {
    let system = CatalogSystem::new();
    let mut page = ProductsPage::new(system.store.clone());

    for name in ["Widget", "Gadget"] {
        page.add_form().set_name(name);
        page.add_form().submit().await.unwrap();
    }
    assert!(page.refresh());
    assert_eq!(page.list().visible().len(), 2);

    let gadget = page.list().products()[1].clone();
    page.begin_edit(gadget.clone());
    assert!(page.is_editing());
    page.edit_form().unwrap().set_available(false);
    assert!(page.submit_edit().await.unwrap());
    assert!(!page.is_editing());

    page.refresh();
    assert_eq!(
        page.select_filter("isAvailable").unwrap(),
        ProductFilter::IsAvailable
    );
    let visible: Vec<String> = page.list().visible().into_iter().map(|p| p.name).collect();
    assert_eq!(visible, vec!["Widget"]);
    assert!(page.select_filter("nonsense").is_err());
    assert_eq!(page.list().filter(), ProductFilter::IsAvailable);

    let widget = page.list().visible()[0].clone();
    page.begin_edit(widget.clone());
    let mut items = page.items();
    assert_eq!(items.len(), 1);
    items[0].request_delete();
    page.confirm_delete(&mut items[0]).await.unwrap();
    assert!(!page.is_editing());

    page.refresh();
    page.select_filter("all").unwrap();
    assert_eq!(
        page.list().visible(),
        vec![Product {
            is_available: false,
            ..gadget
        }]
    );

    drop(items);
    drop(page);
    system.shutdown().await.unwrap();
}
