use product_catalog::config::CatalogConfig;
use product_catalog::gateway::InMemoryGateway;
use product_catalog::lifecycle::{setup_tracing, CatalogSystem};
use product_catalog::views::ProductsPage;
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CatalogConfig::from_env().map_err(|e| e.to_string())?;
    info!(persistence = config.persistence_active(), "Starting product catalog");

    let gateway = Arc::new(InMemoryGateway::new());
    let system = CatalogSystem::start(&config, gateway)
        .await
        .map_err(|e| e.to_string())?;

    let mut page = ProductsPage::new(system.store.clone());

    let span = tracing::info_span!("add_product");
    async {
        page.add_form().set_name("Widget");
        page.add_form().submit().await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    page.add_form().set_name("   ");
    page.add_form().submit().await.map_err(|e| e.to_string())?;
    if let Some(message) = page.add_form().error() {
        warn!(message, "Add form rejected input");
    }

    page.refresh();
    let Some(widget) = page.list().visible().into_iter().next() else {
        return Err("Widget was not added".to_string());
    };

    let span = tracing::info_span!("edit_product");
    async {
        page.begin_edit(widget.clone());
        if let Some(form) = page.edit_form() {
            form.set_available(false);
        }
        page.submit_edit().await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    page.refresh();
    page.select_filter("isAvailable")
        .map_err(|e| e.to_string())?;
    info!(
        total = page.list().products().len(),
        visible = page.list().visible().len(),
        "Filtered to available products"
    );

    if let Some(toast) = page.toast().current() {
        info!(message = %toast.message, owner = %toast.toast_owner, "Toast");
    }

    let span = tracing::info_span!("delete_product");
    async {
        page.select_filter("all")?;
        for mut item in page.items() {
            item.request_delete();
            page.confirm_delete(&mut item).await?;
        }
        page.toast().dismiss().await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let remaining = system.store.products().await.map_err(|e| e.to_string())?;
    info!(remaining = remaining.len(), "Catalog emptied");

    drop(page);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
