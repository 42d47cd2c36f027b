//! Catalog browsing.

use retail_admin_dashboard::AppState;

/// Print the seeded catalog: id, stock, price, title.
pub async fn list(state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
    state.require_login()?;
    state.hydrate_catalog().await?;

    println!("{:>5}  {:>5}  {:>8}  TITLE", "ID", "STOCK", "PRICE");
    for product in state.catalog.products() {
        println!(
            "{:>5}  {:>5}  {:>8}  {}",
            product.id,
            product.stock,
            product.price.to_string(),
            product.title
        );
    }
    Ok(())
}
