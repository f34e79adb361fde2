use axum::Json;
use tracing::info;

use crate::catalog;
use crate::models::Product;

// ── List ──────────────────────────────────────────────────────────────────────

/// `GET /products` — the full static catalog as a bare JSON array.
/// No parameters, no state, nothing in the request affects the body.
pub async fn list_products() -> Json<&'static [Product]> {
    let products = catalog::all();
    info!(count = products.len(), "Listed products");
    Json(products)
}
