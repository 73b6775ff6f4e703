use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use super::AppState;

/// Serves the built client bundle. Unmatched paths fall back to
/// `index.html` so client-side routes resolve after a hard refresh.
pub fn router(assets_dir: &str) -> Router<AppState> {
    let index = std::path::Path::new(assets_dir).join("index.html");

    Router::new().fallback_service(ServeDir::new(assets_dir).fallback(ServeFile::new(index)))
}
