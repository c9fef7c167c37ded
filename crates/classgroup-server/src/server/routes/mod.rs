//! HTTP surface.
//!
//! | Method | Path            | Handler                     |
//! |--------|-----------------|-----------------------------|
//! | GET    | `/`             | [`handlers::index`]         |
//! | POST   | `/analyze`      | [`handlers::analyze`]       |
//! | GET    | `/download-pdf` | [`handlers::download_pdf`]  |
//! | GET    | `/healthz`      | [`handlers::healthz`]       |

pub mod handlers;
pub mod views;

use crate::server::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze))
        .route("/download-pdf", get(handlers::download_pdf))
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
