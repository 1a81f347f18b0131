//! Flow export routes.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::handlers::{handle_export, ExportRequest, ExportResponse};
use crate::AppState;

/// Create flow export routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/flows", post(export_handler))
}

/// POST /flows - Encode flows and send them to the collector.
async fn export_handler(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Json<ExportResponse>> {
    let response = handle_export(&state.exporter, request).await?;
    Ok(Json(response))
}
