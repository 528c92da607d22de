use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::state::AppState;

/// Shared caches may serve a copy for 60s and revalidate in the background for 300s more.
pub const RESUME_CACHE_CONTROL: &str = "s-maxage=60, stale-while-revalidate=300";

/// GET /api/resume
/// Serves the data source verbatim as JSON.
pub async fn handle_get_resume(State(state): State<AppState>) -> Result<Response, AppError> {
    let data = state.loader.load_raw().await?;
    Ok((
        [(header::CACHE_CONTROL, RESUME_CACHE_CONTROL)],
        Json(data),
    )
        .into_response())
}
