use axum::{
    extract::{Query, State},
    response::Html,
};
use tracing::debug;

use crate::render::{render_page, PageView};
use crate::resume::filter::ProjectQuery;
use crate::state::AppState;

/// GET /?q=...&tag=...
/// Always renders a page: load failures degrade to the fallback document.
pub async fn handle_page(
    State(state): State<AppState>,
    query: Option<Query<ProjectQuery>>,
) -> Html<String> {
    // A malformed query string renders the unfiltered page.
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let doc = state.loader.load_or_fallback().await;
    debug!(q = %query.q, tag = %query.tag, "Rendering portfolio page");

    let view = PageView {
        mode: state.render_mode,
        query,
    };
    Html(render_page(&doc, &view))
}
