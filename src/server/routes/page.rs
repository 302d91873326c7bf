//! Page Routes
//!
//! - GET / - The portfolio, prerendered for the current year
//! - GET /portfolio_data.json - The document the page was rendered from

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use crate::render;
use crate::server::error::ApiResult;
use crate::server::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let page = render::prerender(&state.document, &state.layout, render::current_year())?;
    Ok(Html(page.to_html()))
}

/// GET /portfolio_data.json
///
/// Served byte-for-byte so the browser client sees the same document.
pub async fn document(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.document_bytes.clone(),
    )
}
