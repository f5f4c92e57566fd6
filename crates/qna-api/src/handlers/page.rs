//! Chat page handler

use axum::response::Html;

/// Serve the chat page
///
/// The page is embedded at compile time; a missing asset fails the build
/// rather than any request.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
