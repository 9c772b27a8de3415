//! Greeting page handler.

use axum::response::Html;
use tracing::instrument;

use crate::greeting;

/// Greeting page handler. Always 200; the timestamp is computed fresh
/// at request time in the display timezone.
#[instrument(name = "home::index")]
pub async fn index() -> Html<String> {
    Html(greeting::render(greeting::now()))
}
