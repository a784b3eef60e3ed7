//! Named views: a template name plus the data it would be rendered with.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// A page response. Rendering is left to the client; the body is
/// `{ "view": name, "data": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub view: &'static str,
    pub data: Value,
}

impl View {
    pub fn new(view: &'static str, data: Value) -> Self {
        Self { view, data }
    }

    /// A view with no data.
    pub fn empty(view: &'static str) -> Self {
        Self::new(view, json!({}))
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
