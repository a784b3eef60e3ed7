//! Body extractor accepting either a urlencoded form or a JSON object.

use std::collections::HashMap;

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde_json::{json, Value};

use crate::record::Fields;

/// Raw fields from a POST body.
///
/// `application/x-www-form-urlencoded` bodies are read as a form; anything
/// else is read as JSON. An empty body yields no fields, so the service
/// reports which ones are missing.
pub struct FieldsBody(pub Fields);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

#[async_trait]
impl<St> FromRequest<St> for FieldsBody
where
    St: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &St) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(values) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self(Fields::from(values)));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        if bytes.is_empty() {
            return Ok(Self(Fields::new()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("malformed JSON body: {}", e) })),
            )
                .into_response()
        })?;
        Ok(Self(Fields::from_json(&value)))
    }
}
