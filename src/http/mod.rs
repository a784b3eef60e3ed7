//! HTTP adapter - maps routes to record service calls.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /` - view `index` with the last added cat's name.
//! - `GET /page1` - view `page1` with every cat.
//! - `GET /page2`, `GET /page3` - static views.
//! - `GET /getName` - `{ "name": ... }` of the last added cat.
//! - `POST /setName` - create a cat from `firstname`, `lastname`, `beds`.
//! - `POST /setDogName` - create a dog from `name`, `breed`, `age`.
//! - `GET /search?name=` - look up a cat.
//! - `GET /searchDog?name=` - look up a dog.
//! - `POST /updateLast` - give the last added cat one more bed.
//! - anything else - 404 view `notFound` with the requested path.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pet_records::{http, InMemoryRecordStore};
//!
//! let state = Arc::new(http::AppState::new(InMemoryRecordStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(state.clone());
//!
//! // Or serve directly
//! http::serve(state, "0.0.0.0:3000").await?;
//! ```

mod extract;
mod view;

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

pub use extract::FieldsBody;
pub use view::View;

use crate::record::{Cat, Dog};
use crate::service::{RecordService, ServiceError};
use crate::store::RecordStore;

/// Shared state: one service per record kind over the same store.
pub struct AppState<S> {
    pub cats: RecordService<Cat, S>,
    pub dogs: RecordService<Dog, S>,
}

impl<S: RecordStore + Clone> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            cats: RecordService::new(store.clone()),
            dogs: RecordService::new(store),
        }
    }
}

/// Build an axum `Router` serving the record routes.
pub fn router<S: RecordStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(index_handler::<S>))
        .route("/page1", get(page1_handler::<S>))
        .route("/page2", get(|| async { View::empty("page2") }))
        .route("/page3", get(|| async { View::empty("page3") }))
        .route("/getName", get(get_name_handler::<S>))
        .route("/setName", post(set_name_handler::<S>))
        .route("/setDogName", post(set_dog_name_handler::<S>))
        .route("/search", get(search_handler::<S>))
        .route("/searchDog", get(search_dog_handler::<S>))
        .route("/updateLast", post(update_last_handler::<S>))
        .fallback(not_found_handler)
        .with_state(state)
}

/// Serve the routes at the given address (e.g. `"0.0.0.0:3000"`) until
/// Ctrl+C or SIGTERM.
pub async fn serve<S: RecordStore + 'static>(
    state: Arc<AppState<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(state);
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn error_response(err: ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

#[derive(Deserialize)]
struct NameQuery {
    name: Option<String>,
}

/// `GET /`
async fn index_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> View {
    View::new(
        "index",
        json!({
            "currentName": state.cats.last_added_name().await,
            "title": "Home",
            "pageName": "Home Page",
        }),
    )
}

/// `GET /page1`
async fn page1_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Response {
    match state.cats.list_all().await {
        Ok(cats) => View::new("page1", json!({ "cats": cats })).into_response(),
        Err(e) => error_response(e),
    }
}

/// `GET /getName`
async fn get_name_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<serde_json::Value> {
    Json(json!({ "name": state.cats.last_added_name().await }))
}

/// `POST /setName`
async fn set_name_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    FieldsBody(fields): FieldsBody,
) -> Response {
    match state.cats.create(&fields).await {
        Ok(name) => Json(json!({ "name": name })).into_response(),
        Err(e) => error_response(e),
    }
}

/// `POST /setDogName`
async fn set_dog_name_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    FieldsBody(fields): FieldsBody,
) -> Response {
    match state.dogs.create(&fields).await {
        Ok(name) => Json(json!({ "name": name })).into_response(),
        Err(e) => error_response(e),
    }
}

/// `GET /search?name=`
async fn search_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<NameQuery>,
) -> Response {
    match state.cats.find_by_name(query.name.as_deref()).await {
        Ok(Some(cat)) => Json(json!({ "name": cat.name, "beds": cat.beds_owned })).into_response(),
        Ok(None) => Json(json!({ "error": "No cats found" })).into_response(),
        Err(e) => error_response(e),
    }
}

/// `GET /searchDog?name=`
async fn search_dog_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<NameQuery>,
) -> Response {
    match state.dogs.find_by_name(query.name.as_deref()).await {
        Ok(Some(dog)) => {
            Json(json!({ "name": dog.name, "breed": dog.breed, "age": dog.age })).into_response()
        }
        Ok(None) => Json(json!({ "error": "No dog found" })).into_response(),
        Err(e) => error_response(e),
    }
}

/// `POST /updateLast`
async fn update_last_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Response {
    match state.cats.mutate_last_added().await {
        Ok(cat) => Json(json!({ "name": cat.name, "beds": cat.beds_owned })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Fallback for unmatched routes.
async fn not_found_handler(uri: Uri) -> Response {
    let page = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    (
        StatusCode::NOT_FOUND,
        View::new("notFound", json!({ "page": page })),
    )
        .into_response()
}
