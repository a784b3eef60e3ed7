//! Record service integration tests.
//!
//! - Cat and Dog service operations over the in-memory store
//! - Store failures surfacing as persistence errors
//! - The same flows over SQLite
//! - HTTP round-trips through the axum adapter

mod support;
mod cats;
mod sqlite;
