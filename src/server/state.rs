//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Application state containing shared resources.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<Vec<String>>` is a reference-counted pointer
///
/// The database is the only shared mutable resource; services hold no state between
/// requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Known coffee brands from configuration.
    pub coffee_brands: Arc<Vec<String>>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `coffee_brands` - Configured brand list
    pub fn new(db: DatabaseConnection, coffee_brands: Vec<String>) -> Self {
        Self {
            db,
            coffee_brands: Arc::new(coffee_brands),
        }
    }
}
