//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait`, so the same repository runs against the
//! connection pool for single reads or against a `DatabaseTransaction` when a service needs
//! several writes to commit together.

pub mod coffee;
pub mod event;
pub mod flavor;
