//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, so entity models never leak into
//! the service layer and DTOs never reach the data layer.

pub mod coffee;
pub mod event;
pub mod pagination;
