//! HTTP request handlers.
//!
//! Controllers convert DTOs to domain parameters, call the matching service and map
//! the result back to a DTO and status code. Errors are returned as `AppError` and
//! turned into responses by its `IntoResponse` implementation.

pub mod coffee;
pub mod event;
pub mod param;

#[cfg(test)]
mod test;
