//! Wire-level DTOs shared by request handlers and API documentation.

pub mod api;
pub mod coffee;
pub mod event;
