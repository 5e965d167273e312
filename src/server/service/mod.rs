//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Input rules, flavor resolution, partial-update semantics
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Each write runs as one transaction, so flavor resolution
//!   and the coffee write commit or roll back together

pub mod coffee;
pub mod event;
pub mod flavor;

#[cfg(test)]
mod test;
