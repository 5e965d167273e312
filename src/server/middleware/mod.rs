//! Request processing that runs before handlers.

pub mod validation;
