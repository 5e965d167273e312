//! SeaORM entities for the coffee catalog schema.

pub mod prelude;

pub mod coffee;
pub mod coffee_flavor;
pub mod event;
pub mod flavor;
