//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let coffee = factory::create_coffee(&db).await?;
//!
//! // Customize through the builder
//! let coffee = factory::coffee::CoffeeFactory::new(&db)
//!     .name("Shipwreck Roast")
//!     .brand("Buddy Brew")
//!     .build()
//!     .await?;
//!
//! // Coffee linked to flavors, creating the flavors first
//! let (coffee, flavors) =
//!     factory::helpers::create_coffee_with_flavors(&db, &["chocolate", "vanilla"]).await?;
//! ```

pub mod coffee;
pub mod event;
pub mod flavor;
pub mod helpers;

pub use coffee::create_coffee;
pub use event::create_event;
pub use flavor::create_flavor;
