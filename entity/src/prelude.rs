pub use super::coffee::Entity as Coffee;
pub use super::coffee_flavor::Entity as CoffeeFlavor;
pub use super::event::Entity as Event;
pub use super::flavor::Entity as Flavor;
