//! Plain domain types shared by the catalog, the sessions, the registry and the views.

pub mod customer;
pub mod order;
pub mod product;
pub mod storefront;

pub use customer::*;
pub use order::*;
pub use product::*;
pub use storefront::*;
