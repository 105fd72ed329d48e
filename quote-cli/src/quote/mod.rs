//! Cleaning quote domain: catalog, cart, builder, session and Excel export

pub mod builder;
pub mod cart;
pub mod catalog;
pub mod excel;
pub mod session;
pub mod types;

pub use builder::{ExtraSelection, QuoteBuilder, Selection};
pub use cart::Cart;
pub use catalog::PriceCatalog;
pub use session::{Action, Outcome, Session};
pub use types::*;
