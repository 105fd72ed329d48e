//! Core types for quoting

mod client;
mod error;
mod line_item;
mod money;

pub use client::*;
pub use error::*;
pub use line_item::*;
pub use money::*;
