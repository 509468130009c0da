//! Beer records and their boundary representation.

pub mod beer;
pub mod dto;

pub use beer::*;
pub use dto::*;
