//! HTTP handlers for the Dog collection.

pub mod dogs;
pub use dogs::*;
