//! SQL builder: identifiers from typed enums only, values as parameters.

mod builder;
pub use builder::*;
