//! DogStore: the data access layer, plus request validation.

mod crud;
mod validation;
pub use crud::DogStore;
pub(crate) use crud::insert;
pub use validation::RequestValidator;
