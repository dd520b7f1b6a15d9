//! Dogs house service: a small REST API over a single Dog table in PostgreSQL.

pub mod config;
pub mod error;
pub mod migration;
pub mod model;
pub mod sql;
pub mod state;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::{from_env, AppConfig, DbConfig, ServerConfig};
pub use error::{AppError, ConfigError, StoreError};
pub use migration::{bootstrap, reset_schema, seed};
pub use model::{Dog, NewDog, Page, SortAttribute, SortOrder};
pub use routes::{app, common_routes, dog_routes};
pub use service::{DogStore, RequestValidator};
pub use state::AppState;
