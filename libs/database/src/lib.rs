//! Database library providing relational connection management for the services
//!
//! SeaORM sits underneath, so the same code talks to SQLite (the default, a
//! single file next to the binary) or PostgreSQL depending on the URL.
//!
//! # Features
//!
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::sql;
//! use migration::Migrator;
//!
//! let config = sql::SqlConfig::new("sqlite://./database.db?mode=rwc");
//! let db = sql::connect_from_config_with_retry(config, None).await?;
//! sql::run_migrations::<Migrator>(&db, "tasks_api").await?;
//! ```

pub mod common;
pub mod sql;

pub use common::DatabaseError;
