//! # rf-db
//!
//! Database layer for Reflect RS.
//!
//! This crate provides PostgreSQL access using SQLx, including:
//!
//! - Connection pool management
//! - The entry repository for journal entry CRUD
//!
//! ## Example
//!
//! ```ignore
//! use rf_db::{Database, DatabaseConfig, EntryRepository};
//!
//! let config = DatabaseConfig::from_env()?;
//! let db = Database::connect(&config).await?;
//!
//! let repo = EntryRepository::new(db.pool().clone());
//! let entry = repo.find_by_id("b4c...").await?;
//!
//! db.close().await;
//! ```

pub mod entries;
pub mod pool;

// Re-exports
pub use entries::{CreateEntryDto, Entry, EntryRepository, UpdateEntryDto};
pub use pool::{Database, DatabaseConfig};
