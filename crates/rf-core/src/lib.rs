//! # rf-core
//!
//! Core types for Reflect RS.
//!
//! This crate provides the foundational building blocks used by the storage
//! layer:
//! - The `StoreError` taxonomy
//! - The `StoreResult` alias

pub mod error;

pub use error::{StoreError, StoreResult};
