//! # AgriMarket Database Crate
//!
//! This crate is the reporting layer's only door to the PostgreSQL database
//! holding the marketplace's orders, order items, products and categories.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. The rest of the workspace sees the
//!   `PeriodAggregator` trait and `core-types` records, never rows.
//! - **Read-Only:** The reporting queries only aggregate. Nothing in this crate
//!   writes order data.
//! - **Asynchronous & Pooled:** All operations are asynchronous and share a
//!   `PgPool`.
//!
//! ## Public API
//!
//! - `connect`: Establishes the database connection pool.
//! - `run_migrations`: Applies the embedded schema migrations.
//! - `PeriodAggregator`: The data-access interface the reporter is built on.
//! - `DbRepository`: The PostgreSQL implementation of `PeriodAggregator`.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod aggregator;
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use aggregator::PeriodAggregator;
pub use connection::{MIGRATOR, connect, run_migrations};
pub use error::DbError;
pub use repository::DbRepository;
