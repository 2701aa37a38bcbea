//! # AgriMarket Analytics
//!
//! Turns two snapshots of aggregate sales into period-over-period comparisons.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No database, no I/O. Inputs are the aggregates produced by
//!   the `database` crate, outputs are `core-types` comparison structures.
//! - **Stateless Calculation:** `ComparisonEngine` holds no state, so the same
//!   inputs always produce the same comparison.
//!
//! ## Public API
//!
//! - `percent_change` / `percent_change_count`: the change calculator with the
//!   zero-baseline policy.
//! - `merge_comparison`: the keyed merge shared by product and category reports.
//! - `ComparisonEngine`: assembles full `SalesComparison` / `EntityComparison` values.

pub mod change;
pub mod engine;
pub mod merger;

pub use change::{percent_change, percent_change_count};
pub use engine::ComparisonEngine;
pub use merger::merge_comparison;
