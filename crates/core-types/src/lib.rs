//! # AgriMarket Core Types
//!
//! The shared vocabulary of the reporting workspace: report periods and filters,
//! the aggregate records the database produces, and the comparison structures the
//! analytics layer builds from them.
//!
//! This crate has no knowledge of the database or the HTTP layer. Every other
//! crate depends on it.

pub mod enums;
pub mod error;
pub mod period;
pub mod structs;
pub mod wire;

// Re-export the core types to provide a clean public API.
pub use enums::{EntityKind, OrderStatus};
pub use error::CoreError;
pub use period::{ComparisonRequest, PeriodQuery, ReportFilter, ReportPeriod};
pub use structs::{
    ComparisonRow, EntityComparison, EntityId, EntitySales, EntitySalesMap, PeriodMetrics,
    RowChanges, SalesChanges, SalesComparison, SalesSnapshot,
};
