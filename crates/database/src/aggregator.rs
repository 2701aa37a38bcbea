use crate::error::DbError;
use async_trait::async_trait;
use core_types::{EntitySalesMap, PeriodMetrics, PeriodQuery};

/// Read-only aggregate queries over orders, order items, products and categories.
///
/// Every operation covers the half-open window of `query.period`, excludes
/// cancelled orders and honours the optional vendor and category filters. The
/// reporter is constructed with an implementation of this trait; nothing reaches
/// for an ambient connection.
#[async_trait]
pub trait PeriodAggregator: Send + Sync {
    /// Total revenue, distinct order count and average order value.
    async fn period_sales(&self, query: &PeriodQuery) -> Result<PeriodMetrics, DbError>;

    /// Best-selling products by revenue, truncated to `limit` entries.
    async fn top_products(
        &self,
        query: &PeriodQuery,
        limit: u32,
    ) -> Result<EntitySalesMap, DbError>;

    /// Revenue per category, every category with sales included.
    async fn category_sales(&self, query: &PeriodQuery) -> Result<EntitySalesMap, DbError>;
}
