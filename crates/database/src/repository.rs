use crate::DbError;
use crate::aggregator::PeriodAggregator;
use async_trait::async_trait;
use core_types::{EntitySales, EntitySalesMap, OrderStatus, PeriodMetrics, PeriodQuery};
use rust_decimal::Decimal;
use sqlx::postgres::PgPool;

// Placeholders shared by every query below:
// $1 window start (inclusive), $2 window end (exclusive), $3 statuses that count as sales,
// $4 vendor id or NULL, $5 category id or NULL.

const PERIOD_SALES_SQL: &str = r#"
    SELECT
        COALESCE(SUM(oi.quantity * oi.price), 0) AS total_sales,
        COUNT(DISTINCT o.id) AS total_orders
    FROM orders AS o
    JOIN order_items AS oi ON oi.order_id = o.id
    JOIN products AS p ON p.id = oi.product_id
    WHERE o.created_at >= $1
      AND o.created_at < $2
      AND o.status = ANY($3)
      AND ($4::BIGINT IS NULL OR p.vendor_id = $4)
      AND ($5::BIGINT IS NULL OR p.category_id = $5)
"#;

const TOP_PRODUCTS_SQL: &str = r#"
    SELECT
        p.id AS id,
        p.name AS name,
        COALESCE(SUM(oi.quantity), 0)::BIGINT AS quantity,
        COALESCE(SUM(oi.quantity * oi.price), 0) AS sales
    FROM orders AS o
    JOIN order_items AS oi ON oi.order_id = o.id
    JOIN products AS p ON p.id = oi.product_id
    WHERE o.created_at >= $1
      AND o.created_at < $2
      AND o.status = ANY($3)
      AND ($4::BIGINT IS NULL OR p.vendor_id = $4)
      AND ($5::BIGINT IS NULL OR p.category_id = $5)
    GROUP BY p.id, p.name
    ORDER BY sales DESC, p.id ASC
    LIMIT $6
"#;

const CATEGORY_SALES_SQL: &str = r#"
    SELECT
        c.id AS id,
        c.name AS name,
        COALESCE(SUM(oi.quantity), 0)::BIGINT AS quantity,
        COALESCE(SUM(oi.quantity * oi.price), 0) AS sales
    FROM orders AS o
    JOIN order_items AS oi ON oi.order_id = o.id
    JOIN products AS p ON p.id = oi.product_id
    JOIN categories AS c ON c.id = p.category_id
    WHERE o.created_at >= $1
      AND o.created_at < $2
      AND o.status = ANY($3)
      AND ($4::BIGINT IS NULL OR p.vendor_id = $4)
      AND ($5::BIGINT IS NULL OR p.category_id = $5)
    GROUP BY c.id, c.name
    ORDER BY sales DESC, c.id ASC
"#;

/// The `DbRepository` runs the reporting aggregates against PostgreSQL.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Binds the five shared window/filter parameters onto a query.
    fn filtered<'q, O>(
        sql: &'q str,
        query: &PeriodQuery,
    ) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>
    where
        O: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>,
    {
        let (from, until) = query.period.bounds();
        sqlx::query_as::<_, O>(sql)
            .bind(from)
            .bind(until)
            .bind(OrderStatus::sale_literals())
            .bind(query.filter.vendor_id)
            .bind(query.filter.category_id)
    }
}

#[async_trait]
impl PeriodAggregator for DbRepository {
    async fn period_sales(&self, query: &PeriodQuery) -> Result<PeriodMetrics, DbError> {
        tracing::debug!(period = %query.period, filter = ?query.filter, "Querying period sales.");
        let (total_sales, total_orders) =
            Self::filtered::<(Decimal, i64)>(PERIOD_SALES_SQL, query)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DbError::query("period_sales", e))?;

        Ok(PeriodMetrics::new(total_sales, total_orders))
    }

    async fn top_products(
        &self,
        query: &PeriodQuery,
        limit: u32,
    ) -> Result<EntitySalesMap, DbError> {
        tracing::debug!(period = %query.period, filter = ?query.filter, limit, "Querying top products.");

        let products = Self::filtered::<EntitySales>(TOP_PRODUCTS_SQL, query)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DbError::query("top_products", e))?;

        Ok(products.into_iter().collect())
    }

    async fn category_sales(&self, query: &PeriodQuery) -> Result<EntitySalesMap, DbError> {
        tracing::debug!(period = %query.period, filter = ?query.filter, "Querying category sales.");

        let categories = Self::filtered::<EntitySales>(CATEGORY_SALES_SQL, query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DbError::query("category_sales", e))?;

        Ok(categories.into_iter().collect())
    }
}
