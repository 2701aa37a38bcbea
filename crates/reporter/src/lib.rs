//! # AgriMarket Comparative Reporter
//!
//! Answers the three report questions the marketplace dashboard asks: how did
//! sales, products and categories do in one period compared to another.
//!
//! The reporter owns no connection of its own. It is built with a
//! `PeriodAggregator`, fetches both periods' aggregates through it and hands
//! them to the analytics `ComparisonEngine`.

use crate::error::ReporterError;
use analytics::ComparisonEngine;
use core_types::{ComparisonRequest, EntityComparison, EntityKind, SalesComparison};
use database::PeriodAggregator;

pub mod error;

/// Default number of best-selling products per period in a product comparison.
pub const DEFAULT_TOP_PRODUCTS_LIMIT: u32 = 20;

/// Period-over-period reporting over an injected aggregator.
pub struct ComparativeReporter<A> {
    aggregator: A,
    engine: ComparisonEngine,
    top_products_limit: u32,
}

impl<A: PeriodAggregator> ComparativeReporter<A> {
    pub fn new(aggregator: A, top_products_limit: u32) -> Self {
        Self {
            aggregator,
            engine: ComparisonEngine::new(),
            top_products_limit,
        }
    }

    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    /// Compares order totals between the two periods.
    pub async fn sales_comparison(
        &self,
        request: &ComparisonRequest,
    ) -> Result<SalesComparison, ReporterError> {
        let current_query = request.current_query();
        let previous_query = request.previous_query();

        let (current, previous) = tokio::try_join!(
            self.aggregator.period_sales(&current_query),
            self.aggregator.period_sales(&previous_query),
        )?;

        tracing::info!(
            current = %request.current,
            previous = %request.previous,
            current_orders = current.total_orders,
            previous_orders = previous.total_orders,
            "Built sales comparison."
        );
        Ok(self.engine.compare_sales(current, previous))
    }

    /// Compares the best-selling products of each period.
    ///
    /// Each side is truncated to the top-products limit before the merge, so a
    /// product outside one period's top list shows a zero side for that period
    /// even if it had some sales there.
    pub async fn product_comparison(
        &self,
        request: &ComparisonRequest,
    ) -> Result<EntityComparison, ReporterError> {
        let current_query = request.current_query();
        let previous_query = request.previous_query();
        let limit = self.top_products_limit;

        let (summary, current, previous) = tokio::try_join!(
            self.sales_comparison(request),
            async {
                self.aggregator
                    .top_products(&current_query, limit)
                    .await
                    .map_err(ReporterError::from)
            },
            async {
                self.aggregator
                    .top_products(&previous_query, limit)
                    .await
                    .map_err(ReporterError::from)
            },
        )?;

        let comparison =
            self.engine
                .compare_entities(EntityKind::Product, summary, &current, &previous);
        tracing::info!(rows = comparison.rows.len(), limit, "Built product comparison.");
        Ok(comparison)
    }

    /// Compares sales per category.
    pub async fn category_comparison(
        &self,
        request: &ComparisonRequest,
    ) -> Result<EntityComparison, ReporterError> {
        let current_query = request.current_query();
        let previous_query = request.previous_query();

        let (summary, current, previous) = tokio::try_join!(
            self.sales_comparison(request),
            async {
                self.aggregator
                    .category_sales(&current_query)
                    .await
                    .map_err(ReporterError::from)
            },
            async {
                self.aggregator
                    .category_sales(&previous_query)
                    .await
                    .map_err(ReporterError::from)
            },
        )?;

        let comparison =
            self.engine
                .compare_entities(EntityKind::Category, summary, &current, &previous);
        tracing::info!(rows = comparison.rows.len(), "Built category comparison.");
        Ok(comparison)
    }
}
