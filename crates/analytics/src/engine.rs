use core_types::{
    EntityComparison, EntityKind, EntitySalesMap, PeriodMetrics, SalesChanges, SalesComparison,
};

use crate::change::{percent_change, percent_change_count};
use crate::merger::merge_comparison;

/// A stateless calculator that assembles comparisons from two periods' aggregates.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComparisonEngine {}

impl ComparisonEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares period totals. Sales, order count and average order value are
    /// each run through the change calculator on their own.
    pub fn compare_sales(
        &self,
        current: PeriodMetrics,
        previous: PeriodMetrics,
    ) -> SalesComparison {
        let changes = SalesChanges {
            total_sales_change_pct: percent_change(current.total_sales, previous.total_sales),
            total_orders_change_pct: percent_change_count(
                current.total_orders,
                previous.total_orders,
            ),
            average_order_value_change_pct: percent_change(
                current.average_order_value,
                previous.average_order_value,
            ),
        };

        SalesComparison {
            current_period: current,
            previous_period: previous,
            changes,
        }
    }

    /// Builds a per-entity comparison. Products and categories go through the
    /// same merge; `kind` only labels the result.
    pub fn compare_entities(
        &self,
        kind: EntityKind,
        summary: SalesComparison,
        current: &EntitySalesMap,
        previous: &EntitySalesMap,
    ) -> EntityComparison {
        let rows = merge_comparison(current, previous);
        tracing::debug!(
            %kind,
            current = current.len(),
            previous = previous.len(),
            rows = rows.len(),
            "Merged entity comparison."
        );

        EntityComparison {
            kind,
            summary,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::EntitySales;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn sales_changes_are_independent() {
        let engine = ComparisonEngine::new();
        let current = PeriodMetrics::new(dec!(1200), 10);
        let previous = PeriodMetrics::new(dec!(1000), 5);

        let comparison = engine.compare_sales(current, previous);

        assert_eq!(comparison.changes.total_sales_change_pct, dec!(20));
        assert_eq!(comparison.changes.total_orders_change_pct, dec!(100));
        // 120 vs 200 average order value.
        assert_eq!(comparison.changes.average_order_value_change_pct, dec!(-40));
    }

    #[test]
    fn first_period_with_sales_reports_flat_growth() {
        let engine = ComparisonEngine::new();
        let comparison = engine.compare_sales(PeriodMetrics::new(dec!(75.50), 3), PeriodMetrics::zero());

        assert_eq!(comparison.changes.total_sales_change_pct, dec!(100));
        assert_eq!(comparison.changes.total_orders_change_pct, dec!(100));
        assert_eq!(comparison.changes.average_order_value_change_pct, dec!(100));
    }

    #[test]
    fn no_sales_in_either_period_is_all_zero() {
        let engine = ComparisonEngine::new();
        let comparison = engine.compare_sales(PeriodMetrics::zero(), PeriodMetrics::zero());

        assert_eq!(comparison.changes.total_sales_change_pct, Decimal::ZERO);
        assert_eq!(comparison.changes.total_orders_change_pct, Decimal::ZERO);
        assert_eq!(comparison.changes.average_order_value_change_pct, Decimal::ZERO);
    }

    #[test]
    fn entity_comparison_carries_kind_and_summary() {
        let engine = ComparisonEngine::new();
        let summary = engine.compare_sales(PeriodMetrics::new(dec!(40), 1), PeriodMetrics::zero());
        let current: EntitySalesMap = vec![EntitySales {
            id: 5,
            name: "Vegetables".to_string(),
            quantity: 8,
            sales: dec!(40),
        }]
        .into_iter()
        .collect();

        let comparison = engine.compare_entities(
            EntityKind::Category,
            summary.clone(),
            &current,
            &EntitySalesMap::new(),
        );

        assert_eq!(comparison.kind, EntityKind::Category);
        assert_eq!(comparison.summary, summary);
        assert_eq!(comparison.rows.len(), 1);
    }

    #[test]
    fn same_inputs_give_the_same_comparison() {
        let engine = ComparisonEngine::new();
        let a = engine.compare_sales(PeriodMetrics::new(dec!(333.33), 7), PeriodMetrics::new(dec!(100), 3));
        let b = engine.compare_sales(PeriodMetrics::new(dec!(333.33), 7), PeriodMetrics::new(dec!(100), 3));
        assert_eq!(a, b);
    }
}
