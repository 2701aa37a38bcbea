use core_types::{ComparisonRow, EntitySales, EntitySalesMap, RowChanges, SalesSnapshot};
use rust_decimal_macros::dec;

use crate::change::{percent_change, percent_change_count};

/// Joins the current and previous per-entity sales on id.
///
/// Every id present in either map appears exactly once. Entities missing from
/// one side get a zeroed snapshot for that side; an entity that only sold in the
/// previous period is reported at `-100` for both quantity and sales. Rows come
/// back ranked by current-period sales, highest first, with ties in encounter
/// order (current entries first, then previous-only entries).
pub fn merge_comparison(
    current: &EntitySalesMap,
    previous: &EntitySalesMap,
) -> Vec<ComparisonRow> {
    let mut rows = Vec::with_capacity(current.len() + previous.len());

    for record in current.iter() {
        let now = record.snapshot();
        let before = previous
            .get(record.id)
            .map(EntitySales::snapshot)
            .unwrap_or_else(SalesSnapshot::zero);

        rows.push(ComparisonRow {
            id: record.id,
            name: record.name.clone(),
            current: now,
            previous: before,
            changes: RowChanges {
                quantity_change_pct: percent_change_count(now.quantity, before.quantity),
                sales_change_pct: percent_change(now.sales, before.sales),
            },
        });
    }

    for record in previous.iter().filter(|r| !current.contains(r.id)) {
        rows.push(ComparisonRow {
            id: record.id,
            name: record.name.clone(),
            current: SalesSnapshot::zero(),
            previous: record.snapshot(),
            changes: RowChanges {
                quantity_change_pct: dec!(-100),
                sales_change_pct: dec!(-100),
            },
        });
    }

    // `sort_by` is stable, which keeps ties in encounter order.
    rows.sort_by(|a, b| b.current.sales.cmp(&a.current.sales));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::EntityId;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::collections::HashSet;

    fn record(id: EntityId, name: &str, quantity: i64, sales: Decimal) -> EntitySales {
        EntitySales {
            id,
            name: name.to_string(),
            quantity,
            sales,
        }
    }

    #[test]
    fn disjoint_periods_produce_one_row_per_side() {
        let current: EntitySalesMap = vec![record(1, "A", 10, dec!(100))].into_iter().collect();
        let previous: EntitySalesMap = vec![record(2, "B", 5, dec!(50))].into_iter().collect();

        let rows = merge_comparison(&current, &previous);

        assert_eq!(rows.len(), 2);

        let a = &rows[0];
        assert_eq!(a.id, 1);
        assert_eq!(a.previous, SalesSnapshot::zero());
        assert_eq!(a.changes.quantity_change_pct, dec!(100));
        assert_eq!(a.changes.sales_change_pct, dec!(100));

        let b = &rows[1];
        assert_eq!(b.id, 2);
        assert_eq!(b.name, "B");
        assert_eq!(b.current, SalesSnapshot::zero());
        assert_eq!(b.previous.quantity, 5);
        assert_eq!(b.previous.sales, dec!(50));
        assert_eq!(b.changes.quantity_change_pct, dec!(-100));
        assert_eq!(b.changes.sales_change_pct, dec!(-100));
    }

    #[test]
    fn matching_ids_are_compared_and_named_from_current() {
        let current: EntitySalesMap =
            vec![record(4, "Cassava flour", 30, dec!(90))].into_iter().collect();
        let previous: EntitySalesMap =
            vec![record(4, "Cassava", 20, dec!(120))].into_iter().collect();

        let rows = merge_comparison(&current, &previous);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Cassava flour");
        assert_eq!(rows[0].changes.quantity_change_pct, dec!(50));
        assert_eq!(rows[0].changes.sales_change_pct, dec!(-25));
    }

    #[test]
    fn rows_are_ranked_by_current_sales_with_stable_ties() {
        let current: EntitySalesMap = vec![
            record(1, "first tie", 1, dec!(10)),
            record(2, "top", 1, dec!(500)),
            record(3, "second tie", 1, dec!(10)),
        ]
        .into_iter()
        .collect();
        let previous: EntitySalesMap = vec![record(9, "gone", 3, dec!(70))].into_iter().collect();

        let rows = merge_comparison(&current, &previous);
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![2, 1, 3, 9]);
    }

    #[test]
    fn empty_inputs_give_no_rows() {
        let rows = merge_comparison(&EntitySalesMap::new(), &EntitySalesMap::new());
        assert!(rows.is_empty());
    }

    fn sales_map(max_id: i64) -> impl Strategy<Value = EntitySalesMap> {
        prop::collection::vec((0..max_id, 0i64..1_000, 0i64..1_000_000), 0..12).prop_map(
            |entries| {
                entries
                    .into_iter()
                    .map(|(id, quantity, cents)| {
                        record(id, &format!("entity {id}"), quantity, Decimal::new(cents, 2))
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn every_id_appears_exactly_once(current in sales_map(20), previous in sales_map(20)) {
            let rows = merge_comparison(&current, &previous);

            let expected: HashSet<_> = current.iter().chain(previous.iter()).map(|r| r.id).collect();
            let seen: Vec<_> = rows.iter().map(|r| r.id).collect();
            let unique: HashSet<_> = seen.iter().copied().collect();

            prop_assert_eq!(seen.len(), unique.len());
            prop_assert_eq!(unique, expected);
        }

        #[test]
        fn rows_are_never_out_of_order(current in sales_map(20), previous in sales_map(20)) {
            let rows = merge_comparison(&current, &previous);
            prop_assert!(rows.windows(2).all(|w| w[0].current.sales >= w[1].current.sales));
        }
    }
}
