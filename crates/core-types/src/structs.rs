use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::enums::EntityKind;

/// Primary key of a product or a category.
pub type EntityId = i64;

/// Order totals for one period. Derived per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodMetrics {
    #[serde(with = "crate::wire::money")]
    pub total_sales: Decimal,
    pub total_orders: i64,
    /// Exact quotient. Only its JSON and table renderings are rounded to cents.
    #[serde(with = "crate::wire::money")]
    pub average_order_value: Decimal,
}

impl PeriodMetrics {
    /// Builds the metrics from the two raw aggregates, deriving the average.
    pub fn new(total_sales: Decimal, total_orders: i64) -> Self {
        let average_order_value = if total_orders > 0 {
            total_sales / Decimal::from(total_orders)
        } else {
            Decimal::ZERO
        };
        Self {
            total_sales,
            total_orders,
            average_order_value,
        }
    }

    pub fn zero() -> Self {
        Self::new(Decimal::ZERO, 0)
    }
}

/// Quantity and revenue of one product or category within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EntitySales {
    pub id: EntityId,
    pub name: String,
    pub quantity: i64,
    #[serde(with = "crate::wire::money")]
    pub sales: Decimal,
}

impl EntitySales {
    pub fn snapshot(&self) -> SalesSnapshot {
        SalesSnapshot {
            quantity: self.quantity,
            sales: self.sales,
        }
    }
}

/// Per-entity sales for one period, keyed by id.
///
/// Holds at most one entry per id and iterates in insertion order, which is the
/// order the query returned (sales descending).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntitySalesMap {
    entries: IndexMap<EntityId, EntitySales>,
}

impl EntitySalesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record. A record with an id already present replaces the old
    /// one without moving it.
    pub fn insert(&mut self, record: EntitySales) -> Option<EntitySales> {
        self.entries.insert(record.id, record)
    }

    pub fn get(&self, id: EntityId) -> Option<&EntitySales> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntitySales> {
        self.entries.values()
    }
}

impl FromIterator<EntitySales> for EntitySalesMap {
    fn from_iter<I: IntoIterator<Item = EntitySales>>(iter: I) -> Self {
        let mut map = Self::new();
        for record in iter {
            map.insert(record);
        }
        map
    }
}

/// One side of a comparison row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesSnapshot {
    pub quantity: i64,
    #[serde(with = "crate::wire::money")]
    pub sales: Decimal,
}

impl SalesSnapshot {
    pub fn zero() -> Self {
        Self {
            quantity: 0,
            sales: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowChanges {
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity_change_pct: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub sales_change_pct: Decimal,
}

/// A product or category seen across both periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub id: EntityId,
    pub name: String,
    pub current: SalesSnapshot,
    pub previous: SalesSnapshot,
    pub changes: RowChanges,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesChanges {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_sales_change_pct: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_orders_change_pct: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_order_value_change_pct: Decimal,
}

/// Period-over-period order totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesComparison {
    pub current_period: PeriodMetrics,
    pub previous_period: PeriodMetrics,
    pub changes: SalesChanges,
}

/// Period-over-period figures per product or per category, with the totals of
/// the same window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityComparison {
    pub kind: EntityKind,
    pub summary: SalesComparison,
    pub rows: Vec<ComparisonRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(id: EntityId, name: &str, quantity: i64, sales: Decimal) -> EntitySales {
        EntitySales {
            id,
            name: name.to_string(),
            quantity,
            sales,
        }
    }

    #[test]
    fn average_order_value_is_zero_without_orders() {
        let metrics = PeriodMetrics::new(dec!(0), 0);
        assert_eq!(metrics.average_order_value, Decimal::ZERO);
    }

    #[test]
    fn average_order_value_divides_sales_by_orders() {
        let metrics = PeriodMetrics::new(dec!(250.00), 4);
        assert_eq!(metrics.average_order_value, dec!(62.5));
    }

    #[test]
    fn map_keeps_one_entry_per_id_in_insertion_order() {
        let map: EntitySalesMap = vec![
            record(3, "Maize", 4, dec!(40)),
            record(1, "Honey", 2, dec!(30)),
            record(3, "Maize (white)", 5, dec!(50)),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        let ids: Vec<_> = map.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(map.get(3).unwrap().name, "Maize (white)");
        assert!(!map.contains(2));
    }

    #[test]
    fn sales_comparison_serializes_with_period_keys() {
        let comparison = SalesComparison {
            current_period: PeriodMetrics::new(dec!(100), 2),
            previous_period: PeriodMetrics::zero(),
            changes: SalesChanges {
                total_sales_change_pct: dec!(100),
                total_orders_change_pct: dec!(100),
                average_order_value_change_pct: dec!(100),
            },
        };
        let json = serde_json::to_value(&comparison).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("current_period"));
        assert!(object.contains_key("previous_period"));
        assert!(object.contains_key("changes"));
    }

    #[test]
    fn figures_are_json_numbers_and_money_is_in_cents() {
        let json = serde_json::to_value(PeriodMetrics::new(dec!(100), 3)).unwrap();

        assert_eq!(json["total_orders"], serde_json::json!(3));
        assert_eq!(json["total_sales"].as_f64(), Some(100.0));
        let average = json["average_order_value"].as_f64().unwrap();
        assert!((average - 33.33).abs() < 1e-9, "got {average}");

        let changes = RowChanges {
            quantity_change_pct: dec!(-12.5),
            sales_change_pct: dec!(-100),
        };
        let json = serde_json::to_value(changes).unwrap();
        assert_eq!(json["quantity_change_pct"].as_f64(), Some(-12.5));
        assert_eq!(json["sales_change_pct"].as_f64(), Some(-100.0));
    }

    #[test]
    fn row_reads_back_from_json_numbers() {
        let row: ComparisonRow = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Cassava",
            "current": { "quantity": 4, "sales": 48.5 },
            "previous": { "quantity": 0, "sales": 0 },
            "changes": { "quantity_change_pct": 100, "sales_change_pct": 100 }
        }))
        .unwrap();

        assert_eq!(row.current.sales, dec!(48.5));
        assert_eq!(row.changes.sales_change_pct, dec!(100));
    }
}
