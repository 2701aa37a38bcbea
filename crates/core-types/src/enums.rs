use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a marketplace order, as stored in `orders.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// The literal stored in the database column.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether orders in this status count towards sales figures.
    pub fn counts_as_sale(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled)
    }

    /// Column literals of every status that counts towards sales, for use as
    /// an SQL array parameter.
    pub fn sale_literals() -> Vec<&'static str> {
        Self::ALL
            .iter()
            .filter(|status| status.counts_as_sale())
            .map(|status| status.as_str())
            .collect()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The grouping key of a per-entity comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Product,
    Category,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Product => f.write_str("product"),
            EntityKind::Category => f.write_str("category"),
        }
    }
}
