//! Terminal tables for the `compare` command.

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use core_types::{ComparisonRequest, EntityComparison, SalesComparison};
use rust_decimal::Decimal;

fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn pct(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

pub fn sales_table(request: &ComparisonRequest, comparison: &SalesComparison) -> Table {
    let current = &comparison.current_period;
    let previous = &comparison.previous_period;
    let changes = &comparison.changes;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        Cell::new("Metric"),
        Cell::new(request.current.to_string()),
        Cell::new(request.previous.to_string()),
        Cell::new("Change"),
    ]);
    table.add_row(vec![
        Cell::new("Total sales"),
        right(money(current.total_sales)),
        right(money(previous.total_sales)),
        right(pct(changes.total_sales_change_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Orders"),
        right(current.total_orders.to_string()),
        right(previous.total_orders.to_string()),
        right(pct(changes.total_orders_change_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Average order value"),
        right(money(current.average_order_value)),
        right(money(previous.average_order_value)),
        right(pct(changes.average_order_value_change_pct)),
    ]);
    table
}

pub fn entity_table(comparison: &EntityComparison) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "ID",
        match comparison.kind {
            core_types::EntityKind::Product => "Product",
            core_types::EntityKind::Category => "Category",
        },
        "Qty (current)",
        "Qty (previous)",
        "Qty change",
        "Sales (current)",
        "Sales (previous)",
        "Sales change",
    ]);

    for row in &comparison.rows {
        table.add_row(vec![
            right(row.id.to_string()),
            Cell::new(&row.name),
            right(row.current.quantity.to_string()),
            right(row.previous.quantity.to_string()),
            right(pct(row.changes.quantity_change_pct)),
            right(money(row.current.sales)),
            right(money(row.previous.sales)),
            right(pct(row.changes.sales_change_pct)),
        ]);
    }
    table
}

/// The period totals followed by the per-entity rows.
pub fn entity_report(request: &ComparisonRequest, comparison: &EntityComparison) -> String {
    format!(
        "{}\n\n{}",
        sales_table(request, &comparison.summary),
        entity_table(comparison)
    )
}
