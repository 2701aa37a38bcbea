use crate::{AppState, error::AppError};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use core_types::{ComparisonRequest, EntityComparison, ReportFilter, SalesComparison};
use database::PeriodAggregator;
use serde::Deserialize;
use std::sync::Arc;

/// Query string shared by the three report endpoints.
///
/// `previous_start` / `previous_end` are optional as a pair; when both are
/// missing the previous period is the one of equal length right before the
/// current period.
#[derive(Debug, Deserialize)]
pub struct ComparisonParams {
    pub current_start: NaiveDate,
    pub current_end: NaiveDate,
    pub previous_start: Option<NaiveDate>,
    pub previous_end: Option<NaiveDate>,
    pub vendor_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl ComparisonParams {
    pub fn into_request(self) -> Result<ComparisonRequest, AppError> {
        let request = ComparisonRequest::from_dates(
            self.current_start,
            self.current_end,
            self.previous_start,
            self.previous_end,
            ReportFilter::new(self.vendor_id, self.category_id),
        )?;
        Ok(request)
    }
}

/// # GET /api/reports/sales-comparison
pub async fn get_sales_comparison<A: PeriodAggregator + 'static>(
    State(state): State<Arc<AppState<A>>>,
    Query(params): Query<ComparisonParams>,
) -> Result<Json<SalesComparison>, AppError> {
    let request = params.into_request()?;
    let comparison = state.reporter.sales_comparison(&request).await?;
    Ok(Json(comparison))
}

/// # GET /api/reports/product-comparison
pub async fn get_product_comparison<A: PeriodAggregator + 'static>(
    State(state): State<Arc<AppState<A>>>,
    Query(params): Query<ComparisonParams>,
) -> Result<Json<EntityComparison>, AppError> {
    let request = params.into_request()?;
    let comparison = state.reporter.product_comparison(&request).await?;
    Ok(Json(comparison))
}

/// # GET /api/reports/category-comparison
pub async fn get_category_comparison<A: PeriodAggregator + 'static>(
    State(state): State<Arc<AppState<A>>>,
    Query(params): Query<ComparisonParams>,
) -> Result<Json<EntityComparison>, AppError> {
    let request = params.into_request()?;
    let comparison = state.reporter.category_comparison(&request).await?;
    Ok(Json(comparison))
}
