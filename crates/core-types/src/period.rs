use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::error::CoreError;

/// An inclusive range of calendar days.
///
/// Queries treat it as the half-open instant range
/// `[start 00:00 UTC, (end + 1 day) 00:00 UTC)`, so every order placed on the
/// `end` day is included regardless of its time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReportPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportPeriod {
    /// Creates a period, rejecting a start that falls after the end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end || end.succ_opt().is_none() {
            return Err(CoreError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }

    /// The half-open `[from, until)` instant bounds used in SQL.
    pub fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        // `new` guarantees `end` has a successor.
        let until = self.end.succ_opt().unwrap_or(self.end);
        (
            self.start.and_time(NaiveTime::MIN).and_utc(),
            until.and_time(NaiveTime::MIN).and_utc(),
        )
    }

    /// The period of the same length that ends the day before this one starts.
    ///
    /// `2024-01-01..=2024-01-31` is preceded by `2023-12-01..=2023-12-31`.
    pub fn preceding(&self) -> Result<Self, CoreError> {
        let out_of_range = || {
            CoreError::InvalidInput(
                "period".to_string(),
                format!("no preceding period for {self}"),
            )
        };
        let end = self.start.pred_opt().ok_or_else(out_of_range)?;
        let start = end
            .checked_sub_days(Days::new(self.days() - 1))
            .ok_or_else(out_of_range)?;
        Self::new(start, end)
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Optional narrowing of a report to one vendor and/or one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportFilter {
    pub vendor_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl ReportFilter {
    pub fn new(vendor_id: Option<i64>, category_id: Option<i64>) -> Self {
        Self {
            vendor_id,
            category_id,
        }
    }
}

/// A single aggregation window: one period plus the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodQuery {
    pub period: ReportPeriod,
    pub filter: ReportFilter,
}

/// The input of every comparison: two periods under the same filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonRequest {
    pub current: ReportPeriod,
    pub previous: ReportPeriod,
    pub filter: ReportFilter,
}

impl ComparisonRequest {
    pub fn new(current: ReportPeriod, previous: ReportPeriod, filter: ReportFilter) -> Self {
        Self {
            current,
            previous,
            filter,
        }
    }

    /// Builds a request whose previous period is `current.preceding()`.
    pub fn against_preceding(
        current: ReportPeriod,
        filter: ReportFilter,
    ) -> Result<Self, CoreError> {
        Ok(Self::new(current, current.preceding()?, filter))
    }

    /// Builds a request from raw dates as they arrive from the CLI or a query
    /// string. The previous period is either given in full or derived with
    /// `ReportPeriod::preceding`.
    pub fn from_dates(
        current_start: NaiveDate,
        current_end: NaiveDate,
        previous_start: Option<NaiveDate>,
        previous_end: Option<NaiveDate>,
        filter: ReportFilter,
    ) -> Result<Self, CoreError> {
        let current = ReportPeriod::new(current_start, current_end)?;
        match (previous_start, previous_end) {
            (Some(start), Some(end)) => Ok(Self::new(current, ReportPeriod::new(start, end)?, filter)),
            (None, None) => Self::against_preceding(current, filter),
            _ => Err(CoreError::InvalidInput(
                "previous period".to_string(),
                "previous start and end must be given together".to_string(),
            )),
        }
    }

    pub fn current_query(&self) -> PeriodQuery {
        PeriodQuery {
            period: self.current,
            filter: self.filter,
        }
    }

    pub fn previous_query(&self) -> PeriodQuery {
        PeriodQuery {
            period: self.previous,
            filter: self.filter,
        }
    }
}
