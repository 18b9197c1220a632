//! Date windows and labelled reporting periods.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Half-open reporting window `[start, end)`.
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if end <= start {
            return Err(DateWindowError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Window covering the calendar month that contains `date`.
    pub fn month_containing(date: NaiveDate) -> Self {
        Self {
            start: first_of_month(date),
            end: first_of_next_month(date),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Last date that still falls inside the window.
    pub fn last_day(&self) -> NaiveDate {
        self.end - Duration::days(1)
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.start, self.last_day())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateWindow`] values.
pub enum DateWindowError {
    InvalidRange,
}

impl fmt::Display for DateWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindowError::InvalidRange => f.write_str("date window end must be after start"),
        }
    }
}

impl std::error::Error for DateWindowError {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// A labelled window used as one bucket of a time series.
pub struct Period {
    pub label: String,
    pub window: DateWindow,
}

impl Period {
    pub fn new(label: impl Into<String>, window: DateWindow) -> Self {
        Self {
            label: label.into(),
            window,
        }
    }

    /// Calendar month period labelled with its abbreviated month name (`"Jan"`).
    pub fn month(year: i32, month: u32) -> Result<Self, DomainError> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(DomainError::InvalidMonth { year, month })?;
        Ok(Self::containing(start))
    }

    /// Calendar month period that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let window = DateWindow::month_containing(date);
        Self {
            label: window.start.format("%b").to_string(),
            window,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.window.start
    }

    pub fn end(&self) -> NaiveDate {
        self.window.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.window.contains(date)
    }
}

/// Builds `count` consecutive month periods, oldest first, ending with the
/// month that contains `reference`.
pub fn trailing_months(reference: NaiveDate, count: u32) -> Vec<Period> {
    (0..count)
        .rev()
        .map(|offset| Period::containing(shift_months(reference, -(offset as i32))))
        .collect()
}

/// Returns the `(year, month)` pair identifying the month of `date`.
pub fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_rejects_inverted_range() {
        assert_eq!(
            DateWindow::new(date(2024, 2, 1), date(2024, 1, 1)),
            Err(DateWindowError::InvalidRange)
        );
        assert!(DateWindow::new(date(2024, 1, 1), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn month_period_is_half_open() {
        let jan = Period::month(2024, 1).expect("valid month");
        assert_eq!(jan.label, "Jan");
        assert!(jan.contains(date(2024, 1, 1)));
        assert!(jan.contains(date(2024, 1, 31)));
        assert!(!jan.contains(date(2024, 2, 1)));
        assert_eq!(jan.window.last_day(), date(2024, 1, 31));
    }

    #[test]
    fn month_rejects_out_of_range_values() {
        assert_eq!(
            Period::month(2024, 13),
            Err(DomainError::InvalidMonth {
                year: 2024,
                month: 13
            })
        );
    }

    #[test]
    fn trailing_months_are_oldest_first() {
        let periods = trailing_months(date(2024, 2, 14), 3);
        let labels: Vec<&str> = periods.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Dec", "Jan", "Feb"]);
        assert_eq!(periods[0].start(), date(2023, 12, 1));
        assert_eq!(periods[2].end(), date(2024, 3, 1));
    }

    #[test]
    fn trailing_zero_months_is_empty() {
        assert!(trailing_months(date(2024, 2, 14), 0).is_empty());
    }
}
