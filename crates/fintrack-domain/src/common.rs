//! Month arithmetic and domain errors shared by finance records.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};

/// Errors raised when raw values cannot be mapped onto domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    UnknownTransactionKind(String),
    InvalidMonth { year: i32, month: u32 },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::UnknownTransactionKind(value) => {
                write!(f, "unknown transaction kind `{value}`")
            }
            DomainError::InvalidMonth { year, month } => {
                write!(f, "invalid calendar month {year}-{month:02}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Returns the first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// Returns the first day of the month following the one containing `date`.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let start = first_of_month(date);
    start + Duration::days(days_in_month(start.year(), start.month()) as i64)
}

/// Moves a date by whole calendar months, landing on the first of the target month.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut cursor = first_of_month(date);
    if months >= 0 {
        for _ in 0..months {
            cursor = first_of_next_month(cursor);
        }
    } else {
        for _ in 0..months.unsigned_abs() {
            cursor = first_of_month(cursor - Duration::days(1));
        }
    }
    cursor
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_of_month_truncates_day() {
        assert_eq!(first_of_month(date(2024, 2, 29)), date(2024, 2, 1));
        assert_eq!(first_of_month(date(2024, 2, 1)), date(2024, 2, 1));
    }

    #[test]
    fn next_month_rolls_over_year_end() {
        assert_eq!(first_of_next_month(date(2023, 12, 31)), date(2024, 1, 1));
        assert_eq!(first_of_next_month(date(2024, 2, 10)), date(2024, 3, 1));
    }

    #[test]
    fn shift_months_moves_both_directions() {
        assert_eq!(shift_months(date(2024, 3, 15), -3), date(2023, 12, 1));
        assert_eq!(shift_months(date(2024, 11, 30), 2), date(2025, 1, 1));
        assert_eq!(shift_months(date(2024, 5, 5), 0), date(2024, 5, 1));
    }

    #[test]
    fn february_length_tracks_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }
}
