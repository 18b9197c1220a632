//! Period-over-period percentage change.

use serde::{Deserialize, Serialize};

/// How a presentation layer should read an increase in a metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrendPolarity {
    /// Income, balances: an increase is good news.
    GrowthIsGood,
    /// Expenses: an increase is bad news.
    GrowthIsBad,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// Signed change between a current and a previous aggregate.
///
/// `is_positive` reports the raw direction of the change only; it says
/// nothing about whether that direction is desirable.
pub struct Trend {
    pub raw_percent: f64,
    pub percent: i64,
    pub is_positive: bool,
}

impl Trend {
    fn from_raw(raw_percent: f64, is_positive: bool) -> Self {
        Self {
            raw_percent,
            // Halves round toward positive infinity: -12.5 -> -12, 12.5 -> 13.
            percent: (raw_percent + 0.5).floor() as i64,
            is_positive,
        }
    }

    /// Whether the change is good news under the given polarity.
    pub fn is_favorable(&self, polarity: TrendPolarity) -> bool {
        match polarity {
            TrendPolarity::GrowthIsGood => self.is_positive,
            TrendPolarity::GrowthIsBad => !self.is_positive || self.raw_percent == 0.0,
        }
    }

    /// Rounded magnitude of the change, for badges that show direction separately.
    pub fn magnitude(&self) -> i64 {
        self.percent.abs()
    }
}

/// Computes the percentage change from `previous` to `current`.
///
/// A zero baseline never divides: growth from nothing reads as `100`, no
/// activity in either period reads as `0`, and a drop below zero from
/// nothing reads as `-100`.
pub fn trend(current: f64, previous: f64) -> Trend {
    if previous == 0.0 {
        return if current > 0.0 {
            Trend::from_raw(100.0, true)
        } else if current == 0.0 {
            Trend::from_raw(0.0, true)
        } else {
            Trend::from_raw(-100.0, false)
        };
    }
    let delta = current - previous;
    Trend::from_raw((delta / previous) * 100.0, delta >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_to_zero_is_flat_and_positive() {
        let t = trend(0.0, 0.0);
        assert_eq!(t.percent, 0);
        assert!(t.is_positive);
    }

    #[test]
    fn growth_from_zero_is_full_increase() {
        let t = trend(100.0, 0.0);
        assert_eq!(t.percent, 100);
        assert!(t.is_positive);
    }

    #[test]
    fn negative_from_zero_is_full_decrease() {
        let t = trend(-40.0, 0.0);
        assert_eq!(t.percent, -100);
        assert!(!t.is_positive);
    }

    #[test]
    fn computes_signed_change() {
        let up = trend(150.0, 100.0);
        assert_eq!(up.percent, 50);
        assert!(up.is_positive);

        let down = trend(50.0, 100.0);
        assert_eq!(down.percent, -50);
        assert!(!down.is_positive);
    }

    #[test]
    fn keeps_unrounded_value() {
        let t = trend(110.0, 300.0);
        assert!((t.raw_percent - (-63.333_333)).abs() < 1e-4);
        assert_eq!(t.percent, -63);
        assert_eq!(t.magnitude(), 63);
    }

    #[test]
    fn equal_values_are_positive() {
        let t = trend(75.0, 75.0);
        assert_eq!(t.percent, 0);
        assert!(t.is_positive);
    }

    #[test]
    fn polarity_inverts_reading_for_expenses() {
        let rising = trend(120.0, 100.0);
        assert!(rising.is_favorable(TrendPolarity::GrowthIsGood));
        assert!(!rising.is_favorable(TrendPolarity::GrowthIsBad));

        let falling = trend(80.0, 100.0);
        assert!(falling.is_favorable(TrendPolarity::GrowthIsBad));
        assert!(!falling.is_favorable(TrendPolarity::GrowthIsGood));
    }

    #[test]
    fn halves_round_toward_positive_infinity() {
        let falling = trend(7.0, 8.0);
        assert_eq!(falling.raw_percent, -12.5);
        assert_eq!(falling.percent, -12);
        assert!(!falling.is_positive);

        let rising = trend(9.0, 8.0);
        assert_eq!(rising.raw_percent, 12.5);
        assert_eq!(rising.percent, 13);
    }
}
