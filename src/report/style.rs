use std::fmt;

use colored::Colorize;
use fintrack_core::{Trend, TrendPolarity};

/// Terminal styling for report text.
///
/// Plain mode emits ASCII only and never colours, which keeps output stable
/// for pipes, screen readers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportStyle {
    pub plain: bool,
}

impl ReportStyle {
    pub fn plain() -> Self {
        Self { plain: true }
    }

    pub fn colored() -> Self {
        Self { plain: false }
    }

    pub fn header(&self, title: impl fmt::Display) -> String {
        let text = format!("=== {} ===", title);
        if self.plain {
            text
        } else {
            text.bold().to_string()
        }
    }

    pub fn section(&self, title: impl fmt::Display) -> String {
        let text = format!("--- {} ---", title);
        if self.plain {
            text
        } else {
            text.cyan().to_string()
        }
    }

    pub fn warning(&self, message: impl fmt::Display) -> String {
        if self.plain {
            format!("WARNING: {}", message)
        } else {
            format!("⚠ {}", message).yellow().to_string()
        }
    }

    pub fn good(&self, text: impl fmt::Display) -> String {
        self.tint(text.to_string(), true)
    }

    pub fn bad(&self, text: impl fmt::Display) -> String {
        self.tint(text.to_string(), false)
    }

    /// Direction and size of a change, coloured by whether it is good news.
    pub fn trend_badge(&self, trend: &Trend, polarity: TrendPolarity) -> String {
        let text = if self.plain {
            format!("{:+}%", trend.percent)
        } else {
            let arrow = if trend.is_positive { '▲' } else { '▼' };
            format!("{} {}%", arrow, trend.magnitude())
        };
        self.tint(text, trend.is_favorable(polarity))
    }

    /// Fixed-width bar for a ratio; values outside `[0, 1]` are clamped.
    pub fn bar(&self, ratio: f64, width: usize) -> String {
        let clamped = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (clamped * width as f64).round() as usize;
        let (on, off) = if self.plain { ('#', '.') } else { ('█', '░') };
        let mut bar = String::with_capacity(width * 3);
        bar.extend(std::iter::repeat(on).take(filled));
        bar.extend(std::iter::repeat(off).take(width - filled));
        bar
    }

    pub fn rule_char(&self) -> char {
        if self.plain {
            '-'
        } else {
            '─'
        }
    }

    fn tint(&self, text: String, good: bool) -> String {
        if self.plain {
            text
        } else if good {
            text.green().to_string()
        } else {
            text.red().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrack_core::trend;

    #[test]
    fn plain_badges_are_signed_percentages() {
        let style = ReportStyle::plain();
        assert_eq!(
            style.trend_badge(&trend(150.0, 100.0), TrendPolarity::GrowthIsGood),
            "+50%"
        );
        assert_eq!(
            style.trend_badge(&trend(50.0, 100.0), TrendPolarity::GrowthIsBad),
            "-50%"
        );
        assert_eq!(
            style.trend_badge(&trend(0.0, 0.0), TrendPolarity::GrowthIsGood),
            "+0%"
        );
    }

    #[test]
    fn bar_clamps_ratio() {
        let style = ReportStyle::plain();
        assert_eq!(style.bar(0.5, 10), "#####.....");
        assert_eq!(style.bar(1.7, 4), "####");
        assert_eq!(style.bar(-0.2, 4), "....");
        assert_eq!(style.bar(f64::NAN, 3), "...");
    }

    #[test]
    fn plain_mode_has_no_escape_codes() {
        let style = ReportStyle::plain();
        assert_eq!(style.header("Dashboard"), "=== Dashboard ===");
        assert_eq!(style.warning("careful"), "WARNING: careful");
        assert!(!style.bad("x").contains('\u{1b}'));
    }
}
