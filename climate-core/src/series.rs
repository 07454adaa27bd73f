//! Pure reshaping of provider payloads into chart-ready aggregates.

use chrono::NaiveDate;

use crate::{
    fallback::FallbackSource,
    model::{MonthlyPrecipitationPoint, round1},
};

pub const MONTH_LABELS: [&str; 12] =
    ["Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic"];

/// Annual precipitation estimate from today's total.
///
/// `round(today * 365)` when positive, otherwise a placeholder in `[400, 1400)`.
pub fn annualize_precipitation(today_mm: f64, fallback: &dyn FallbackSource) -> u32 {
    let annual = (today_mm * 365.0).round();
    if annual > 0.0 { annual as u32 } else { fallback.sample(400.0, 1400.0).floor() as u32 }
}

/// Mean of the present daily values, rounded to 0.1. `None` if no value is present.
pub fn mean_temperature(daily: &[Option<f64>]) -> Option<f64> {
    let (sum, count) = daily.iter().flatten().fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| round1(sum / count as f64))
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

pub fn days_in_months(year: i32) -> [usize; 12] {
    let feb = if is_leap_year(year) { 29 } else { 28 };
    [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
}

/// First and last day of `year`, if representable.
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((NaiveDate::from_ymd_opt(year, 1, 1)?, NaiveDate::from_ymd_opt(year, 12, 31)?))
}

/// Split a Jan 1 based daily series into calendar months and total each one.
///
/// Days missing from the end of the series contribute nothing; null days count as zero.
pub fn monthly_totals(year: i32, daily_mm: &[Option<f64>]) -> Vec<MonthlyPrecipitationPoint> {
    let mut offset = 0;
    MONTH_LABELS
        .iter()
        .zip(days_in_months(year))
        .map(|(label, days)| {
            let start = offset.min(daily_mm.len());
            let end = (offset + days).min(daily_mm.len());
            offset += days;

            let total: f64 = daily_mm[start..end].iter().flatten().sum();
            MonthlyPrecipitationPoint { month: label.to_string(), amount_mm: total.round() as u32 }
        })
        .collect()
}

/// Placeholder months with totals in `[40, 120)`.
pub fn estimated_monthly_totals(fallback: &dyn FallbackSource) -> Vec<MonthlyPrecipitationPoint> {
    MONTH_LABELS
        .iter()
        .map(|label| MonthlyPrecipitationPoint {
            month: label.to_string(),
            amount_mm: fallback.sample(40.0, 120.0).floor() as u32,
        })
        .collect()
}
