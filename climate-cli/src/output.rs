use climate_core::{
    AirQuality, CityClimateRecord, HistoricalYearPoint, MonthlyPrecipitationPoint, RegionalAverage,
};
use serde::Serialize;

/// Print `value` as pretty JSON when `json` is set, otherwise with `human`.
pub fn emit<T: Serialize + ?Sized>(
    json: bool,
    value: &T,
    human: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human(value);
    }
    Ok(())
}

pub fn print_cities(records: &[CityClimateRecord]) {
    println!(
        "{:>3}  {:<20} {:<16} {:>7} {:>9} {:>8} {:>5} {:>6}",
        "id", "city", "country", "temp°C", "rain mm/y", "wind", "hum%", "hPa"
    );
    for r in records {
        println!(
            "{:>3}  {:<20} {:<16} {:>7.1} {:>9} {:>8.1} {:>5} {:>6}",
            r.id,
            r.city,
            r.country,
            r.temperature_c,
            r.precipitation_mm_year,
            r.wind_kmh,
            r.humidity_pct,
            r.pressure_hpa,
        );
    }
    println!("\nAnnual precipitation is an estimate.");
}

pub fn print_history(points: &[HistoricalYearPoint]) {
    for p in points {
        println!("{}  {:>6.1} °C", p.year, p.temperature_c);
    }
}

pub fn print_regions(regions: &[RegionalAverage]) {
    for r in regions {
        println!("{:<12} {:>6.1} °C", r.name, r.temperature_c);
    }
}

pub fn print_rainfall(points: &[MonthlyPrecipitationPoint]) {
    let max = points.iter().map(|p| p.amount_mm).max().unwrap_or(0).max(1);
    for p in points {
        let bar = "█".repeat(bar_width(p.amount_mm, max));
        println!("{}  {:>5} mm  {bar}", p.month, p.amount_mm);
    }
}

const BAR_WIDTH: u64 = 40;

/// Bar length for `amount` scaled so that `max` fills [`BAR_WIDTH`] cells.
fn bar_width(amount: u32, max: u32) -> usize {
    (u64::from(amount) * BAR_WIDTH / u64::from(max.max(1))) as usize
}

pub fn print_co2(ppm: &u32) {
    println!("CO₂ ≈ {ppm} ppm (estimate)");
}

pub fn print_air_quality(air: &AirQuality) {
    println!("PM10   {:>7.1} μg/m³", air.pm10);
    println!("PM2.5  {:>7.1} μg/m³", air.pm2_5);
    println!("CO     {:>7.1} μg/m³", air.carbon_monoxide);
    println!("NO₂    {:>7.1} μg/m³", air.nitrogen_dioxide);
    println!("O₃     {:>7.1} μg/m³", air.ozone);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_largest_month() {
        assert_eq!(bar_width(120, 120), 40);
        assert_eq!(bar_width(60, 120), 20);
        assert_eq!(bar_width(0, 0), 0);
    }

    #[test]
    fn huge_amounts_do_not_overflow() {
        assert_eq!(bar_width(u32::MAX, u32::MAX), 40);
        assert_eq!(bar_width(u32::MAX / 2, u32::MAX), 19);
    }
}
