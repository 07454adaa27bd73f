use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::locations::Location;

/// Coordinates sent to the provider. Values are passed through unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationQuery {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationQuery {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    /// Precipitation so far today.
    pub precipitation_mm: f64,
    pub wind_kmh: f64,
    pub pressure_hpa: f64,
}

/// Daily values for an inclusive date range, indexed by day offset from `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub start: NaiveDate,
    pub temperature_mean_c: Vec<Option<f64>>,
    pub precipitation_sum_mm: Vec<Option<f64>>,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.temperature_mean_c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature_mean_c.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityClimateRecord {
    pub id: u32,
    pub city: String,
    pub country: String,
    /// `[longitude, latitude]`, map order.
    pub coordinates: [f64; 2],
    pub temperature_c: f64,
    /// Estimate only: today's precipitation annualized, or a placeholder.
    pub precipitation_mm_year: u32,
    pub wind_kmh: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
}

impl CityClimateRecord {
    pub fn from_conditions(
        location: &Location,
        conditions: &CurrentConditions,
        precipitation_mm_year: u32,
    ) -> Self {
        Self {
            id: location.id,
            city: location.city.to_string(),
            country: location.country.to_string(),
            coordinates: location.coordinates(),
            temperature_c: round1(conditions.temperature_c),
            precipitation_mm_year,
            wind_kmh: round1(conditions.wind_kmh),
            humidity_pct: conditions.humidity_pct.round().clamp(0.0, 100.0) as u8,
            pressure_hpa: conditions.pressure_hpa.round() as u32,
        }
    }

    /// Record used when the live fetch for `location` failed.
    pub fn fallback(location: &Location) -> Self {
        Self {
            id: location.id,
            city: location.city.to_string(),
            country: location.country.to_string(),
            coordinates: location.coordinates(),
            temperature_c: 20.0,
            precipitation_mm_year: 800,
            wind_kmh: 10.0,
            humidity_pct: 60,
            pressure_hpa: 1013,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalYearPoint {
    pub year: String,
    pub temperature_c: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPrecipitationPoint {
    pub month: String,
    pub amount_mm: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalAverage {
    pub name: String,
    pub temperature_c: f64,
}

/// Current pollutant concentrations, all in μg/m³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    pub pm10: f64,
    pub pm2_5: f64,
    pub carbon_monoxide: f64,
    pub nitrogen_dioxide: f64,
    pub ozone: f64,
}

impl Default for AirQuality {
    fn default() -> Self {
        Self {
            pm10: 20.0,
            pm2_5: 10.0,
            carbon_monoxide: 200.0,
            nitrogen_dioxide: 15.0,
            ozone: 50.0,
        }
    }
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::CITIES;

    #[test]
    fn record_rounds_live_values() {
        let conditions = CurrentConditions {
            temperature_c: 27.46,
            humidity_pct: 71.6,
            precipitation_mm: 0.0,
            wind_kmh: 12.34,
            pressure_hpa: 1009.5,
        };

        let record = CityClimateRecord::from_conditions(&CITIES[12], &conditions, 913);

        assert_eq!(record.city, "Caracas");
        assert_eq!(record.coordinates, [-66.9036, 10.4806]);
        assert_eq!(record.temperature_c, 27.5);
        assert_eq!(record.wind_kmh, 12.3);
        assert_eq!(record.humidity_pct, 72);
        assert_eq!(record.pressure_hpa, 1010);
        assert_eq!(record.precipitation_mm_year, 913);
    }

    #[test]
    fn fallback_record_uses_fixed_defaults() {
        let record = CityClimateRecord::fallback(&CITIES[0]);

        assert_eq!(record.id, 1);
        assert_eq!(record.temperature_c, 20.0);
        assert_eq!(record.precipitation_mm_year, 800);
        assert_eq!(record.wind_kmh, 10.0);
        assert_eq!(record.humidity_pct, 60);
        assert_eq!(record.pressure_hpa, 1013);
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(15.96), 16.0);
        assert_eq!(round1(-10.04), -10.0);
        assert_eq!(round1(3.25), 3.3);
    }
}
