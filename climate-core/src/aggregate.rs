//! Chart-ready climate aggregates.
//!
//! Every operation here always returns a complete result: a failed upstream call
//! is logged and replaced by a fixed or pseudo-random placeholder, so one bad
//! location never affects its siblings.

use chrono::{Datelike, Local};
use futures::future::join_all;

use crate::{
    fallback::{FallbackSource, ThreadRngSource},
    locations::{CITIES, Location, REGIONS, Region},
    model::{
        AirQuality, CityClimateRecord, HistoricalYearPoint, LocationQuery,
        MonthlyPrecipitationPoint, RegionalAverage, round1,
    },
    provider::WeatherSource,
    series,
};

/// Number of calendar years in the historical temperature series.
pub const HISTORY_YEARS: i32 = 6;

#[derive(Debug)]
pub struct ClimateAggregator {
    source: Box<dyn WeatherSource>,
    fallback: Box<dyn FallbackSource>,
}

impl ClimateAggregator {
    pub fn new(source: Box<dyn WeatherSource>) -> Self {
        Self::with_fallback(source, Box::new(ThreadRngSource))
    }

    pub fn with_fallback(source: Box<dyn WeatherSource>, fallback: Box<dyn FallbackSource>) -> Self {
        Self { source, fallback }
    }

    /// Current climate for every city in [`CITIES`], in list order.
    pub async fn all_cities(&self) -> Vec<CityClimateRecord> {
        self.cities(CITIES).await
    }

    /// Current climate for `locations`, one record per location in input order.
    pub async fn cities(&self, locations: &[Location]) -> Vec<CityClimateRecord> {
        join_all(locations.iter().map(|location| self.city(location))).await
    }

    async fn city(&self, location: &Location) -> CityClimateRecord {
        match self.source.current(&location.query()).await {
            Ok(conditions) => {
                let annual = series::annualize_precipitation(
                    conditions.precipitation_mm,
                    self.fallback.as_ref(),
                );
                CityClimateRecord::from_conditions(location, &conditions, annual)
            }
            Err(err) => {
                log::error!("Error fetching data for {}: {err}", location.city);
                CityClimateRecord::fallback(location)
            }
        }
    }

    /// Mean yearly temperature for the last [`HISTORY_YEARS`] years, oldest first.
    pub async fn historical_temperatures(&self, location: &LocationQuery) -> Vec<HistoricalYearPoint> {
        self.historical_temperatures_ending(location, current_year()).await
    }

    /// Like [`historical_temperatures`](Self::historical_temperatures), ending at `last_year`.
    pub async fn historical_temperatures_ending(
        &self,
        location: &LocationQuery,
        last_year: i32,
    ) -> Vec<HistoricalYearPoint> {
        // Near i32::MIN the window shifts forward so it still spans HISTORY_YEARS years.
        let first_year = last_year.saturating_sub(HISTORY_YEARS - 1);
        join_all((0..HISTORY_YEARS).map(|i| self.year_mean(location, first_year + i))).await
    }

    async fn year_mean(&self, location: &LocationQuery, year: i32) -> HistoricalYearPoint {
        let temperature_c = match self.fetch_year_mean(location, year).await {
            Some(mean) => mean,
            None => self.fallback.sample(15.0, 17.0),
        };

        HistoricalYearPoint { year: year.to_string(), temperature_c }
    }

    async fn fetch_year_mean(&self, location: &LocationQuery, year: i32) -> Option<f64> {
        let Some((start, end)) = series::year_bounds(year) else {
            log::error!("Error fetching historical data for {year}: year out of range");
            return None;
        };

        match self.source.daily(location, start, end).await {
            Ok(daily) => {
                let mean = series::mean_temperature(&daily.temperature_mean_c);
                if mean.is_none() {
                    log::error!("Error fetching historical data for {year}: no temperature values");
                }
                mean
            }
            Err(err) => {
                log::error!("Error fetching historical data for {year}: {err}");
                None
            }
        }
    }

    /// Current temperature for each of [`REGIONS`], in list order.
    pub async fn regional_averages(&self) -> Vec<RegionalAverage> {
        self.regions(REGIONS).await
    }

    pub async fn regions(&self, regions: &[Region]) -> Vec<RegionalAverage> {
        join_all(regions.iter().map(|region| self.region(region))).await
    }

    async fn region(&self, region: &Region) -> RegionalAverage {
        let temperature_c = match self.source.current(&region.query()).await {
            Ok(conditions) => round1(conditions.temperature_c),
            Err(err) => {
                log::error!("Error fetching data for {}: {err}", region.name);
                region.fallback_temperature_c
            }
        };

        RegionalAverage { name: region.name.to_string(), temperature_c }
    }

    /// Monthly precipitation totals for the current calendar year.
    pub async fn monthly_precipitation(
        &self,
        location: &LocationQuery,
    ) -> Vec<MonthlyPrecipitationPoint> {
        self.monthly_precipitation_for_year(location, current_year()).await
    }

    pub async fn monthly_precipitation_for_year(
        &self,
        location: &LocationQuery,
        year: i32,
    ) -> Vec<MonthlyPrecipitationPoint> {
        let Some((start, end)) = series::year_bounds(year) else {
            log::error!("Error fetching monthly precipitation: year {year} out of range");
            return series::estimated_monthly_totals(self.fallback.as_ref());
        };

        match self.source.daily(location, start, end).await {
            Ok(daily) => series::monthly_totals(year, &daily.precipitation_sum_mm),
            Err(err) => {
                log::error!("Error fetching monthly precipitation: {err}");
                series::estimated_monthly_totals(self.fallback.as_ref())
            }
        }
    }

    /// Current air quality, or the fixed defaults when unavailable.
    pub async fn air_quality(&self, location: &LocationQuery) -> AirQuality {
        self.source.air_quality(location).await.unwrap_or_else(|err| {
            log::error!("Error fetching air quality: {err}");
            AirQuality::default()
        })
    }

    /// Atmospheric CO₂ in ppm, a placeholder in `[418, 422]`. No network call.
    pub fn estimate_co2(&self) -> u32 {
        (418.0 + self.fallback.sample(0.0, 4.0)).round() as u32
    }
}

fn current_year() -> i32 {
    Local::now().year()
}
