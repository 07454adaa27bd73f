use crate::{
    Config,
    error::ApiError,
    model::{AirQuality, CurrentConditions, DailySeries, LocationQuery},
    provider::open_meteo::OpenMeteoSource,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt::Debug;

pub mod open_meteo;

/// Raw access to the upstream weather and air-quality data.
///
/// Implementations issue exactly one request per call and never retry.
/// A non-success status surfaces as [`ApiError::Status`].
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current(&self, location: &LocationQuery) -> Result<CurrentConditions, ApiError>;

    /// Daily mean temperature and precipitation sum for `start..=end`.
    async fn daily(
        &self,
        location: &LocationQuery,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailySeries, ApiError>;

    async fn air_quality(&self, location: &LocationQuery) -> Result<AirQuality, ApiError>;
}

/// Construct the weather source described by `config`.
pub fn source_from_config(config: &Config) -> Box<dyn WeatherSource> {
    Box::new(OpenMeteoSource::with_urls(
        config.forecast_url.clone(),
        config.air_quality_url.clone(),
    ))
}
