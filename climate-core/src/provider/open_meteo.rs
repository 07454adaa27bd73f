use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    error::{ApiError, truncate_body},
    model::{AirQuality, CurrentConditions, DailySeries, LocationQuery},
};

use super::WeatherSource;

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,precipitation,wind_speed_10m,surface_pressure";
const DAILY_FIELDS: &str = "temperature_2m_mean,precipitation_sum";
const AIR_QUALITY_FIELDS: &str = "pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,ozone";

/// Open-Meteo forecast and air-quality endpoints. No API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    forecast_url: String,
    air_quality_url: String,
    http: Client,
}

impl Default for OpenMeteoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoSource {
    pub fn new() -> Self {
        Self::with_urls(FORECAST_URL.to_string(), AIR_QUALITY_URL.to_string())
    }

    pub fn with_urls(forecast_url: String, air_quality_url: String) -> Self {
        Self { forecast_url, air_quality_url, http: Client::new() }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        log::debug!("GET {url} {query:?}");

        let res = self.http.get(url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn location_params(location: &LocationQuery) -> [(&'static str, String); 2] {
    [("latitude", location.latitude.to_string()), ("longitude", location.longitude.to_string())]
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    precipitation: f64,
    wind_speed_10m: f64,
    surface_pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OmCurrentResponse {
    current: OmCurrent,
}

impl From<OmCurrent> for CurrentConditions {
    fn from(c: OmCurrent) -> Self {
        Self {
            temperature_c: c.temperature_2m,
            humidity_pct: c.relative_humidity_2m,
            precipitation_mm: c.precipitation,
            wind_kmh: c.wind_speed_10m,
            pressure_hpa: c.surface_pressure,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    temperature_2m_mean: Vec<Option<f64>>,
    precipitation_sum: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct OmDailyResponse {
    daily: OmDaily,
}

impl OmDaily {
    fn into_series(self, requested_start: NaiveDate) -> Result<DailySeries, ApiError> {
        let days = self.time.len();
        if self.temperature_2m_mean.len() != days || self.precipitation_sum.len() != days {
            return Err(ApiError::Schema(format!(
                "daily series length mismatch: time={days}, temperature_2m_mean={}, precipitation_sum={}",
                self.temperature_2m_mean.len(),
                self.precipitation_sum.len(),
            )));
        }

        let start = match self.time.first() {
            Some(first) => NaiveDate::parse_from_str(first, "%Y-%m-%d")
                .map_err(|e| ApiError::Schema(format!("invalid daily date '{first}': {e}")))?,
            None => requested_start,
        };
        if start != requested_start {
            return Err(ApiError::Schema(format!(
                "daily series starts at {start}, requested {requested_start}"
            )));
        }

        Ok(DailySeries {
            start,
            temperature_mean_c: self.temperature_2m_mean,
            precipitation_sum_mm: self.precipitation_sum,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OmAirQualityResponse {
    current: AirQuality,
}

#[async_trait]
impl WeatherSource for OpenMeteoSource {
    async fn current(&self, location: &LocationQuery) -> Result<CurrentConditions, ApiError> {
        let [lat, lon] = location_params(location);
        let parsed: OmCurrentResponse = self
            .get_json(
                &self.forecast_url,
                &[
                    lat,
                    lon,
                    ("current", CURRENT_FIELDS.to_string()),
                    ("timezone", "auto".to_string()),
                ],
            )
            .await?;

        Ok(parsed.current.into())
    }

    async fn daily(
        &self,
        location: &LocationQuery,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailySeries, ApiError> {
        let [lat, lon] = location_params(location);
        let parsed: OmDailyResponse = self
            .get_json(
                &self.forecast_url,
                &[
                    lat,
                    lon,
                    ("start_date", start.format("%Y-%m-%d").to_string()),
                    ("end_date", end.format("%Y-%m-%d").to_string()),
                    ("daily", DAILY_FIELDS.to_string()),
                    ("timezone", "auto".to_string()),
                ],
            )
            .await?;

        parsed.daily.into_series(start)
    }

    async fn air_quality(&self, location: &LocationQuery) -> Result<AirQuality, ApiError> {
        let [lat, lon] = location_params(location);
        let parsed: OmAirQualityResponse = self
            .get_json(
                &self.air_quality_url,
                &[
                    lat,
                    lon,
                    ("current", AIR_QUALITY_FIELDS.to_string()),
                    ("timezone", "auto".to_string()),
                ],
            )
            .await?;

        Ok(parsed.current)
    }
}
