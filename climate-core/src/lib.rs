//! Core library for the `climate` CLI.
//!
//! This crate defines:
//! - Raw fetchers for the Open-Meteo weather and air-quality endpoints
//! - The aggregation layer turning them into chart-ready, always-populated records
//! - A client for the conversational climate assistant
//! - Configuration handling
//!
//! It is used by `climate-cli`, but can also be reused by other binaries or services.

pub mod aggregate;
pub mod chat;
pub mod config;
pub mod error;
pub mod fallback;
pub mod locations;
pub mod model;
pub mod provider;
pub mod series;

#[cfg(test)]
mod test_support;

pub use aggregate::ClimateAggregator;
pub use chat::{ChatBackend, ChatMessage, ChatSession, Sender, SessionId, WebhookChat};
pub use config::Config;
pub use error::ApiError;
pub use fallback::{FallbackSource, SeededSource, ThreadRngSource};
pub use model::{
    AirQuality, CityClimateRecord, CurrentConditions, DailySeries, HistoricalYearPoint,
    LocationQuery, MonthlyPrecipitationPoint, RegionalAverage,
};
pub use provider::{WeatherSource, open_meteo::OpenMeteoSource};
