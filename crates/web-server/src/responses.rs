//! JSON shapes returned by the API.
//!
//! Key names are part of the public contract and are emitted in field
//! declaration order.

use database::{PrecipitationReading, Station, TemperatureObservation, TemperatureSummary};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationEntry {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Precipitation")]
    pub precipitation: Option<f64>,
}

impl From<PrecipitationReading> for PrecipitationEntry {
    fn from(reading: PrecipitationReading) -> Self {
        Self {
            date: reading.date,
            precipitation: reading.prcp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationEntry {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl From<Station> for StationEntry {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            station: station.station,
            name: station.name,
            latitude: station.latitude,
            longitude: station.longitude,
            elevation: station.elevation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TobsEntry {
    pub date: String,
    pub station: String,
    pub tobs: f64,
}

impl From<TemperatureObservation> for TobsEntry {
    fn from(observation: TemperatureObservation) -> Self {
        Self {
            date: observation.date,
            station: observation.station,
            tobs: observation.tobs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureStatsEntry {
    #[serde(rename = "Min Temperature")]
    pub min: Option<f64>,
    #[serde(rename = "Max Temperature")]
    pub max: Option<f64>,
    #[serde(rename = "Avg Temperature")]
    pub avg: Option<f64>,
}

impl TemperatureStatsEntry {
    /// The all-NULL aggregate row means "no data in range" and yields an empty list.
    pub fn from_summary(summary: TemperatureSummary) -> Vec<Self> {
        if summary.is_empty() {
            return Vec::new();
        }
        vec![Self {
            min: summary.min_tobs,
            max: summary.max_tobs,
            avg: summary.avg_tobs,
        }]
    }
}
