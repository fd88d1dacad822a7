use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A point on the map in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidInput(format!(
                "latitude {} out of range",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidInput(format!(
                "longitude {} out of range",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// What the device location collaborator reports.
///
/// `Unavailable` covers both a denied permission and a failed fix; the UI shows
/// it as its own screen rather than as a listing error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationStatus {
    Available(Coordinate),
    Unavailable,
}

impl LocationStatus {
    /// Builds a status from an optional fixed position (e.g. from configuration)
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => match Coordinate::new(lat, lon) {
                Ok(coordinate) => Self::Available(coordinate),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring invalid location");
                    Self::Unavailable
                }
            },
            _ => Self::Unavailable,
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Available(coordinate) => Some(*coordinate),
            Self::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}
