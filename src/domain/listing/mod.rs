pub mod error;
pub mod service;

pub use error::ListingServiceError;
pub use service::{ListingService, ListingServiceApi};

use crate::domain::location::Coordinate;
use crate::domain::restaurant::RestaurantRecord;

pub const METERS_PER_MILE: f64 = 1609.34;

/// Message shown when results came from the offline catalog after a remote failure
pub const DEGRADED_NOTICE: &str = "Failed to load restaurants. Using offline data.";

/// Normalized search parameters handed to a listing strategy
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub origin: Coordinate,
    pub radius_meters: f64,
    pub cuisine: Option<String>,
}

impl ListingQuery {
    pub fn new(
        origin: Coordinate,
        radius_miles: f64,
        cuisine: Option<&str>,
    ) -> Result<Self, ListingServiceError> {
        if !radius_miles.is_finite() || radius_miles <= 0.0 {
            return Err(ListingServiceError::InvalidRadius(radius_miles));
        }

        let cuisine = cuisine
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(Self {
            origin,
            radius_meters: radius_miles * METERS_PER_MILE,
            cuisine,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    Remote,
    Local,
}

/// A successful fetch, possibly served by the fallback strategy
#[derive(Debug, Clone)]
pub struct ListingOutcome {
    pub restaurants: Vec<RestaurantRecord>,
    pub source: ListingSource,
    pub degraded: bool,
}

impl ListingOutcome {
    pub fn notice(&self) -> Option<&'static str> {
        self.degraded.then_some(DEGRADED_NOTICE)
    }
}
