use super::error::ListingServiceError;
use super::{ListingOutcome, ListingQuery, ListingSource};
use crate::domain::location::Coordinate;
use crate::infrastructure::repositories::ListingRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Fetches nearby restaurants from the remote provider when one is configured,
/// falling back to the offline catalog when it fails.
///
/// Overlapping calls are not serialized here; the deck decides which result wins.
pub struct ListingService {
    remote: Option<Arc<dyn ListingRepository>>,
    local: Arc<dyn ListingRepository>,
}

impl ListingService {
    pub fn new(
        remote: Option<Arc<dyn ListingRepository>>,
        local: Arc<dyn ListingRepository>,
    ) -> Self {
        Self { remote, local }
    }

    /// Strategy a fetch will try first
    pub fn primary_source(&self) -> ListingSource {
        if self.remote.is_some() {
            ListingSource::Remote
        } else {
            ListingSource::Local
        }
    }
}

#[async_trait]
pub trait ListingServiceApi: Send + Sync {
    /// Fetch restaurants within `radius_miles` of `origin`
    async fn fetch(
        &self,
        origin: Coordinate,
        radius_miles: f64,
        cuisine: Option<&str>,
    ) -> Result<ListingOutcome, ListingServiceError>;
}

#[async_trait]
impl ListingServiceApi for ListingService {
    async fn fetch(
        &self,
        origin: Coordinate,
        radius_miles: f64,
        cuisine: Option<&str>,
    ) -> Result<ListingOutcome, ListingServiceError> {
        let query = ListingQuery::new(origin, radius_miles, cuisine)?;

        tracing::info!(
            latitude = origin.latitude,
            longitude = origin.longitude,
            radius_meters = query.radius_meters,
            cuisine = ?query.cuisine,
            source = ?self.primary_source(),
            "Fetching restaurants"
        );

        let Some(remote) = &self.remote else {
            let restaurants = self.local.search(&query).await?;
            return Ok(ListingOutcome {
                restaurants,
                source: ListingSource::Local,
                degraded: false,
            });
        };

        match remote.search(&query).await {
            Ok(restaurants) => {
                tracing::info!(
                    provider = remote.name(),
                    count = restaurants.len(),
                    "Remote listing loaded"
                );
                Ok(ListingOutcome {
                    restaurants,
                    source: ListingSource::Remote,
                    degraded: false,
                })
            }
            Err(remote_err) => {
                tracing::warn!(
                    provider = remote.name(),
                    error = %remote_err,
                    external = remote_err.is_external(),
                    "Remote listing failed, falling back to {}",
                    self.local.name()
                );

                match self.local.search(&query).await {
                    Ok(restaurants) => Ok(ListingOutcome {
                        restaurants,
                        source: ListingSource::Local,
                        degraded: true,
                    }),
                    Err(local_err) => {
                        tracing::error!(error = %local_err, "Offline listing failed as well");
                        Err(ListingServiceError::Unavailable {
                            remote: remote_err.to_string(),
                            local: local_err.to_string(),
                        })
                    }
                }
            }
        }
    }
}
