use crate::domain::listing::ListingQuery;
use crate::domain::restaurant::RestaurantRecord;
use crate::error::AppResult;
use async_trait::async_trait;

/// One source of restaurant listings (remote search API, offline catalog, ...).
///
/// Implementations are responsible for:
/// - Translating the query into provider-specific parameters and limits
/// - Normalizing provider results into `RestaurantRecord`s
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Restaurants near `query.origin` within `query.radius_meters`
    ///
    /// # Errors
    /// Returns error if the provider is unreachable or its response cannot be decoded
    async fn search(&self, query: &ListingQuery) -> AppResult<Vec<RestaurantRecord>>;
}
