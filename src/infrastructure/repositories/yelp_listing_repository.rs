use super::listing_repository::ListingRepository;
use crate::domain::listing::ListingQuery;
use crate::domain::restaurant::RestaurantRecord;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const YELP_SEARCH_URL: &str = "https://api.yelp.com/v3/businesses/search";

/// Yelp rejects radii above 40km
const YELP_MAX_RADIUS_METERS: i64 = 40_000;
const YELP_RESULT_LIMIT: u32 = 20;
const DEFAULT_CATEGORY: &str = "restaurants";

#[derive(Debug, Deserialize)]
struct YelpSearchResponse {
    businesses: Vec<YelpBusiness>,
}

#[derive(Debug, Deserialize)]
struct YelpBusiness {
    id: String,
    name: String,
    image_url: Option<String>,
    rating: f64,
    distance: f64,
    #[serde(default)]
    categories: Vec<YelpCategory>,
    location: YelpLocation,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YelpCategory {
    title: String,
}

#[derive(Debug, Deserialize)]
struct YelpLocation {
    #[serde(default)]
    display_address: Vec<String>,
}

impl YelpBusiness {
    fn into_record(self) -> AppResult<RestaurantRecord> {
        // Yelp sends "" rather than null for businesses without a photo
        let image_url = self.image_url.filter(|u| !u.is_empty());

        Ok(RestaurantRecord::new(self.id, self.name, self.distance)?
            .with_image_url(image_url)
            .with_rating(self.rating)
            .with_categories(self.categories.into_iter().map(|c| c.title).collect())
            .with_address(self.location.display_address.join(", "))
            .with_detail_url(self.url))
    }
}

/// Remote listing strategy backed by the Yelp Fusion business search
pub struct YelpListingRepository {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl YelpListingRepository {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url,
            http_client,
        })
    }

    /// Radius in whole meters, clamped to what Yelp accepts
    pub fn radius_param(radius_meters: f64) -> i64 {
        (radius_meters as i64).min(YELP_MAX_RADIUS_METERS)
    }

    fn query_params(query: &ListingQuery) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", query.origin.latitude.to_string()),
            ("longitude", query.origin.longitude.to_string()),
            ("radius", Self::radius_param(query.radius_meters).to_string()),
            (
                "categories",
                query
                    .cuisine
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            ),
            ("limit", YELP_RESULT_LIMIT.to_string()),
            ("sort_by", "distance".to_string()),
        ]
    }
}

#[async_trait]
impl ListingRepository for YelpListingRepository {
    fn name(&self) -> &'static str {
        "yelp"
    }

    async fn search(&self, query: &ListingQuery) -> AppResult<Vec<RestaurantRecord>> {
        let params = Self::query_params(query);

        tracing::debug!(params = ?params, "Calling Yelp business search");

        let response = self
            .http_client
            .get(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Yelp search request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalService(format!(
                "Yelp search failed with status {}: {}",
                status, error_text
            )));
        }

        let body: YelpSearchResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse Yelp response: {}", e))
        })?;

        let restaurants = body
            .businesses
            .into_iter()
            .filter_map(|business| {
                let id = business.id.clone();
                match business.into_record() {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!(id = %id, error = %e, "Skipping invalid Yelp business");
                        None
                    }
                }
            })
            .collect();

        Ok(restaurants)
    }
}
