use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

const MILES_PER_METER: f64 = 0.000621371;

/// One venue as shown on a card or in the favorites list.
///
/// Identity is the `id` alone: two records with the same id are equal even if
/// their display fields differ (a provider may refresh rating or distance).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantRecord {
    id: String,
    name: String,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    rating: f64,
    #[serde(rename = "distanceMeters")]
    distance_meters: f64,
    #[serde(default)]
    categories: Vec<String>,
    address: String,
    #[serde(rename = "url", default, skip_serializing_if = "Option::is_none")]
    detail_url: Option<String>,
}

impl RestaurantRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        distance_meters: f64,
    ) -> AppResult<Self> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(AppError::InvalidInput("restaurant id is empty".to_string()));
        }
        if name.trim().is_empty() {
            return Err(AppError::InvalidInput(format!(
                "restaurant {} has an empty name",
                id
            )));
        }
        if !distance_meters.is_finite() || distance_meters < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "restaurant {} has invalid distance {}",
                id, distance_meters
            )));
        }

        Ok(Self {
            id,
            name,
            image_url: None,
            rating: 0.0,
            distance_meters,
            categories: Vec::new(),
            address: String::new(),
            detail_url: None,
        })
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Non-finite ratings are stored as 0.0; JSON cannot encode them.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = if rating.is_finite() { rating } else { 0.0 };
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_detail_url(mut self, detail_url: Option<String>) -> Self {
        self.detail_url = detail_url;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn detail_url(&self) -> Option<&str> {
        self.detail_url.as_deref()
    }

    pub fn distance_miles(&self) -> f64 {
        self.distance_meters * MILES_PER_METER
    }

    /// Distance for display, e.g. "0.5 mi" or "< 0.1 mi"
    pub fn formatted_distance(&self) -> String {
        let miles = self.distance_miles();
        if miles < 0.1 {
            "< 0.1 mi".to_string()
        } else {
            format!("{:.1} mi", miles)
        }
    }

    pub fn categories_string(&self) -> String {
        self.categories.join(", ")
    }

    /// Reference record used in previews and tests
    pub fn sample() -> Self {
        Self {
            id: "sample-1".to_string(),
            name: "Sample Restaurant".to_string(),
            image_url: Some("https://via.placeholder.com/300x200".to_string()),
            rating: 4.5,
            distance_meters: 805.0,
            categories: vec!["Italian".to_string(), "Pizza".to_string()],
            address: "123 Main St, San Francisco, CA".to_string(),
            detail_url: Some("https://example.com".to_string()),
        }
    }

    pub fn sample_array() -> Vec<Self> {
        let entry = |id: &str,
                     name: &str,
                     image: &str,
                     rating: f64,
                     distance_meters: f64,
                     categories: [&str; 2],
                     address: &str| Self {
            id: id.to_string(),
            name: name.to_string(),
            image_url: Some(image.to_string()),
            rating,
            distance_meters,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            address: address.to_string(),
            detail_url: Some("https://example.com".to_string()),
        };

        vec![
            entry(
                "sample-1",
                "Mama's Italian Kitchen",
                "https://via.placeholder.com/300x200/FF6B6B/FFFFFF?text=Italian",
                4.5,
                805.0,
                ["Italian", "Pizza"],
                "123 Main St, San Francisco, CA",
            ),
            entry(
                "sample-2",
                "Sushi Paradise",
                "https://via.placeholder.com/300x200/4ECDC4/FFFFFF?text=Sushi",
                4.8,
                1207.0,
                ["Japanese", "Sushi"],
                "456 Oak Ave, San Francisco, CA",
            ),
            entry(
                "sample-3",
                "Burger Palace",
                "https://via.placeholder.com/300x200/45B7D1/FFFFFF?text=Burgers",
                4.2,
                1609.0,
                ["American", "Burgers"],
                "789 Pine St, San Francisco, CA",
            ),
        ]
    }
}

impl PartialEq for RestaurantRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RestaurantRecord {}

impl Hash for RestaurantRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
