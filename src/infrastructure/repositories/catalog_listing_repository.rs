use super::listing_repository::ListingRepository;
use crate::domain::listing::ListingQuery;
use crate::domain::restaurant::RestaurantRecord;
use crate::error::AppResult;
use async_trait::async_trait;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::sync::LazyLock;

/// Closest distance handed out by the catalog
const MIN_DISTANCE_METERS: f64 = 100.0;

struct CatalogEntry {
    name: &'static str,
    categories: &'static [&'static str],
    rating: f64,
    image_url: &'static str,
}

static CATALOG: LazyLock<Vec<CatalogEntry>> = LazyLock::new(|| {
    vec![
        CatalogEntry {
            name: "Tony's Little Star Pizza",
            categories: &["Pizza", "Italian"],
            rating: 4.3,
            image_url: "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "Golden Dragon",
            categories: &["Chinese", "Asian"],
            rating: 4.1,
            image_url: "https://images.unsplash.com/photo-1561758033-d89a9ad46330?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "Sushi Zen",
            categories: &["Japanese", "Sushi"],
            rating: 4.7,
            image_url: "https://images.unsplash.com/photo-1579584425555-c3ce17fd4351?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "La Taqueria",
            categories: &["Mexican", "Tacos"],
            rating: 4.5,
            image_url: "https://images.unsplash.com/photo-1551504734-5ee1c4a1479b?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "Blue Bottle Coffee",
            categories: &["Coffee", "Cafe"],
            rating: 4.2,
            image_url: "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "The French Laundry",
            categories: &["French", "Fine Dining"],
            rating: 4.9,
            image_url: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "Shake Shack",
            categories: &["Burgers", "American"],
            rating: 4.0,
            image_url: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "Chipotle",
            categories: &["Mexican", "Fast Casual"],
            rating: 3.8,
            image_url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "In-N-Out Burger",
            categories: &["Burgers", "American"],
            rating: 4.4,
            image_url: "https://images.unsplash.com/photo-1571091718767-18b5b1457add?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "Panda Express",
            categories: &["Chinese", "Fast Food"],
            rating: 3.6,
            image_url: "https://images.unsplash.com/photo-1585032226651-759b368d7246?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "Starbucks",
            categories: &["Coffee", "Cafe"],
            rating: 3.9,
            image_url: "https://images.unsplash.com/photo-1461023058943-07fcbe16d735?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "Olive Garden",
            categories: &["Italian", "Casual Dining"],
            rating: 4.0,
            image_url: "https://images.unsplash.com/photo-1551183053-bf91a1d81141?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "Subway",
            categories: &["Sandwiches", "Fast Food"],
            rating: 3.5,
            image_url: "https://images.unsplash.com/photo-1594109767111-c2146cb029d5?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "McDonald's",
            categories: &["Burgers", "Fast Food"],
            rating: 3.4,
            image_url: "https://images.unsplash.com/photo-1596662496489-1d0abdc5c1e0?w=300&h=200&fit=crop",
        },
        CatalogEntry {
            name: "Thai Palace",
            categories: &["Thai", "Asian"],
            rating: 4.6,
            image_url: "https://images.unsplash.com/photo-1559847844-d558cfc9d5c5?w=300&h=200&fit=crop",
        },
    ]
});

const CITIES: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Los Angeles, CA",
    "Chicago, IL",
    "Miami, FL",
    "Seattle, WA",
    "Austin, TX",
    "Portland, OR",
];

const STREET_NAMES: &[&str] = &[
    "Main St",
    "Oak Ave",
    "Pine St",
    "Cedar Blvd",
    "Elm Dr",
    "Maple Way",
    "First St",
    "Second Ave",
    "Broadway",
    "Market St",
    "Union St",
    "Valencia St",
];

/// Offline listing strategy.
///
/// Synthesizes the fixed catalog around the caller with random distances and
/// addresses on every call. Ids are `mock-<catalog index>`, so they repeat
/// across fetches even though the rest of the record does not.
///
/// The cuisine filter is only understood by remote providers; the whole
/// catalog is always returned so a fallback never comes back empty.
pub struct CatalogListingRepository;

impl CatalogListingRepository {
    pub fn new() -> Self {
        debug_assert_eq!(CATALOG.len(), 15, "Catalog must have exactly 15 entries");
        debug_assert!(
            CATALOG.iter().all(|e| !e.categories.is_empty()),
            "Every catalog entry needs a category"
        );

        Self
    }

    fn random_address(rng: &mut impl Rng) -> String {
        let number = rng.random_range(100..=9999);
        let street = STREET_NAMES.choose(rng).copied().unwrap_or("Main St");
        let city = CITIES.choose(rng).copied().unwrap_or("San Francisco, CA");
        format!("{} {}, {}", number, street, city)
    }

    fn synthesize(&self, query: &ListingQuery) -> AppResult<Vec<RestaurantRecord>> {
        let mut rng = rand::rng();
        let radius = query.radius_meters;
        // A radius under the minimum pins every distance to the radius itself
        let min_distance = MIN_DISTANCE_METERS.min(radius);

        let mut restaurants = Vec::with_capacity(CATALOG.len());
        for (index, entry) in CATALOG.iter().enumerate() {
            let distance = rng.random_range(min_distance..=radius);
            let record = RestaurantRecord::new(format!("mock-{}", index), entry.name, distance)?
                .with_image_url(Some(entry.image_url.to_string()))
                .with_rating(entry.rating)
                .with_categories(entry.categories.iter().map(|c| c.to_string()).collect())
                .with_address(Self::random_address(&mut rng))
                .with_detail_url(Some(format!("https://example.com/restaurant/{}", index)));
            restaurants.push(record);
        }

        restaurants.shuffle(&mut rng);
        Ok(restaurants)
    }
}

#[async_trait]
impl ListingRepository for CatalogListingRepository {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn search(&self, query: &ListingQuery) -> AppResult<Vec<RestaurantRecord>> {
        let restaurants = self.synthesize(query)?;
        tracing::debug!(
            count = restaurants.len(),
            radius_meters = query.radius_meters,
            "Synthesized offline listing"
        );
        Ok(restaurants)
    }
}

impl Default for CatalogListingRepository {
    fn default() -> Self {
        Self::new()
    }
}
