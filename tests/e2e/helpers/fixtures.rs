use restaurant_swipe::domain::location::{Coordinate, LocationStatus};
use restaurant_swipe::domain::restaurant::RestaurantRecord;
use serde_json::{json, Value};

pub struct TestFixtures;

impl TestFixtures {
    pub fn origin() -> Coordinate {
        Coordinate::new(37.7749, -122.4194).expect("valid coordinate")
    }

    pub fn location() -> LocationStatus {
        LocationStatus::Available(Self::origin())
    }

    pub fn record(id: &str) -> RestaurantRecord {
        RestaurantRecord::new(id, format!("Restaurant {}", id), 420.0)
            .expect("valid record")
            .with_rating(4.0)
            .with_categories(vec!["Diner".to_string()])
            .with_address("1 Test St, Springfield")
    }

    pub fn records(n: usize) -> Vec<RestaurantRecord> {
        (0..n).map(|i| Self::record(&format!("r-{}", i))).collect()
    }

    pub fn yelp_business(id: &str, name: &str, distance: f64) -> Value {
        json!({
            "id": id,
            "name": name,
            "image_url": format!("https://img.example.com/{}.jpg", id),
            "rating": 4.5,
            "distance": distance,
            "categories": [
                { "alias": "italian", "title": "Italian" },
                { "alias": "pizza", "title": "Pizza" }
            ],
            "location": {
                "display_address": ["500 Market St", "San Francisco, CA 94105"]
            },
            "url": format!("https://www.yelp.com/biz/{}", id)
        })
    }

    pub fn yelp_response(businesses: Vec<Value>) -> Value {
        json!({
            "total": businesses.len(),
            "businesses": businesses
        })
    }
}
