use crate::e2e::helpers;

use helpers::fixtures::TestFixtures;
use helpers::TestContext;
use pretty_assertions::assert_eq;
use restaurant_swipe::domain::favorites::{FavoritesService, FAVORITES_KEY};
use restaurant_swipe::domain::restaurant::RestaurantRecord;
use restaurant_swipe::infrastructure::storage::{InMemoryKeyValueStore, KeyValueStore};
use std::sync::Arc;
use test_context::test_context;

fn ids(favorites: &FavoritesService) -> Vec<String> {
    favorites.favorites().iter().map(|r| r.id().to_string()).collect()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_favorites_unique_in_insertion_order(ctx: &TestContext) {
    let mut favorites = ctx.favorites();
    let sequence = ["b", "a", "b", "c", "a", "a", "d"];

    for id in sequence {
        favorites.add(TestFixtures::record(id));
    }
    favorites.remove("c");
    favorites.add(TestFixtures::record("c"));

    assert_eq!(ids(&favorites), vec!["b", "a", "d", "c"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_persist_favorites_across_reloads(ctx: &TestContext) {
    let mut favorites = ctx.favorites();
    favorites.add(TestFixtures::record("one"));
    favorites.add(TestFixtures::record("two"));
    favorites.add(TestFixtures::record("three"));
    favorites.remove("two");

    let reloaded = ctx.favorites();

    assert_eq!(ids(&reloaded), vec!["one", "three"]);
    assert_eq!(ids(&reloaded), ids(&favorites));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_round_trip_every_field_through_the_file_store(ctx: &TestContext) {
    let sample = RestaurantRecord::sample();
    let bare = RestaurantRecord::new("bare", "No Extras", 0.0).unwrap();

    let mut favorites = ctx.favorites();
    favorites.add(sample.clone());
    favorites.add(bare);

    let reloaded = ctx.favorites();
    let restored = reloaded.get("sample-1").unwrap();

    assert_eq!(restored.name(), sample.name());
    assert_eq!(restored.image_url(), sample.image_url());
    assert_eq!(restored.rating(), sample.rating());
    assert_eq!(restored.distance_meters(), sample.distance_meters());
    assert_eq!(restored.categories(), sample.categories());
    assert_eq!(restored.address(), sample.address());
    assert_eq!(restored.detail_url(), sample.detail_url());

    let bare = reloaded.get("bare").unwrap();
    assert_eq!(bare.image_url(), None);
    assert_eq!(bare.detail_url(), None);
    assert!(bare.categories().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_toggle_membership_twice_back_to_original(ctx: &TestContext) {
    let mut favorites = ctx.favorites();
    favorites.add(TestFixtures::record("keep"));
    let before = ids(&favorites);

    let record = TestFixtures::record("flip");
    assert!(favorites.toggle(record.clone()));
    assert!(favorites.contains("flip"));
    assert!(!favorites.toggle(record));

    assert_eq!(ids(&favorites), before);
    assert_eq!(ids(&ctx.favorites()), before);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clear_persisted_favorites(ctx: &TestContext) {
    let mut favorites = ctx.favorites();
    favorites.add(TestFixtures::record("x"));
    favorites.add(TestFixtures::record("y"));

    favorites.clear();

    assert!(favorites.is_empty());
    assert!(ctx.favorites().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_start_empty_when_persisted_favorites_are_corrupt(ctx: &TestContext) {
    ctx.store.set(FAVORITES_KEY, b"{not json").unwrap();

    let mut favorites = ctx.favorites();
    assert!(favorites.is_empty());

    // The next mutation overwrites the corrupt value with a valid list
    favorites.add(TestFixtures::record("fresh"));
    assert_eq!(ids(&ctx.favorites()), vec!["fresh"]);
}

#[tokio::test]
async fn it_should_load_list_written_by_earlier_run() {
    let persisted = serde_json::to_vec(&vec![
        RestaurantRecord::sample(),
        TestFixtures::record("second"),
    ])
    .unwrap();
    let store = Arc::new(InMemoryKeyValueStore::new().with_entry(FAVORITES_KEY, persisted));

    let favorites = FavoritesService::new(store);

    assert_eq!(ids(&favorites), vec!["sample-1", "second"]);
}
