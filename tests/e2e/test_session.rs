use crate::e2e::helpers;

use helpers::fixtures::TestFixtures;
use helpers::mocks::ScriptedListing;
use helpers::TestContext;
use pretty_assertions::assert_eq;
use restaurant_swipe::domain::deck::{DeckError, DeckStatus, SwipeDecision};
use restaurant_swipe::domain::listing::{ListingServiceError, DEGRADED_NOTICE};
use restaurant_swipe::domain::location::LocationStatus;
use restaurant_swipe::domain::restaurant::RestaurantRecord;
use restaurant_swipe::domain::session::{SearchPreferences, SessionError, SwipeSession};
use std::sync::Arc;
use test_context::test_context;

fn scripted_session(ctx: &TestContext, listing: Arc<ScriptedListing>) -> SwipeSession {
    SwipeSession::new(listing, ctx.favorites(), SearchPreferences::default())
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_save_liked_sample_exactly_once(ctx: &TestContext) {
    let listing = Arc::new(ScriptedListing::new().then_ok(RestaurantRecord::sample_array(), false));
    let mut session = scripted_session(ctx, listing);
    session.refresh(&TestFixtures::location()).await.unwrap();

    let liked = session.like().unwrap();
    assert_eq!(liked.id(), "sample-1");

    // Liking the same card again after replaying the deck must not duplicate it
    session.reset();
    session.like().unwrap();

    let saved: Vec<&str> = session
        .favorites()
        .favorites()
        .iter()
        .map(|r| r.id())
        .filter(|id| *id == "sample-1")
        .collect();
    assert_eq!(saved, vec!["sample-1"]);

    let reloaded = ctx.favorites();
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.contains("sample-1"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refuse_refresh_without_location(ctx: &TestContext) {
    let listing = Arc::new(ScriptedListing::new());
    let mut session = scripted_session(ctx, listing.clone());

    let err = session.refresh(&LocationStatus::Unavailable).await.unwrap_err();

    assert!(matches!(err, SessionError::LocationUnavailable));
    assert_eq!(session.deck().status(), DeckStatus::Empty);
    assert!(listing.radii().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_degraded_notice_until_next_refresh(ctx: &TestContext) {
    let listing = Arc::new(
        ScriptedListing::new()
            .then_ok(TestFixtures::records(3), true)
            .then_ok(TestFixtures::records(2), false),
    );
    let mut session = scripted_session(ctx, listing);

    let status = session.refresh(&TestFixtures::location()).await.unwrap();
    assert_eq!(status, DeckStatus::Active { current_index: 0 });
    assert_eq!(session.notice(), Some(DEGRADED_NOTICE));

    session.refresh(&TestFixtures::location()).await.unwrap();
    assert_eq!(session.notice(), None);
    assert_eq!(session.deck().candidates().len(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_put_fetch_failure_into_deck_and_recover(ctx: &TestContext) {
    let listing = Arc::new(
        ScriptedListing::new()
            .then_err(ListingServiceError::Unavailable {
                remote: "timeout".to_string(),
                local: "catalog unavailable".to_string(),
            })
            .then_ok(TestFixtures::records(1), false),
    );
    let mut session = scripted_session(ctx, listing);

    let status = session.refresh(&TestFixtures::location()).await.unwrap();
    assert!(matches!(status, DeckStatus::Error(ref message) if message.contains("timeout")));
    assert!(matches!(
        session.like(),
        Err(SessionError::Deck(DeckError::Failed))
    ));
    assert!(session.favorites().is_empty());

    let status = session.refresh(&TestFixtures::location()).await.unwrap();
    assert_eq!(status, DeckStatus::Active { current_index: 0 });
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_favorite_only_right_swipes(ctx: &TestContext) {
    let listing = Arc::new(ScriptedListing::new().then_ok(TestFixtures::records(3), false));
    let mut session = scripted_session(ctx, listing);
    session.refresh(&TestFixtures::location()).await.unwrap();

    assert_eq!(session.swipe(90.0).unwrap(), None);
    assert_eq!(session.swipe(-220.0).unwrap(), Some(SwipeDecision::Pass));
    assert_eq!(session.swipe(175.0).unwrap(), Some(SwipeDecision::Like));
    session.pass().unwrap();

    assert_eq!(session.deck().status(), DeckStatus::Exhausted);
    let ids: Vec<&str> = session.favorites().favorites().iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["r-1"]);
    assert!(matches!(
        session.swipe(400.0),
        Err(SessionError::Deck(DeckError::Exhausted))
    ));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fetch_with_clamped_preference_radius(ctx: &TestContext) {
    let listing = Arc::new(
        ScriptedListing::new()
            .then_ok(TestFixtures::records(1), false)
            .then_ok(TestFixtures::records(1), false),
    );
    let mut session = scripted_session(ctx, listing.clone());

    session.refresh(&TestFixtures::location()).await.unwrap();
    session.preferences_mut().set_radius(100.0);
    session.refresh(&TestFixtures::location()).await.unwrap();

    assert_eq!(listing.radii(), vec![5.0, 25.0]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_run_offline_session_end_to_end(ctx: &TestContext) {
    let mut session = ctx.session(ctx.offline_listing());

    let status = session.refresh(&TestFixtures::location()).await.unwrap();
    assert_eq!(status, DeckStatus::Active { current_index: 0 });
    assert_eq!(session.notice(), None);

    let total = session.deck().candidates().len();
    let mut liked = Vec::new();
    for i in 0..total {
        if i % 3 == 0 {
            liked.push(session.like().unwrap().id().to_string());
        } else {
            session.pass().unwrap();
        }
    }

    assert_eq!(session.deck().status(), DeckStatus::Exhausted);
    let saved: Vec<String> = ctx
        .favorites()
        .favorites()
        .iter()
        .map(|r| r.id().to_string())
        .collect();
    assert_eq!(saved, liked);
}
