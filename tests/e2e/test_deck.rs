use crate::e2e::helpers;

use helpers::fixtures::TestFixtures;
use pretty_assertions::assert_eq;
use restaurant_swipe::domain::deck::{
    DeckController, DeckError, DeckStatus, SwipeDecision, SWIPE_THRESHOLD,
};

fn loaded_deck(n: usize) -> DeckController {
    let mut deck = DeckController::new();
    let ticket = deck.begin_fetch().unwrap();
    assert!(deck.complete_fetch(ticket, Ok::<_, String>(TestFixtures::records(n))));
    deck
}

#[test]
fn it_should_never_move_cursor_backwards_between_resets() {
    let mut deck = loaded_deck(8);
    let drags = [200.0, -151.0, 150.0, -40.0, 0.0, 380.0, -999.0];

    let mut last = deck.current_index();
    for dx in drags {
        if let Some(decision) = SwipeDecision::from_drag(dx) {
            deck.decide(decision).unwrap();
        }
        assert!(deck.current_index() >= last);
        last = deck.current_index();
    }
    assert_eq!(last, 4);

    deck.reset();
    assert_eq!(deck.current_index(), 0);
}

#[test]
fn it_should_emit_favorite_event_for_card_under_cursor() {
    let candidates = TestFixtures::records(4);
    let mut deck = loaded_deck(4);

    for i in 0..candidates.len() {
        let event = deck.like().unwrap();
        assert_eq!(event.record(), &candidates[i]);
        assert_eq!(deck.current_index(), i + 1);
    }
}

#[test]
fn it_should_exhaust_after_exactly_n_decisions() {
    const N: usize = 5;
    let mut deck = loaded_deck(N);

    for i in 0..N {
        assert_eq!(deck.status(), DeckStatus::Active { current_index: i });
        if i % 2 == 0 {
            deck.like().unwrap();
        } else {
            deck.pass().unwrap();
        }
    }

    assert_eq!(deck.status(), DeckStatus::Exhausted);
    assert_eq!(deck.pass().unwrap_err(), DeckError::Exhausted);
    assert_eq!(deck.current_index(), N);
}

#[test]
fn it_should_only_commit_drags_past_threshold() {
    assert_eq!(SwipeDecision::from_drag(SWIPE_THRESHOLD), None);
    assert_eq!(SwipeDecision::from_drag(-SWIPE_THRESHOLD), None);
    assert_eq!(
        SwipeDecision::from_drag(SWIPE_THRESHOLD + 0.5),
        Some(SwipeDecision::Like)
    );
    assert_eq!(
        SwipeDecision::from_drag(-SWIPE_THRESHOLD - 0.5),
        Some(SwipeDecision::Pass)
    );
}

#[test]
fn it_should_replace_candidates_only_with_latest_fetch() {
    let mut deck = loaded_deck(3);
    deck.like().unwrap();

    let abandoned = deck.begin_fetch().unwrap();
    deck.cancel_fetch();
    let latest = deck.begin_fetch().unwrap();

    assert!(deck.complete_fetch(latest, Ok::<_, String>(TestFixtures::records(6))));
    assert!(!deck.complete_fetch(abandoned, Ok::<_, String>(TestFixtures::records(1))));

    assert_eq!(deck.candidates().len(), 6);
    assert_eq!(deck.status(), DeckStatus::Active { current_index: 0 });
}
