use super::error::SessionError;
use super::preferences::SearchPreferences;
use crate::domain::deck::{DeckController, DeckStatus, SwipeDecision};
use crate::domain::favorites::FavoritesService;
use crate::domain::listing::ListingServiceApi;
use crate::domain::location::LocationStatus;
use crate::domain::restaurant::RestaurantRecord;
use std::sync::Arc;

/// One interactive discovery session.
///
/// Owns the deck and the favorites outright; every mutation goes through
/// `&mut self`, so there is a single writer for both.
pub struct SwipeSession {
    deck: DeckController,
    favorites: FavoritesService,
    listing: Arc<dyn ListingServiceApi>,
    preferences: SearchPreferences,
    notice: Option<&'static str>,
}

impl SwipeSession {
    pub fn new(
        listing: Arc<dyn ListingServiceApi>,
        favorites: FavoritesService,
        preferences: SearchPreferences,
    ) -> Self {
        Self {
            deck: DeckController::new(),
            favorites,
            listing,
            preferences,
            notice: None,
        }
    }

    pub fn deck(&self) -> &DeckController {
        &self.deck
    }

    pub fn favorites(&self) -> &FavoritesService {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesService {
        &mut self.favorites
    }

    pub fn preferences(&self) -> &SearchPreferences {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut SearchPreferences {
        &mut self.preferences
    }

    /// Informational message from the last fetch (e.g. offline fallback)
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Loads a fresh deck around `location` using the current preferences.
    ///
    /// Fetch failures land in the deck as `DeckStatus::Error`; only a missing
    /// location is returned as an error, and it leaves the deck untouched.
    pub async fn refresh(&mut self, location: &LocationStatus) -> Result<DeckStatus, SessionError> {
        let origin = location
            .coordinate()
            .ok_or(SessionError::LocationUnavailable)?;

        let Some(ticket) = self.deck.begin_fetch() else {
            return Ok(self.deck.status());
        };
        self.notice = None;

        let result = self
            .listing
            .fetch(
                origin,
                self.preferences.radius_miles(),
                self.preferences.cuisine(),
            )
            .await;

        let result = result.map(|outcome| {
            self.notice = outcome.notice();
            outcome.restaurants
        });
        self.deck.complete_fetch(ticket, result);

        let status = self.deck.status();
        tracing::info!(status = status.label(), degraded = self.notice.is_some(), "Refresh finished");
        Ok(status)
    }

    /// Likes the top card and saves it to favorites
    pub fn like(&mut self) -> Result<RestaurantRecord, SessionError> {
        let record = self.deck.like()?.into_record();
        self.favorites.add(record.clone());
        Ok(record)
    }

    pub fn pass(&mut self) -> Result<(), SessionError> {
        self.deck.pass()?;
        Ok(())
    }

    /// Applies a finished drag. Returns the committed decision, or `None` if the
    /// card snapped back.
    pub fn swipe(&mut self, dx: f64) -> Result<Option<SwipeDecision>, SessionError> {
        let Some(decision) = SwipeDecision::from_drag(dx) else {
            return Ok(None);
        };
        if let Some(event) = self.deck.decide(decision)? {
            self.favorites.add(event.into_record());
        }
        Ok(Some(decision))
    }

    pub fn reset(&mut self) {
        self.deck.reset();
    }
}
