use super::error::DeckError;
use super::gesture::SwipeDecision;
use super::model::{DeckStatus, FavoriteEvent, FetchTicket, VISIBLE_WINDOW};
use crate::domain::restaurant::RestaurantRecord;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Ready,
    Loading,
    Failed(String),
}

/// Card stack state: the candidates from the latest fetch and a cursor to the
/// next undecided one.
///
/// The cursor only moves forward, one step per like/pass, and only `reset`
/// or a new fetch puts it back to 0. Candidates are replaced wholesale when a
/// fetch completes, never edited in place.
#[derive(Debug)]
pub struct DeckController {
    candidates: Vec<RestaurantRecord>,
    current_index: usize,
    phase: Phase,
    generation: u64,
}

impl DeckController {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            current_index: 0,
            phase: Phase::Ready,
            generation: 0,
        }
    }

    pub fn status(&self) -> DeckStatus {
        match &self.phase {
            Phase::Loading => DeckStatus::Loading,
            Phase::Failed(message) => DeckStatus::Error(message.clone()),
            Phase::Ready if self.candidates.is_empty() => DeckStatus::Empty,
            Phase::Ready if self.current_index < self.candidates.len() => DeckStatus::Active {
                current_index: self.current_index,
            },
            Phase::Ready => DeckStatus::Exhausted,
        }
    }

    pub fn candidates(&self) -> &[RestaurantRecord] {
        &self.candidates
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Top card, if the deck is active
    pub fn current(&self) -> Option<&RestaurantRecord> {
        match self.phase {
            Phase::Ready => self.candidates.get(self.current_index),
            _ => None,
        }
    }

    /// Cards to render, top card first
    pub fn visible(&self) -> &[RestaurantRecord] {
        if self.phase != Phase::Ready {
            return &[];
        }
        let start = self.current_index.min(self.candidates.len());
        let end = (start + VISIBLE_WINDOW).min(self.candidates.len());
        &self.candidates[start..end]
    }

    /// Enters `Loading` and hands out a ticket for the new fetch.
    ///
    /// Returns `None` while another fetch is in flight; the caller should not
    /// start a second request.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.is_loading() {
            tracing::debug!(generation = self.generation, "Fetch already in flight, ignoring");
            return None;
        }

        self.generation += 1;
        self.phase = Phase::Loading;
        self.candidates.clear();
        self.current_index = 0;

        tracing::debug!(generation = self.generation, "Fetch started");
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Applies a fetch result if `ticket` is still the latest one.
    ///
    /// Returns false when the result was stale and discarded.
    pub fn complete_fetch<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<RestaurantRecord>, E>,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_loading() {
            tracing::debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "Discarding stale fetch result"
            );
            return false;
        }

        match result {
            Ok(candidates) => {
                tracing::info!(count = candidates.len(), "Deck loaded");
                self.candidates = candidates;
                self.current_index = 0;
                self.phase = Phase::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Deck fetch failed");
                self.candidates.clear();
                self.current_index = 0;
                self.phase = Phase::Failed(e.to_string());
            }
        }
        true
    }

    /// Abandons the in-flight fetch; its result will be discarded when it arrives.
    ///
    /// For hosts that drive fetches themselves and can drop one mid-flight
    /// (e.g. when the user leaves the screen). `SwipeSession` awaits its fetch
    /// under `&mut self`, so it never has one to cancel.
    pub fn cancel_fetch(&mut self) {
        if self.is_loading() {
            self.generation += 1;
            self.phase = Phase::Ready;
            tracing::debug!(generation = self.generation, "Fetch cancelled");
        }
    }

    /// Likes the top card and advances
    pub fn like(&mut self) -> Result<FavoriteEvent, DeckError> {
        let record = self.advance()?;
        Ok(FavoriteEvent::Add(record))
    }

    /// Passes on the top card and advances
    pub fn pass(&mut self) -> Result<(), DeckError> {
        self.advance().map(|_| ())
    }

    pub fn decide(&mut self, decision: SwipeDecision) -> Result<Option<FavoriteEvent>, DeckError> {
        match decision {
            SwipeDecision::Like => self.like().map(Some),
            SwipeDecision::Pass => self.pass().map(|_| None),
        }
    }

    /// Replays the current candidates from the top ("search again").
    ///
    /// No-op while loading or after a failed fetch.
    pub fn reset(&mut self) {
        if self.phase == Phase::Ready {
            self.current_index = 0;
        }
    }

    fn advance(&mut self) -> Result<RestaurantRecord, DeckError> {
        match self.status() {
            DeckStatus::Active { current_index } => {
                let record = self
                    .candidates
                    .get(current_index)
                    .cloned()
                    .ok_or(DeckError::Exhausted)?;
                self.current_index = current_index + 1;
                Ok(record)
            }
            DeckStatus::Loading => Err(DeckError::Loading),
            DeckStatus::Error(_) => Err(DeckError::Failed),
            DeckStatus::Empty => Err(DeckError::Empty),
            DeckStatus::Exhausted => Err(DeckError::Exhausted),
        }
    }
}

impl Default for DeckController {
    fn default() -> Self {
        Self::new()
    }
}
