use crate::domain::restaurant::RestaurantRecord;

/// Number of upcoming cards rendered at once
pub const VISIBLE_WINDOW: usize = 3;

/// What the card stack should show
#[derive(Debug, Clone, PartialEq)]
pub enum DeckStatus {
    Loading,
    Error(String),
    /// The last fetch succeeded with nothing, or nothing was fetched yet
    Empty,
    Active { current_index: usize },
    Exhausted,
}

impl DeckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error(_) => "error",
            Self::Empty => "empty",
            Self::Active { .. } => "active",
            Self::Exhausted => "exhausted",
        }
    }
}

/// Emitted by a `like`; the receiver adds the record to favorites
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteEvent {
    Add(RestaurantRecord),
}

impl FavoriteEvent {
    pub fn record(&self) -> &RestaurantRecord {
        match self {
            Self::Add(record) => record,
        }
    }

    pub fn into_record(self) -> RestaurantRecord {
        match self {
            Self::Add(record) => record,
        }
    }
}

/// Proof that a fetch was started; only the latest ticket may complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub(super) generation: u64,
}
