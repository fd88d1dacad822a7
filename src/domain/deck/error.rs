use crate::error::AppError;

/// Why a swipe decision was refused. The cursor never moves on error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("restaurants are still loading")]
    Loading,
    #[error("the last search failed")]
    Failed,
    #[error("no restaurants to swipe")]
    Empty,
    #[error("all restaurants have been seen")]
    Exhausted,
}

impl From<DeckError> for AppError {
    fn from(err: DeckError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
