use crate::domain::deck::DeckError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("location is not available")]
    LocationUnavailable,
    #[error(transparent)]
    Deck(#[from] DeckError),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::LocationUnavailable => AppError::InvalidInput(err.to_string()),
            SessionError::Deck(e) => e.into(),
        }
    }
}
