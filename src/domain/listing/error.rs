use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ListingServiceError {
    #[error("invalid search radius: {0} miles")]
    InvalidRadius(f64),
    #[error("listing unavailable (remote: {remote}; offline: {local})")]
    Unavailable { remote: String, local: String },
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<AppError> for ListingServiceError {
    fn from(err: AppError) -> Self {
        ListingServiceError::Dependency(err.to_string())
    }
}
