pub mod error;
pub mod preferences;
pub mod service;

pub use error::SessionError;
pub use preferences::{SearchPreferences, DEFAULT_RADIUS_MILES, QUICK_PICK_RADII};
pub use service::SwipeSession;
