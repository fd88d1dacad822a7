pub mod controller;
pub mod error;
pub mod gesture;
pub mod model;

pub use controller::DeckController;
pub use error::DeckError;
pub use gesture::{SwipeDecision, SWIPE_THRESHOLD};
pub use model::{DeckStatus, FavoriteEvent, FetchTicket, VISIBLE_WINDOW};
