pub mod service;

pub use service::{FavoritesService, FAVORITES_KEY};
