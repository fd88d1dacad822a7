pub mod deck;
pub mod favorites;
pub mod listing;
pub mod location;
pub mod restaurant;
pub mod session;
