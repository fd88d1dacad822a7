pub mod model;

pub use model::RestaurantRecord;
