pub mod catalog_listing_repository;
pub mod listing_repository;
pub mod yelp_listing_repository;

pub use catalog_listing_repository::CatalogListingRepository;
pub use listing_repository::ListingRepository;
pub use yelp_listing_repository::{YelpListingRepository, YELP_SEARCH_URL};
