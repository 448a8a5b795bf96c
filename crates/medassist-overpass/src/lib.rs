//! Overpass (OpenStreetMap) client for nearby-pharmacy lookups.
//!
//! Queries points of interest tagged `amenity=pharmacy` within a radius of a
//! coordinate, ranks them by great-circle distance, and returns the nearest
//! few as display-ready records. Failures are surfaced as [`OverpassError`];
//! deciding whether a failed lookup degrades or aborts a request is the
//! caller's business.

pub mod client;
pub mod error;
pub mod geo;
pub mod types;

pub use client::OverpassClient;
pub use error::OverpassError;
pub use geo::haversine_meters;
pub use types::Pharmacy;
