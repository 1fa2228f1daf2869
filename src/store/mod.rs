//! In-memory storage layer.
//!
//! The whole inventory lives in a single [`CarPark`], owned by whoever builds
//! the schema and handed to resolvers as [`SharedCarPark`]. Nothing is
//! written to disk; state is dropped when the process exits.

mod car_park;

pub use car_park::{CarPark, SharedCarPark, shared};
