//! Data models for the car park.
//!
//! - [`Car`]: one inventory item
//! - [`CarId`]: the opaque identifier the store assigns to each car

mod car;

pub use car::{Car, CarId};
