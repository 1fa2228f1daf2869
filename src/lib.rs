//! # carpark - an in-memory car park served over GraphQL
//!
//! A single process holds an ordered inventory of cars and exposes it through
//! a small GraphQL schema: two queries to read it and two mutations to buy
//! and sell cars. Nothing is persisted.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API on http://127.0.0.1:4000/graphql
//! carpark serve
//!
//! # List every car
//! carpark query '{ getCars { carId name color price } }'
//!
//! # Sell car 2
//! carpark mutate 'sellOldCar(carId: "2")'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP transport
//! - [`model`]: Data models (Car, CarId)
//! - [`store`]: The in-memory car park

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.carpark.toml` files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `CarParkError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum route that serves it.
pub mod graphql;

pub mod logging;

/// Data models for the car park.
pub mod model;

/// In-memory store.
///
/// Owns every car and implements the four buy/sell/find operations.
pub mod store;
