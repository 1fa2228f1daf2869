//! GraphQL schema, resolvers and HTTP transport for the car park.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! carpark serve --port 4000
//!
//! # Execute a query from CLI
//! carpark query '{ getCarByName(name: "audi a4") { carId color price } }'
//!
//! # Execute a mutation from CLI
//! carpark mutate 'buyNewCar(name: "Tesla", color: "Blue", price: 60000) { carId }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getCars`, `getCarByName`
//! - **Mutations**: `buyNewCar`, `sellOldCar`
//! - **Scalars**: `ID` (car identifiers)

mod scalar;
mod schema;
mod server;
mod types;

pub use schema::{CarParkSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GraphQLBody, GraphQLReply, execute, router, run_server};
pub use types::*;
