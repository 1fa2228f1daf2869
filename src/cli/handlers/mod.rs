mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::CarParkConfig;
use crate::graphql::{CarParkSchema, build_schema};
use crate::store::{self, CarPark, SharedCarPark};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: CarParkConfig,
    pub car_park: SharedCarPark,
}

impl CommandContext {
    pub fn new(config: CarParkConfig) -> Self {
        let car_park = store::shared(CarPark::from_settings(&config.store));
        Self { config, car_park }
    }

    pub fn schema(&self) -> CarParkSchema {
        build_schema(self.car_park.clone())
    }
}
