use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::store::SharedCarPark;

use super::types::*;

pub type CarParkSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build a schema whose resolvers all act on `car_park`.
pub fn build_schema(car_park: SharedCarPark) -> CarParkSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(car_park)
        .finish()
}

fn get_car_park<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedCarPark> {
    ctx.data::<SharedCarPark>()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// All cars, in the order they were bought
    async fn get_cars(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Car>>>> {
        let cars = get_car_park(ctx)?.read().find_all_cars().to_vec();
        Ok(car_list(cars))
    }

    /// Cars whose stored name matches exactly. Names are stored lowercase.
    async fn get_car_by_name(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Vec<Option<Car>>>> {
        let cars = get_car_park(ctx)?.read().find_car_by_name(&name);
        Ok(car_list(cars))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a car to the car park
    async fn buy_new_car(
        &self,
        ctx: &Context<'_>,
        name: String,
        color: String,
        price: f64,
    ) -> async_graphql::Result<Option<Car>> {
        let car = get_car_park(ctx)?
            .write()
            .buy_new_car(&name, &color, price);
        Ok(Some(car.into()))
    }

    /// Remove a car. Returns false when no car has this id.
    async fn sell_old_car(
        &self,
        ctx: &Context<'_>,
        car_id: ID,
    ) -> async_graphql::Result<Option<bool>> {
        let sold = get_car_park(ctx)?.write().sell_old_car(&car_id.into());
        Ok(Some(sold))
    }
}
