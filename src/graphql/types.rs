use crate::model;
use async_graphql::{ID, SimpleObject};

/// Only `carId` is non-null on the wire; the store fills every field anyway.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Car {
    pub car_id: ID,
    pub name: Option<String>,
    pub color: Option<String>,
    pub price: Option<f64>,
}

impl From<model::Car> for Car {
    fn from(c: model::Car) -> Self {
        Self {
            car_id: c.car_id.into(),
            name: Some(c.name),
            color: Some(c.color),
            price: Some(c.price),
        }
    }
}

pub(super) fn car_list(cars: Vec<model::Car>) -> Option<Vec<Option<Car>>> {
    Some(cars.into_iter().map(|c| Some(c.into())).collect())
}
