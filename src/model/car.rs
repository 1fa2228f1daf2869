use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque car identifier. The wire form and the stored form are the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(String);

impl CarId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CarId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CarId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub car_id: CarId,
    pub name: String,
    pub color: String,
    pub price: f64,
}

impl Car {
    pub fn new(car_id: CarId, name: String, color: String, price: f64) -> Self {
        Self {
            car_id,
            name,
            color,
            price,
        }
    }
}
