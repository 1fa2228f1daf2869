use crate::config::{IdMode, StoreSettings};
use crate::model::{Car, CarId};
use parking_lot::RwLock;
use std::sync::Arc;

/// Store handle shared between the schema and every request it serves.
pub type SharedCarPark = Arc<RwLock<CarPark>>;

pub fn shared(car_park: CarPark) -> SharedCarPark {
    Arc::new(RwLock::new(car_park))
}

/// Cars every new car park starts with, in id order.
const STOCK: [(&str, &str, f64); 3] = [
    ("Audi A4", "Red", 45_000.00),
    ("Porsche Cayenne", "Black", 75_000.00),
    ("Rolls-Royce Cullinan", "White", 340_000.00),
];

/// Ordered inventory of cars. Insertion order is enumeration order.
#[derive(Debug, Default)]
pub struct CarPark {
    cars: Vec<Car>,
    id_mode: IdMode,
    /// Highest serial handed out so far, only consulted in monotonic mode.
    last_serial: u64,
}

impl CarPark {
    pub fn new(id_mode: IdMode) -> Self {
        Self {
            cars: Vec::new(),
            id_mode,
            last_serial: 0,
        }
    }

    /// A car park holding the three stock cars, ids "1" to "3".
    pub fn seeded(id_mode: IdMode) -> Self {
        let mut car_park = Self::new(id_mode);
        // Stocked through buy_new_car, so "Audi A4" is stored as "audi a4".
        for (name, color, price) in STOCK {
            car_park.buy_new_car(name, color, price);
        }
        car_park
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        if settings.seed {
            Self::seeded(settings.id_mode)
        } else {
            Self::new(settings.id_mode)
        }
    }

    pub fn id_mode(&self) -> IdMode {
        self.id_mode
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn find_all_cars(&self) -> &[Car] {
        &self.cars
    }

    /// Exact, case-sensitive match on the stored (lowercased) name.
    pub fn find_car_by_name(&self, name: &str) -> Vec<Car> {
        self.cars
            .iter()
            .filter(|car| car.name == name)
            .cloned()
            .collect()
    }

    pub fn buy_new_car(&mut self, name: &str, color: &str, price: f64) -> Car {
        let car = Car::new(
            self.next_id(),
            name.to_lowercase(),
            color.to_string(),
            price,
        );
        tracing::debug!(car_id = %car.car_id, name = %car.name, "Bought car");
        self.cars.push(car.clone());
        car
    }

    /// Removes the first car with `car_id`. Returns `false` if there is none.
    pub fn sell_old_car(&mut self, car_id: &CarId) -> bool {
        match self.cars.iter().position(|car| &car.car_id == car_id) {
            Some(index) => {
                let car = self.cars.remove(index);
                tracing::debug!(car_id = %car.car_id, name = %car.name, "Sold car");
                true
            }
            None => {
                tracing::debug!(%car_id, "No car to sell");
                false
            }
        }
    }

    fn next_id(&mut self) -> CarId {
        let serial = match self.id_mode {
            // Derived from the current size only, so a sale followed by a
            // purchase can hand out an id that is still in use.
            IdMode::Count => self.cars.len() as u64 + 1,
            IdMode::Monotonic => self.last_serial + 1,
        };
        self.last_serial = self.last_serial.max(serial);
        CarId::new(serial.to_string())
    }
}
