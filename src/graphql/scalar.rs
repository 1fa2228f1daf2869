//! Conversions between the store's [`CarId`] and the GraphQL `ID` scalar.
//!
//! `ID` already behaves as a pass-through text scalar: it serializes as the
//! string it holds, and both variable values and document literals parse to
//! their text, numbers included (`carId: 2` means `carId: "2"`).

use crate::model::CarId;
use async_graphql::ID;

impl From<ID> for CarId {
    fn from(id: ID) -> Self {
        CarId::new(id.0)
    }
}

// `CarId -> ID` comes from async-graphql's blanket `impl<T: Display> From<T> for ID`,
// which yields the same text since `CarId`'s `Display` writes the inner string.

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::{InputType, OutputType, Value};

    #[test]
    fn test_type_name_is_id() {
        assert_eq!(<ID as InputType>::type_name(), "ID");
        assert_eq!(<ID as OutputType>::type_name(), "ID");
    }

    #[test]
    fn test_string_passes_through() {
        let id = <ID as InputType>::parse(Some(Value::String(" Mixed Case ".into()))).unwrap();
        assert_eq!(CarId::from(id).as_str(), " Mixed Case ");
    }

    #[test]
    fn test_number_literal_reads_as_text() {
        let id = <ID as InputType>::parse(Some(Value::Number(2.into()))).unwrap();
        assert_eq!(CarId::from(id).as_str(), "2");
    }

    #[test]
    fn test_values_without_text_are_rejected() {
        assert!(<ID as InputType>::parse(Some(Value::Null)).is_err());
        assert!(<ID as InputType>::parse(Some(Value::List(vec![]))).is_err());
    }

    #[test]
    fn test_round_trip_through_wire_form() {
        let id = CarId::from("42");
        let wire = ID::from(id.clone());
        assert_eq!(<ID as InputType>::to_value(&wire), Value::String("42".to_string()));
        assert_eq!(CarId::from(wire), id);
    }
}
