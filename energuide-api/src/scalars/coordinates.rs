use async_graphql::InputObject;
use async_graphql::InputValueError;
use async_graphql::InputValueResult;
use async_graphql::Number;
use async_graphql::Scalar;
use async_graphql::ScalarType;
use async_graphql::Value;

use crate::error::ValidationError;

/// Degrees north of the equator, between -90 and 90.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Latitude(f64);

/// Degrees east of the prime meridian, between -180 and 180.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Longitude(f64);

impl Latitude {
    pub fn new(degrees: f64) -> Result<Self, ValidationError> {
        if (-90.0..=90.0).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(ValidationError::InvalidLatitude)
        }
    }

    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl Longitude {
    pub fn new(degrees: f64) -> Result<Self, ValidationError> {
        if (-180.0..=180.0).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(ValidationError::InvalidLongitude)
        }
    }

    pub fn degrees(self) -> f64 {
        self.0
    }
}

fn degrees(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        _ => None,
    }
}

fn to_number(degrees: f64) -> Value {
    Number::from_f64(degrees).map_or(Value::Null, Value::Number)
}

/// A latitude in decimal degrees.
#[Scalar(name = "Latitude")]
impl ScalarType for Latitude {
    fn parse(value: Value) -> InputValueResult<Self> {
        let degrees = degrees(&value)
            .ok_or_else(|| InputValueError::custom(ValidationError::InvalidLatitude))?;
        Ok(Self::new(degrees)?)
    }

    fn to_value(&self) -> Value {
        to_number(self.0)
    }
}

/// A longitude in decimal degrees.
#[Scalar(name = "Longitude")]
impl ScalarType for Longitude {
    fn parse(value: Value) -> InputValueResult<Self> {
        let degrees = degrees(&value)
            .ok_or_else(|| InputValueError::custom(ValidationError::InvalidLongitude))?;
        Ok(Self::new(degrees)?)
    }

    fn to_value(&self) -> Value {
        to_number(self.0)
    }
}

/// A point on the map.
#[derive(InputObject, Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: Latitude,
    pub lng: Longitude,
}
