use std::fmt;
use std::str::FromStr;

use async_graphql::InputValueError;
use async_graphql::InputValueResult;
use async_graphql::Scalar;
use async_graphql::ScalarType;
use async_graphql::Value;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static FORWARD_SORTATION_AREA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z]$")
        .expect("forward sortation area pattern is valid")
});

/// The first three characters of a postal code, such as `C1A`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ForwardSortationArea(String);

impl ForwardSortationArea {
    pub fn validate(raw: &str) -> Result<Self, ValidationError> {
        if FORWARD_SORTATION_AREA.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidForwardSortationArea)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ForwardSortationArea {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

impl fmt::Display for ForwardSortationArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Canadian Forward Sortation Area: the first three characters of a Postal Code.
#[Scalar(name = "ForwardSortationArea")]
impl ScalarType for ForwardSortationArea {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(raw) => Ok(Self::validate(&raw)?),
            _ => Err(InputValueError::custom(
                ValidationError::InvalidForwardSortationArea,
            )),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("C1A")]
    #[case("M8H")]
    #[case("K1Z")]
    fn it_accepts_forward_sortation_areas(#[case] raw: &str) {
        assert_eq!(ForwardSortationArea::validate(raw).unwrap().as_str(), raw);
    }

    #[rstest]
    #[case("D1A")]
    #[case("C1I")]
    #[case("C1A 1N1")]
    #[case("C1")]
    #[case("c1a")]
    #[case("^C1")]
    fn it_rejects_invalid_forward_sortation_areas(#[case] raw: &str) {
        assert_eq!(
            ForwardSortationArea::validate(raw),
            Err(ValidationError::InvalidForwardSortationArea)
        );
    }
}
