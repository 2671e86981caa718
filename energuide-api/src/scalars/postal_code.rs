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

// Letters D, F, I, O, Q and U are never used; W and Z never start a code.
static POSTAL_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z] ?[0-9][ABCEGHJ-NPRSTV-Z][0-9]$")
        .expect("postal code pattern is valid")
});

/// A Canadian postal code such as `C1A 1N1`, kept exactly as supplied.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn validate(raw: &str) -> Result<Self, ValidationError> {
        if POSTAL_CODE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidPostalCode)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for PostalCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Canadian Postal Code as defined by Canada Post.
#[Scalar(name = "PostalCode")]
impl ScalarType for PostalCode {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(raw) => Ok(Self::validate(&raw)?),
            _ => Err(InputValueError::custom(ValidationError::InvalidPostalCode)),
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
    #[case("C1A 1N1")]
    #[case("C1A1N1")]
    #[case("K1A 0B1")]
    #[case("M8H 2W9")]
    #[case("X0A 0H0")]
    #[case("Y1A 6Z2")]
    fn it_accepts_postal_codes(#[case] raw: &str) {
        let postal_code = PostalCode::validate(raw).unwrap();
        assert_eq!(postal_code.as_str(), raw);
    }

    #[rstest]
    #[case::banned_first_letter("D1A 1N1")]
    #[case::w_first("W1A 1N1")]
    #[case::z_first("Z1A 1N1")]
    #[case::banned_letter_later("C1O 1N1")]
    #[case::banned_letter_last_block("C1A 1U1")]
    #[case::lowercase("c1a 1n1")]
    #[case::two_spaces("C1A  1N1")]
    #[case::dash("C1A-1N1")]
    #[case::too_short("C1A 1N")]
    #[case::trailing_space("C1A 1N1 ")]
    #[case::empty("")]
    fn it_rejects_invalid_postal_codes(#[case] raw: &str) {
        assert_eq!(
            PostalCode::validate(raw),
            Err(ValidationError::InvalidPostalCode)
        );
    }

    #[test]
    fn it_serializes_unchanged() {
        let postal_code: PostalCode = "C1A1N1".parse().unwrap();
        assert_eq!(postal_code.to_value(), Value::from("C1A1N1"));
    }

    #[test]
    fn non_string_values_are_not_postal_codes() {
        let err = <PostalCode as ScalarType>::parse(Value::from(189250)).unwrap_err();
        assert!(err.into_server_error(Default::default()).message.contains("Not a valid Postal Code"));
    }
}
