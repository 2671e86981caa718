use async_graphql::InputValueResult;
use async_graphql::Scalar;
use async_graphql::ScalarType;
use async_graphql::Value;

/// A stored evaluation value: a number, a string or a boolean, served as found in the record.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum(pub serde_json::Value);

#[Scalar(name = "Datum")]
impl ScalarType for Datum {
    fn parse(value: Value) -> InputValueResult<Self> {
        Ok(Self(value.into_json()?))
    }

    fn to_value(&self) -> Value {
        Value::from_json(self.0.clone()).unwrap_or(Value::Null)
    }
}
