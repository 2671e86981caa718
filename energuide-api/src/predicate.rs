//! Typed query predicates.
//!
//! A [`Predicate`] is rendered into a MongoDB filter document by the MongoDB
//! store and evaluated directly against records by the in-memory store.
use std::cmp::Ordering;

use mongodb::bson::Bson;
use mongodb::bson::Document;
use mongodb::bson::doc;
use serde_json::Value;

use crate::error::ValidationError;
use crate::filter::Comparator;
use crate::scalars::LatLng;
use crate::store::Record;

/// A scalar compared for equality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Int(i64),
    Text(String),
}

impl From<Literal> for Bson {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Int(value) => Bson::Int64(value),
            Literal::Text(value) => Bson::String(value),
        }
    }
}

/// One clause of a [`Predicate`].
///
/// Columns are storage column names; dotted columns address nested documents.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    Equals {
        column: &'static str,
        value: Literal,
    },
    StartsWith {
        column: &'static str,
        prefix: String,
    },
    /// `column` holds a `[longitude, latitude]` pair inside the closed `ring`.
    WithinPolygon {
        column: &'static str,
        ring: Vec<[f64; 2]>,
    },
    Compare {
        column: &'static str,
        comparator: Comparator,
        value: i64,
    },
}

impl Condition {
    pub fn equals(column: &'static str, value: Literal) -> Self {
        Condition::Equals { column, value }
    }

    pub fn starts_with(column: &'static str, prefix: impl Into<String>) -> Self {
        Condition::StartsWith {
            column,
            prefix: prefix.into(),
        }
    }

    /// Builds a polygon containment condition from the caller's vertices.
    ///
    /// Consecutive duplicates are dropped and the ring is closed when the last
    /// vertex does not repeat the first one.
    pub fn within_polygon(
        column: &'static str,
        points: &[LatLng],
    ) -> Result<Self, ValidationError> {
        let mut ring: Vec<[f64; 2]> = points
            .iter()
            .map(|point| [point.lng.degrees(), point.lat.degrees()])
            .collect();
        ring.dedup();
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        if ring.len() < 3 {
            return Err(ValidationError::InvalidPolygon(ring.len()));
        }
        ring.push(ring[0]);
        Ok(Condition::WithinPolygon { column, ring })
    }

    fn to_document(&self) -> Document {
        let mut document = Document::new();
        match self {
            Condition::Equals { column, value } => {
                document.insert(*column, value.clone());
            }
            Condition::StartsWith { column, prefix } => {
                document.insert(
                    *column,
                    doc! { "$regex": format!("^{}", regex::escape(prefix)) },
                );
            }
            Condition::WithinPolygon { column, ring } => {
                let ring: Vec<Bson> = ring
                    .iter()
                    .map(|[lng, lat]| Bson::Array(vec![Bson::Double(*lng), Bson::Double(*lat)]))
                    .collect();
                document.insert(
                    *column,
                    doc! {
                        "$geoWithin": {
                            "$geometry": {
                                "type": "Polygon",
                                "coordinates": [ring]
                            }
                        }
                    },
                );
            }
            Condition::Compare {
                column,
                comparator,
                value,
            } => {
                let mut comparison = Document::new();
                comparison.insert(comparator.operator(), *value);
                document.insert(*column, comparison);
            }
        }
        document
    }

    fn matches(&self, record: &Record) -> bool {
        match self {
            Condition::Equals { column, value } => {
                match (lookup(record, column), value) {
                    (Some(stored), Literal::Int(expected)) => {
                        stored.as_i64() == Some(*expected)
                            || stored.as_f64() == Some(*expected as f64)
                    }
                    (Some(stored), Literal::Text(expected)) => {
                        stored.as_str() == Some(expected.as_str())
                    }
                    (None, _) => false,
                }
            }
            Condition::StartsWith { column, prefix } => lookup(record, column)
                .and_then(Value::as_str)
                .is_some_and(|stored| stored.starts_with(prefix.as_str())),
            Condition::WithinPolygon { column, ring } => lookup(record, column)
                .and_then(as_position)
                .is_some_and(|position| contains(ring, position)),
            Condition::Compare {
                column,
                comparator,
                value,
            } => lookup(record, column)
                .and_then(Value::as_f64)
                .and_then(|stored| stored.partial_cmp(&(*value as f64)))
                .is_some_and(|ordering| comparator.accepts(ordering)),
        }
    }
}

/// A conjunction of [`Condition`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// The MongoDB filter document; an empty predicate matches every document.
    pub fn to_document(&self) -> Document {
        if self.conditions.is_empty() {
            return Document::new();
        }
        let conditions: Vec<Document> = self
            .conditions
            .iter()
            .map(Condition::to_document)
            .collect();
        doc! { "$and": conditions }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.matches(record))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Result ordering on a single column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub column: &'static str,
    pub direction: Direction,
}

impl Sort {
    pub fn descending(column: &'static str) -> Self {
        Self {
            column,
            direction: Direction::Descending,
        }
    }

    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        let order = match self.direction {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        };
        document.insert(self.column, order);
        document
    }

    /// Orders two records the way the document store would.
    ///
    /// Missing values sort before numbers, numbers before strings.
    pub fn compare(&self, left: &Record, right: &Record) -> Ordering {
        let ordering = compare_values(lookup(left, self.column), lookup(right, self.column));
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None | Some(Value::Null) => 0,
            Some(Value::Number(_)) => 1,
            Some(Value::String(_)) => 2,
            Some(_) => 3,
        }
    }

    match (left, right) {
        (Some(Value::Number(left)), Some(Value::Number(right))) => left
            .as_f64()
            .partial_cmp(&right.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(left)), Some(Value::String(right))) => left.cmp(right),
        _ => rank(left).cmp(&rank(right)),
    }
}

fn lookup<'a>(record: &'a Record, column: &str) -> Option<&'a Value> {
    let mut segments = column.split('.');
    let mut value = record.get(segments.next()?)?;
    for segment in segments {
        value = value.get(segment)?;
    }
    Some(value)
}

fn as_position(value: &Value) -> Option<[f64; 2]> {
    match value.as_array()?.as_slice() {
        [lng, lat, ..] => Some([lng.as_f64()?, lat.as_f64()?]),
        _ => None,
    }
}

/// Even-odd rule over a closed ring of `[x, y]` vertices.
fn contains(ring: &[[f64; 2]], [x, y]: [f64; 2]) -> bool {
    let mut inside = false;
    for edge in ring.windows(2) {
        let [[x1, y1], [x2, y2]] = [edge[0], edge[1]];
        if (y1 > y) != (y2 > y) && x < (x2 - x1) * (y - y1) / (y2 - y1) + x1 {
            inside = !inside;
        }
    }
    inside
}
