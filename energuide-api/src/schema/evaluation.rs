use crate::scalars::Datum;
use crate::store::Record;

/// An EnerGuide evaluation of a dwelling.
///
/// Resolvers are generated from the field table in `fields.rs`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    record: Record,
}

impl Evaluation {
    pub fn new(record: Record) -> Self {
        Self { record }
    }

    /// Folds the evaluations of one dwelling into a single composite view.
    ///
    /// `records` must be ordered from the most recent evaluation to the oldest.
    /// The most recent value of each column wins, null included; older
    /// evaluations only add the columns newer ones lack.
    pub fn merge(records: Vec<Record>) -> Option<Self> {
        let mut records = records.into_iter();
        let mut merged = records.next()?;
        for older in records {
            for (column, value) in older {
                merged.entry(column).or_insert(value);
            }
        }
        Some(Self::new(merged))
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub(crate) fn datum(&self, column: &str) -> Option<Datum> {
        self.record
            .get(column)
            .filter(|value| !value.is_null())
            .cloned()
            .map(Datum)
    }
}
