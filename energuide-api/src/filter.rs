//! Translation of the `FilterInput` argument into a query predicate.
//!
//! A filter names a [`Field`] and carries a numeric value for at most one
//! [`Comparator`]. The GraphQL schema lets a caller set several comparator
//! keys at once, so the cardinality is checked here before anything is sent
//! to the document store.
use std::cmp::Ordering;

use async_graphql::InputObject;
use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::IntoStaticStr;

use crate::error::ValidationError;
use crate::predicate::Condition;
use crate::predicate::Predicate;
use crate::schema::Field;

/// A relational operator usable in a [`Filter`].
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Comparator {
    Gt,
    Lt,
    Eq,
    Gte,
    Lte,
}

impl Comparator {
    /// The keyword used in `FilterInput`.
    pub fn keyword(self) -> &'static str {
        self.into()
    }

    /// The matching MongoDB query operator.
    pub fn operator(self) -> &'static str {
        match self {
            Comparator::Gt => "$gt",
            Comparator::Lt => "$lt",
            Comparator::Eq => "$eq",
            Comparator::Gte => "$gte",
            Comparator::Lte => "$lte",
        }
    }

    /// Whether a stored value ordered `ordering` relative to the filter value satisfies the comparator.
    pub(crate) fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Comparator::Gt => ordering == Ordering::Greater,
            Comparator::Lt => ordering == Ordering::Less,
            Comparator::Eq => ordering == Ordering::Equal,
            Comparator::Gte => ordering != Ordering::Less,
            Comparator::Lte => ordering != Ordering::Greater,
        }
    }
}

/// Comma separated keywords of every comparator, in declaration order.
pub fn comparator_keywords() -> String {
    Comparator::iter().map(Comparator::keyword).join(",")
}

/// Restricts results to the records whose `field` satisfies a numeric comparison.
#[derive(InputObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "FilterInput")]
pub struct Filter {
    /// The field to compare.
    pub field: Field,
    /// Greater than.
    pub gt: Option<String>,
    /// Less than.
    pub lt: Option<String>,
    /// Equal to.
    pub eq: Option<String>,
    /// Greater than or equal to.
    pub gte: Option<String>,
    /// Less than or equal to.
    pub lte: Option<String>,
}

impl Filter {
    /// A filter on `field` without any comparator.
    pub fn on(field: Field) -> Self {
        Self {
            field,
            gt: None,
            lt: None,
            eq: None,
            gte: None,
            lte: None,
        }
    }

    /// Sets the value of `comparator`.
    pub fn with(mut self, comparator: Comparator, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match comparator {
            Comparator::Gt => self.gt = value,
            Comparator::Lt => self.lt = value,
            Comparator::Eq => self.eq = value,
            Comparator::Gte => self.gte = value,
            Comparator::Lte => self.lte = value,
        }
        self
    }

    fn value(&self, comparator: Comparator) -> Option<&str> {
        match comparator {
            Comparator::Gt => self.gt.as_deref(),
            Comparator::Lt => self.lt.as_deref(),
            Comparator::Eq => self.eq.as_deref(),
            Comparator::Gte => self.gte.as_deref(),
            Comparator::Lte => self.lte.as_deref(),
        }
    }

    /// The comparators that carry a non-empty value.
    pub fn comparisons(&self) -> impl Iterator<Item = (Comparator, &str)> + '_ {
        Comparator::iter().filter_map(move |comparator| {
            self.value(comparator)
                .filter(|value| !value.is_empty())
                .map(|value| (comparator, value))
        })
    }
}

pub fn count_comparators(filter: Option<&Filter>) -> usize {
    filter.map_or(0, |filter| filter.comparisons().count())
}

pub fn has_more_than_one_comparator(filter: Option<&Filter>) -> bool {
    count_comparators(filter) > 1
}

/// Conjoins `base` with the range condition described by `filter`, if any.
///
/// The base conditions keep their order and the range condition is appended
/// last.
pub fn build_predicate(
    base: Vec<Condition>,
    filter: Option<&Filter>,
) -> Result<Predicate, ValidationError> {
    if has_more_than_one_comparator(filter) {
        return Err(ValidationError::MultipleComparators {
            comparators: comparator_keywords(),
        });
    }

    let mut predicate = Predicate::new(base);
    let comparison = filter.and_then(|filter| {
        filter
            .comparisons()
            .next()
            .map(|(comparator, value)| (filter.field, comparator, value))
    });
    if let Some((field, comparator, raw)) = comparison {
        let value = raw.trim().parse::<i64>().map_err(|_| {
            ValidationError::InvalidComparatorValue {
                comparator,
                value: raw.to_string(),
            }
        })?;
        predicate.push(Condition::Compare {
            column: field.column(),
            comparator,
            value,
        });
    }
    Ok(predicate)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::predicate::Literal;

    fn year_built() -> Filter {
        Filter::on(Field::YearBuilt)
    }

    #[test]
    fn absent_filters_have_no_comparator() {
        assert_eq!(count_comparators(None), 0);
        assert!(!has_more_than_one_comparator(None));
        assert_eq!(count_comparators(Some(&year_built())), 0);
    }

    #[rstest]
    #[case::single(year_built().with(Comparator::Gt, "1900"), 1)]
    #[case::two(year_built().with(Comparator::Gt, "1979").with(Comparator::Lt, "1979"), 2)]
    #[case::beyond_gt_and_lt(year_built().with(Comparator::Eq, "1").with(Comparator::Lte, "2"), 2)]
    #[case::empty_values_are_ignored(year_built().with(Comparator::Gt, "").with(Comparator::Lt, "1979"), 1)]
    #[case::all(
        year_built()
            .with(Comparator::Gt, "1")
            .with(Comparator::Lt, "2")
            .with(Comparator::Eq, "3")
            .with(Comparator::Gte, "4")
            .with(Comparator::Lte, "5"),
        5
    )]
    fn it_counts_non_empty_comparators(#[case] filter: Filter, #[case] expected: usize) {
        assert_eq!(count_comparators(Some(&filter)), expected);
        assert_eq!(has_more_than_one_comparator(Some(&filter)), expected > 1);
    }

    #[test]
    fn it_rejects_multiple_comparators() {
        let filter = year_built()
            .with(Comparator::Gt, "1979")
            .with(Comparator::Lt, "1979");
        let err = build_predicate(vec![], Some(&filter)).unwrap_err();
        insta::assert_snapshot!(err, @"You can only use gt,lt,eq,gte,lte one at a time");
    }

    #[test]
    fn it_appends_the_range_condition_last() {
        let base = Condition::equals("HOUSE_ID", Literal::Int(189250));
        let filter = year_built().with(Comparator::Gt, "1900");
        let predicate = build_predicate(vec![base.clone()], Some(&filter)).unwrap();
        assert_eq!(
            predicate.conditions(),
            &[
                base,
                Condition::Compare {
                    column: "YEARBUILT",
                    comparator: Comparator::Gt,
                    value: 1900,
                }
            ]
        );
    }

    #[rstest]
    #[case(Comparator::Lt, "-12", -12)]
    #[case(Comparator::Eq, " 1979 ", 1979)]
    #[case(Comparator::Gte, "0", 0)]
    fn it_parses_the_comparator_value(
        #[case] comparator: Comparator,
        #[case] raw: &str,
        #[case] expected: i64,
    ) {
        let filter = year_built().with(comparator, raw);
        let predicate = build_predicate(vec![], Some(&filter)).unwrap();
        assert_eq!(
            predicate.conditions(),
            &[Condition::Compare {
                column: "YEARBUILT",
                comparator,
                value: expected,
            }]
        );
    }

    #[rstest]
    #[case("abc")]
    #[case("19.5")]
    #[case("1900abc")]
    fn it_rejects_non_numeric_values(#[case] raw: &str) {
        let filter = year_built().with(Comparator::Gt, raw);
        assert_eq!(
            build_predicate(vec![], Some(&filter)),
            Err(ValidationError::InvalidComparatorValue {
                comparator: Comparator::Gt,
                value: raw.to_string(),
            })
        );
    }

    #[test]
    fn a_filter_without_value_adds_nothing() {
        let base = vec![Condition::starts_with("MAIL_PCODE", "C1A")];
        let predicate = build_predicate(base.clone(), Some(&year_built())).unwrap();
        assert_eq!(predicate.conditions(), base.as_slice());
    }

    #[rstest]
    #[case(Comparator::Gt, Ordering::Greater, true)]
    #[case(Comparator::Gt, Ordering::Equal, false)]
    #[case(Comparator::Lt, Ordering::Less, true)]
    #[case(Comparator::Eq, Ordering::Equal, true)]
    #[case(Comparator::Eq, Ordering::Less, false)]
    #[case(Comparator::Gte, Ordering::Equal, true)]
    #[case(Comparator::Gte, Ordering::Less, false)]
    #[case(Comparator::Lte, Ordering::Equal, true)]
    #[case(Comparator::Lte, Ordering::Greater, false)]
    fn comparators_accept_orderings(
        #[case] comparator: Comparator,
        #[case] ordering: Ordering,
        #[case] expected: bool,
    ) {
        assert_eq!(comparator.accepts(ordering), expected);
    }
}
