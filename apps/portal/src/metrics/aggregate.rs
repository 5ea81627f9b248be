use std::collections::{BTreeMap, BTreeSet};

use crate::filter::FieldValues;

pub fn count_where<R>(records: &[R], predicate: impl Fn(&R) -> bool) -> usize {
    records.iter().filter(|r| predicate(r)).count()
}

pub fn sum_by<R>(records: &[R], value: impl Fn(&R) -> u64) -> u64 {
    records.iter().map(value).sum()
}

/// Mean of `value` across `records`; `None` for an empty slice.
pub fn average_by<R>(records: &[R], value: impl Fn(&R) -> f64) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let total: f64 = records.iter().map(value).sum();
    Some(total / records.len() as f64)
}

/// Distinct values of a field across `records`, ascending. Multi-valued
/// fields contribute each of their values.
pub fn distinct_sorted_values<R, F>(records: &[R], values: F) -> Vec<String>
where
    F: for<'a> Fn(&'a R) -> FieldValues<'a>,
{
    records
        .iter()
        .flat_map(|r| values(r))
        .map(|v| v.into_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Number of records per distinct field value, keyed ascending.
pub fn tally<R, F>(records: &[R], values: F) -> BTreeMap<String, usize>
where
    F: for<'a> Fn(&'a R) -> FieldValues<'a>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        for value in values(record) {
            *counts.entry(value.into_owned()).or_insert(0) += 1;
        }
    }
    counts
}
