//! Defines the impurity measure and the exhaustive split search.
use rayon::prelude::*;

use crate::Sample;
use crate::sample::{Feature, Label};
use crate::common::type_and_struct::*;


/// Compute the Gini-style impurity of the rows `indices`.
/// The score is `2 p (1 - p)`,
/// where `p` is the observed frequency of `classes[0]`;
/// an empty slice scores `0`.
/// The score is symmetric in the category choice and
/// takes values in `[0, 0.5]`,
/// attaining the maximum `0.5` when both categories are
/// equally frequent.
#[inline]
pub(super) fn impurity(
    target: &[Label],
    indices: &[usize],
    classes: &[Label; 2],
) -> Impurity
{
    if indices.is_empty() {
        return Impurity::from(0.0);
    }

    let n = indices.len() as f64;
    let count = indices.iter()
        .filter(|&&i| target[i] == classes[0])
        .count() as f64;
    let p = count / n;

    Impurity::from(2.0 * p * (1.0 - p))
}


/// Compute the class frequencies of the rows `indices`,
/// ordered by `classes`.
/// The pair sums to `1`.
#[inline]
pub(super) fn class_probability(
    target: &[Label],
    indices: &[usize],
    classes: &[Label; 2],
) -> [f64; 2]
{
    let n = indices.len() as f64;
    let count = indices.iter()
        .filter(|&&i| target[i] == classes[0])
        .count() as f64;
    let p = count / n;

    [p, 1.0 - p]
}


/// Find the best pair of feature name and threshold over
/// the rows `indices`.
/// Every distinct value observed in a feature column is a
/// candidate threshold;
/// a feature taking a single value over the rows is skipped.
/// Candidates are scored by the information gain
/// `parent - (|L|/n * impurity(L) + |R|/n * impurity(R))`,
/// and ties resolve to the first candidate in enumeration order,
/// since the running best is only replaced on strict improvement.
/// Returns `None` when every feature was skipped.
#[inline]
pub(super) fn best_split<'a>(
    sample: &'a Sample,
    indices: &[usize],
    classes: &[Label; 2],
    parent: Impurity,
) -> Option<(&'a str, Threshold, Gain)>
{
    let target = sample.target();

    // Score the features in parallel.
    // The winner is picked by the sequential fold below,
    // so ties resolve exactly as in a serial scan.
    let candidates = sample.features()
        .par_iter()
        .map(|feature| best_split_on(feature, target, indices, classes, parent))
        .collect::<Vec<_>>();

    let mut best: Option<(&str, Threshold, Gain)> = None;
    for (feature, candidate) in sample.features().iter().zip(candidates) {
        let Some((threshold, gain)) = candidate else { continue; };

        if best.as_ref().map_or(true, |&(_, _, g)| gain > g) {
            best = Some((feature.name(), threshold, gain));
        }
    }
    best
}


/// Find the best threshold on a single feature column,
/// or `None` when the column is constant over the rows.
fn best_split_on(
    feature: &Feature,
    target: &[Label],
    indices: &[usize],
    classes: &[Label; 2],
    parent: Impurity,
) -> Option<(Threshold, Gain)>
{
    let candidates = distinct_values(feature, indices);
    if candidates.len() <= 1 {
        return None;
    }

    let n = indices.len() as f64;
    let mut best: Option<(Threshold, Gain)> = None;
    for value in candidates {
        let (lindices, rindices): (Vec<usize>, Vec<usize>) = indices.iter()
            .copied()
            .partition(|&i| feature[i] <= value);

        let lp = lindices.len() as f64 / n;
        let rp = rindices.len() as f64 / n;
        let l_impurity = impurity(target, &lindices[..], classes);
        let r_impurity = impurity(target, &rindices[..], classes);

        let gain = parent - (lp * l_impurity + rp * r_impurity);

        if best.map_or(true, |(_, g)| gain > g) {
            best = Some((Threshold::from(value), gain));
        }
    }
    best
}


/// The distinct values of `feature` over the rows `indices`,
/// in first-appearance order.
fn distinct_values(feature: &Feature, indices: &[usize]) -> Vec<f64> {
    let mut values = Vec::new();
    for &i in indices {
        let value = feature[i];
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}
