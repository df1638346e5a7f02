//! This file defines some functions that check schema pre-conditions
//! before growing a tree.

use crate::Sample;
use crate::sample::Label;
use crate::errors::SchemaError;


/// Check whether every feature column of `sample` is numeric.
#[inline]
pub(crate) fn check_numeric_features(sample: &Sample)
    -> Result<(), SchemaError>
{
    for feature in sample.features() {
        if !feature.is_numeric() {
            let name = feature.name().to_string();
            return Err(SchemaError::NonNumericFeature(name));
        }
    }
    Ok(())
}


/// Derive the global category pair from the target column of `sample`.
/// The pair is sorted in ascending order so that
/// every leaf orders its probabilities the same way.
/// A sample whose rows all share one category is the degenerate
/// pure case: both entries of the pair name that category and
/// the tree collapses to a single leaf.
#[inline]
pub(crate) fn check_binary_target(sample: &Sample)
    -> Result<[Label; 2], SchemaError>
{
    let mut categories = Vec::<Label>::new();
    for label in sample.target() {
        if !categories.contains(label) {
            categories.push(label.clone());
        }
    }

    match categories.len() {
        1 => {
            let only = categories.pop().unwrap();
            Ok([only.clone(), only])
        },
        2 => {
            categories.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let classes = categories.try_into()
                .expect("The category count is checked above");
            Ok(classes)
        },
        n => Err(SchemaError::CategoryCount(n)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sample;
    use crate::sample::Label;
    use polars::prelude::*;

    #[test]
    fn test_binary_target_sorted() {
        let s = Series::new("x", &[1.0, 2.0, 3.0]);
        let t = Series::new("class", &[1_i64, 0, 1]);
        let df = DataFrame::new(vec![s, t]).unwrap();
        let sample = Sample::from_dataframe(df).set_target("class");

        let res = check_binary_target(&sample).unwrap();
        let exp = [Label::Numeric(0.0), Label::Numeric(1.0)];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_target_with_three_categories() {
        let s = Series::new("x", &[1.0, 2.0, 3.0]);
        let t = Series::new("class", &[0_i64, 1, 2]);
        let df = DataFrame::new(vec![s, t]).unwrap();
        let sample = Sample::from_dataframe(df).set_target("class");

        let res = check_binary_target(&sample);
        assert!(
            matches!(&res, Err(SchemaError::CategoryCount(3))),
            "expected a category count error, got {res:?}.",
        );
    }
}
