//! Defines the trait of trained models.
use crate::Sample;


/// A trait that defines the prediction interface of
/// trained classifiers.
pub trait Classifier {
    /// Returns the class-probability pair of the `row`-th example
    /// in `sample`.
    /// The pair is ordered by the sorted pair of target categories
    /// established when the classifier was trained.
    fn probability(&self, sample: &Sample, row: usize) -> [f64; 2];


    /// Returns one probability pair per row of `sample`,
    /// in row order.
    fn predict_all(&self, sample: &Sample) -> Vec<[f64; 2]> {
        let (n_sample, _) = sample.shape();
        (0..n_sample).map(|row| self.probability(sample, row))
            .collect()
    }
}
