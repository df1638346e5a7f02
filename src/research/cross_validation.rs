use rand::prelude::*;
use colored::Colorize;

use crate::Sample;

use std::iter::Iterator;

const WIDTH: usize = 9;

/// A struct that generates
/// pairs of training/test samples for cross validation.
/// The rows are cut into `n_folds` near-equal chunks;
/// the `i`-th pair takes the `i`-th chunk as the test part and
/// the remaining rows as the training part,
/// so every row appears in exactly one test fold.
/// # Example
/// ```no_run
/// use minicart::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let cv = CrossValidation::new(&sample)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
///
/// for (train, test) in cv {
///     let tree = DecisionTree::new().max_depth(3);
///     let f = tree.fit(&train).unwrap();
///
///     let n_test = test.shape().0 as f64;
///     let loss = test.target()
///         .iter()
///         .zip(f.predict_all(&test))
///         .filter(|(y, p)| {
///             let predicted = if p[0] >= p[1] { 0 } else { 1 };
///             **y != f.classes()[predicted]
///         })
///         .count() as f64
///         / n_test;
///     println!("[test loss: {loss}]");
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5,
            seed: 1234,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(n_folds > 1, "Cross validation needs at least 2 folds.");
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default value is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default value is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the rows before cutting them into folds.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test pair for the `i`-th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let n_sample = self.sample.shape().0;
        let start = i * n_sample / self.n_folds;
        let end = (i + 1) * n_sample / self.n_folds;
        self.sample.split(&self.ix, start, end)
    }
}


impl<'a> Iterator for CrossValidation<'a> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.shape().0;
            let test_size = output.1.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {train_size: >WIDTH$}]").bold().green(),
                format!("[TEST {test_size: >WIDTH$}]").bold().yellow(),
            );
        }

        Some(output)
    }
}
