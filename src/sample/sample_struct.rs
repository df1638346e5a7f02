use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;

use super::feature_struct::Feature;
use super::label::Label;


/// Struct `Sample` holds a tabular batch sample.
/// A sample owns a list of named feature columns and,
/// once [`Sample::set_target`] is called,
/// a designated target column of categorical labels.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<Label>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Convert `polars::DataFrame` into `Sample`.
    /// This method takes the ownership of `data`.
    /// Columns of a numeric dtype become numeric features;
    /// all other columns are kept as categorical ones.
    /// Call [`Sample::set_target`] to designate the target column.
    pub fn from_dataframe(data: DataFrame) -> Self {
        let (n_sample, n_feature) = data.shape();

        let features = data.get_columns()
            .iter()
            .map(Feature::from_series)
            .collect::<Vec<_>>();

        let name_to_index = Self::index_names(&features);

        Self {
            name_to_index,
            features,
            target: Vec::new(),
            n_sample,
            n_feature,
        }
    }


    /// Read a CSV format file to `Sample` type.
    /// A column becomes numeric when every cell parses as `f64`;
    /// all other columns are kept as categorical ones.
    /// If the file has no header row,
    /// the columns are named `Feat. [1], Feat. [2], ...`.
    pub fn from_csv<P>(file: P, has_header: bool) -> io::Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut names = Vec::new();
        if has_header {
            if let Some(line) = lines.next() {
                names = line?.split(',')
                    .map(|name| name.trim().to_string())
                    .collect::<Vec<_>>();
            }
        }
        let mut columns = vec![Vec::new(); names.len()];
        let mut n_sample = 0_usize;

        // For each line of the file
        for line in lines {
            let line = line?;
            let cells = line.split(',').map(str::trim);

            // If the header does not exist,
            // construct a dummy header from the first line.
            if names.is_empty() {
                let cells = cells.collect::<Vec<_>>();
                let n_feature = cells.len();
                names = (1..=n_feature).map(|i| format!("Feat. [{i}]"))
                    .collect();
                columns = vec![Vec::new(); n_feature];
                for (column, cell) in columns.iter_mut().zip(cells) {
                    column.push(cell.to_string());
                }
                n_sample += 1;
                continue;
            }

            for (column, cell) in columns.iter_mut().zip(cells) {
                column.push(cell.to_string());
            }
            n_sample += 1;
        }

        let features = names.into_iter()
            .zip(columns)
            .map(|(name, cells)| Feature::from_raw_column(name, cells))
            .collect::<Vec<_>>();

        let n_feature = features.len();
        let name_to_index = Self::index_names(&features);

        let sample = Self {
            name_to_index,
            features,
            target: Vec::new(),
            n_sample,
            n_feature,
        };

        Ok(sample)
    }


    /// Set the feature of name `target` to the target column.
    /// The old target column, if any, is dropped.
    /// This method panics when no column has the given name.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Self {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .expect("The target column does not exist");

        let feature = self.features.remove(pos);
        self.target = feature.into_labels();
        self.n_feature -= 1;

        self.name_to_index = Self::index_names(&self.features);

        self
    }


    /// Returns the labels of the target column.
    /// The slice is empty until [`Sample::set_target`] is called.
    pub fn target(&self) -> &[Label] {
        &self.target[..]
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns a new `Sample` holding the given rows,
    /// in the given order.
    pub fn subset(&self, rows: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feature| feature.subset(rows))
            .collect::<Vec<_>>();

        let target = if self.target.is_empty() {
            Vec::new()
        } else {
            rows.iter()
                .map(|&i| self.target[i].clone())
                .collect::<Vec<_>>()
        };

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target,
            n_sample: rows.len(),
            n_feature: self.n_feature,
        }
    }


    /// Split the rows `ix` into a training/test pair,
    /// where the test part takes the rows `ix[start..end]`
    /// and the training part takes the remaining ones.
    pub fn split(&self, ix: &[usize], start: usize, end: usize)
        -> (Self, Self)
    {
        let end = end.min(ix.len());
        let test = &ix[start..end];
        let train = ix[..start].iter()
            .chain(ix[end..].iter())
            .copied()
            .collect::<Vec<_>>();

        (self.subset(&train), self.subset(test))
    }


    /// Panics unless the target column is specified and
    /// covers every row.
    pub(crate) fn target_is_specified(&self) {
        let n_sample = self.shape().0;
        if self.target.len() != n_sample {
            panic!(
                "The target column is not specified.\n\
                 Use `Sample::set_target(\"Column Name\")`."
            );
        }
    }


    fn index_names(features: &[Feature]) -> HashMap<String, usize> {
        features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>()
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name)
            .unwrap_or_else(|| panic!("The column {name:?} does not exist"));
        &self.features[k]
    }
}
