use polars::prelude::*;

use std::ops::Index;

use super::label::Label;


/// A named column of a [`Sample`](crate::Sample).
/// Columns ingested from a DataFrame or a CSV file keep their dtype:
/// numeric columns can be split on,
/// while categorical (textual/boolean) columns are only usable
/// as the target of a classification task.
#[derive(Debug, Clone)]
pub enum Feature {
    /// A column of numeric values.
    Numeric(NumericFeature),
    /// A column of textual or boolean values.
    Categorical(CategoricalFeature),
}


/// A feature column holding `f64` values.
#[derive(Debug, Clone)]
pub struct NumericFeature {
    pub(crate) name: String,
    pub(crate) values: Vec<f64>,
}


/// A feature column holding textual values.
#[derive(Debug, Clone)]
pub struct CategoricalFeature {
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}


impl Feature {
    /// Convert `polars::Series` into `Feature`.
    /// Columns of a numeric dtype become [`Feature::Numeric`];
    /// boolean, string, and any other dtype become
    /// [`Feature::Categorical`].
    pub fn from_series(series: &Series) -> Self {
        let name = series.name().to_string();
        let dtype = series.dtype();

        if dtype.is_numeric() {
            let values = series.cast(&DataType::Float64)
                .expect("The series is not castable to a dtype f64")
                .f64()
                .expect("The series is not a dtype f64")
                .into_iter()
                .collect::<Option<Vec<_>>>()
                .unwrap();
            return Self::Numeric(NumericFeature { name, values });
        }

        let values = match dtype {
            DataType::Boolean => {
                series.bool()
                    .expect("The series is not a dtype bool")
                    .into_iter()
                    .map(|value| value.unwrap().to_string())
                    .collect::<Vec<_>>()
            },
            DataType::Utf8 => {
                series.utf8()
                    .expect("The series is not a dtype utf8")
                    .into_iter()
                    .map(|value| value.unwrap().to_string())
                    .collect::<Vec<_>>()
            },
            _ => {
                series.iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
            },
        };
        Self::Categorical(CategoricalFeature { name, values })
    }


    /// Construct a feature from the raw cells of a CSV column.
    /// The column becomes numeric when every cell parses as `f64`.
    pub(crate) fn from_raw_column(name: String, cells: Vec<String>) -> Self {
        let values = cells.iter()
            .map(|cell| cell.parse::<f64>())
            .collect::<Result<Vec<_>, _>>();

        match values {
            Ok(values) => Self::Numeric(NumericFeature { name, values }),
            Err(_) => Self::Categorical(CategoricalFeature { name, values: cells }),
        }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        match self {
            Self::Numeric(feat) => &feat.name,
            Self::Categorical(feat) => &feat.name,
        }
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(feat) => feat.values.len(),
            Self::Categorical(feat) => feat.values.len(),
        }
    }


    /// Returns `true` if the number of items is equal to `0`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /// Returns `true` if this column holds numeric values.
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Numeric(_) => true,
            Self::Categorical(_) => false,
        }
    }


    /// Returns a new feature holding the given rows, in the given order.
    pub(crate) fn subset(&self, rows: &[usize]) -> Self {
        match self {
            Self::Numeric(feat) => {
                let values = rows.iter()
                    .map(|&i| feat.values[i])
                    .collect::<Vec<_>>();
                Self::Numeric(NumericFeature {
                    name: feat.name.clone(),
                    values,
                })
            },
            Self::Categorical(feat) => {
                let values = rows.iter()
                    .map(|&i| feat.values[i].clone())
                    .collect::<Vec<_>>();
                Self::Categorical(CategoricalFeature {
                    name: feat.name.clone(),
                    values,
                })
            },
        }
    }


    /// Consume the column into target labels.
    pub(crate) fn into_labels(self) -> Vec<Label> {
        match self {
            Self::Numeric(feat) => {
                feat.values.into_iter()
                    .map(Label::Numeric)
                    .collect()
            },
            Self::Categorical(feat) => {
                feat.values.into_iter()
                    .map(Label::Text)
                    .collect()
            },
        }
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        match self {
            Self::Numeric(feat) => &feat[idx],
            Self::Categorical(feat) => {
                panic!("The column {:?} is not numeric", feat.name)
            },
        }
    }
}


impl Index<usize> for NumericFeature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.values[idx]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_column_numeric() {
        let cells = ["1", "2.5", "-3e2"].map(String::from).to_vec();
        let feat = Feature::from_raw_column("x".to_string(), cells);
        assert!(feat.is_numeric(), "expected a numeric column.");
        assert_eq!(feat[2], -300.0, "expected -300.0, got {}.", feat[2]);
    }

    #[test]
    fn test_raw_column_categorical() {
        let cells = ["1", "two", "3"].map(String::from).to_vec();
        let feat = Feature::from_raw_column("x".to_string(), cells);
        assert!(!feat.is_numeric(), "expected a categorical column.");
    }
}
