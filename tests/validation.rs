use minicart::prelude::*;

use polars::prelude::*;


#[test]
fn three_categories_are_rejected() {
    let x = Series::new("x", &[1.0, 2.0, 3.0, 4.0]);
    let y = Series::new("y", &[0_i64, 1, 2, 1]);
    let df = DataFrame::new(vec![x, y]).unwrap();
    let sample = Sample::from_dataframe(df).set_target("y");

    let res = DecisionTree::new().fit(&sample);
    assert!(
        matches!(&res, Err(SchemaError::CategoryCount(3))),
        "expected a category count error, got {res:?}.",
    );
}


#[test]
fn text_feature_is_rejected() {
    let x = Series::new("x", &[1.0, 2.0, 3.0]);
    let color = Series::new("color", &["red", "blue", "red"]);
    let y = Series::new("y", &[0_i64, 1, 0]);
    let df = DataFrame::new(vec![x, color, y]).unwrap();
    let sample = Sample::from_dataframe(df).set_target("y");

    let res = DecisionTree::new().fit(&sample);
    match res {
        Err(SchemaError::NonNumericFeature(name)) => {
            assert_eq!(name, "color", "expected \"color\", got {name:?}.");
        },
        other => panic!("expected a non-numeric feature error, got {other:?}."),
    }
}


#[test]
fn boolean_feature_is_rejected() {
    let x = Series::new("x", &[1.0, 2.0, 3.0]);
    let flag = Series::new("flag", &[true, false, true]);
    let y = Series::new("y", &[0_i64, 1, 0]);
    let df = DataFrame::new(vec![x, flag, y]).unwrap();
    let sample = Sample::from_dataframe(df).set_target("y");

    let res = DecisionTree::new().fit(&sample);
    assert!(
        matches!(&res, Err(SchemaError::NonNumericFeature(_))),
        "expected a non-numeric feature error, got {res:?}.",
    );
}


#[test]
fn text_target_is_accepted() {
    // The target is categorical, so a string-coded column is fine.
    let x = Series::new("x", &[1.0, 2.0, 3.0, 4.0]);
    let y = Series::new("y", &["no", "no", "yes", "yes"]);
    let df = DataFrame::new(vec![x, y]).unwrap();
    let sample = Sample::from_dataframe(df).set_target("y");

    let f = DecisionTree::new().max_depth(1).fit(&sample).unwrap();
    assert_eq!(
        f.classes(),
        &[Label::from("no"), Label::from("yes")],
    );

    let probabilities = f.predict_all(&sample);
    assert_eq!(probabilities[0], [1.0, 0.0]);
    assert_eq!(probabilities[3], [0.0, 1.0]);
}


#[test]
#[should_panic]
fn unset_target_panics() {
    let x = Series::new("x", &[1.0, 2.0]);
    let y = Series::new("y", &[0_i64, 1]);
    let df = DataFrame::new(vec![x, y]).unwrap();
    let sample = Sample::from_dataframe(df);

    let _ = DecisionTree::new().fit(&sample);
}
