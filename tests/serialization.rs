use minicart::prelude::*;

use polars::prelude::*;

use std::env;
use std::fs;


fn trained_classifier() -> (Sample, DecisionTreeClassifier) {
    let x = Series::new("x", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let y = Series::new("y", &[6.0, 1.0, 4.0, 2.0, 5.0, 3.0]);
    let target = Series::new("class", &[0_i64, 0, 0, 1, 1, 1]);
    let df = DataFrame::new(vec![x, y, target]).unwrap();
    let sample = Sample::from_dataframe(df).set_target("class");

    let f = DecisionTree::new().max_depth(3).fit(&sample).unwrap();
    (sample, f)
}


#[test]
fn json_roundtrip_preserves_the_tree() {
    let (sample, f) = trained_classifier();

    let path = env::temp_dir().join("minicart_classifier.json");
    f.save_json(&path).unwrap();
    let g = DecisionTreeClassifier::load_json(&path).unwrap();
    fs::remove_file(path).ok();

    assert_eq!(f, g, "the reloaded classifier differs.");
    assert_eq!(f.predict_all(&sample), g.predict_all(&sample));
}


#[test]
fn dot_export_writes_every_node() {
    let (_, f) = trained_classifier();

    let path = env::temp_dir().join("minicart_classifier.dot");
    f.to_dot_file(&path).unwrap();
    let graph = fs::read_to_string(&path).unwrap();
    fs::remove_file(path).ok();

    assert!(graph.starts_with("graph DecisionTree {"));
    let boxes = graph.matches("shape = box").count();
    assert_eq!(
        boxes,
        f.leaves(),
        "expected one box per leaf, got {boxes}.",
    );
}
