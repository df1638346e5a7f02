use minicart::prelude::*;

use polars::prelude::*;


// Toy example  (o/x are the pos/neg examples)
// The lines show the partition a depth-3 tree recovers:
// one split at `x <= 6`, then one at `y <= 7` on the right side.
//
// 12|           x    |          x
//   |                |
// 10|        x       |
//   |                |
//  8|   x            |________________ 7.0
//   |                |       o
//  6|                |
//   |                |  o           o
//  4|                | o
//   |                |
//  2|  x             |
//   |________________|________________
//      2    4    6   |  8   10   12
//                   6.0
//
fn planar_sample() -> Sample {
    let s1 = Series::new("x", &[2.0, 3.0, 6.0, 7.0, 9.0, 11.0, 12.0, 13.0]);
    let s2 = Series::new("y", &[2.0, 8.0, 10.0, 4.0, 3.0, 7.0, 12.0, 5.0]);
    let target = Series::new("class", &[-1_i64, -1, -1, 1, 1, 1, -1, 1]);

    let df = DataFrame::new(vec![s1, s2, target]).unwrap();
    Sample::from_dataframe(df).set_target("class")
}


#[test]
fn separable_single_feature() {
    let x = Series::new("x", &[1.0, 2.0, 3.0, 4.0]);
    let y = Series::new("y", &[0_i64, 0, 1, 1]);
    let df = DataFrame::new(vec![x, y]).unwrap();
    let sample = Sample::from_dataframe(df).set_target("y");

    let tree = DecisionTree::new().max_depth(1);
    let f = tree.fit(&sample).unwrap();

    // One split at `x <= 2`, both children pure.
    assert_eq!(f.depth(), 2);
    assert_eq!(f.leaves(), 2);
    assert_eq!(
        f.classes(),
        &[Label::Numeric(0.0), Label::Numeric(1.0)],
    );

    let probabilities = f.predict_all(&sample);
    assert_eq!(probabilities[0], [1.0, 0.0]);
    assert_eq!(probabilities[1], [1.0, 0.0]);
    assert_eq!(probabilities[2], [0.0, 1.0]);
    assert_eq!(probabilities[3], [0.0, 1.0]);
}


#[test]
fn pure_sample_becomes_single_leaf() {
    let x = Series::new("x", &[1.0, 2.0, 3.0, 4.0]);
    let y = Series::new("y", &[1_i64, 1, 1, 1]);
    let df = DataFrame::new(vec![x, y]).unwrap();
    let sample = Sample::from_dataframe(df).set_target("y");

    let f = DecisionTree::new().fit(&sample).unwrap();

    // The root is already pure, so no split improves it.
    assert_eq!(f.depth(), 1);
    assert_eq!(f.leaves(), 1);

    for probability in f.predict_all(&sample) {
        assert_eq!(probability, [1.0, 0.0]);
    }
}


#[test]
fn constant_feature_makes_a_leaf() {
    // The only feature takes a single value over all rows,
    // so the node cannot split on it,
    // no matter how impure the target is.
    let x = Series::new("x", &[7.0, 7.0, 7.0, 7.0]);
    let y = Series::new("y", &[0_i64, 1, 0, 1]);
    let df = DataFrame::new(vec![x, y]).unwrap();
    let sample = Sample::from_dataframe(df).set_target("y");

    let f = DecisionTree::new().fit(&sample).unwrap();

    assert_eq!(f.leaves(), 1);
    assert_eq!(f.predict_all(&sample)[0], [0.5, 0.5]);
}


#[test]
fn leaf_probabilities_sum_to_one() {
    let sample = planar_sample();

    let f = DecisionTree::new().max_depth(3).fit(&sample).unwrap();

    for probability in f.predict_all(&sample) {
        let total = probability[0] + probability[1];
        assert!(
            (total - 1.0).abs() < 1e-9,
            "probabilities {probability:?} sum to {total}, expected 1.",
        );
    }
}


#[test]
fn depth_never_exceeds_the_cap() {
    // Alternating labels keep every node impure,
    // so the tree grows until the depth cap stops it.
    let values = (0..32).map(|i| i as f64).collect::<Vec<_>>();
    let labels = (0..32).map(|i| i % 2).collect::<Vec<_>>();
    let x = Series::new("x", &values);
    let y = Series::new("y", &labels);
    let df = DataFrame::new(vec![x, y]).unwrap();
    let sample = Sample::from_dataframe(df).set_target("y");

    for max_depth in 1..=4 {
        let f = DecisionTree::new()
            .max_depth(max_depth)
            .fit(&sample)
            .unwrap();
        assert!(
            f.depth() <= max_depth + 1,
            "a tree with cap {max_depth} has depth {}.",
            f.depth(),
        );
    }
}


#[test]
fn fitting_twice_is_deterministic() {
    let sample = planar_sample();

    let tree = DecisionTree::new().max_depth(4);
    let f1 = tree.fit(&sample).unwrap();
    let f2 = tree.fit(&sample).unwrap();

    assert_eq!(f1, f2, "two fits of one sample disagree.");
}


#[test]
fn training_rows_reach_their_own_leaf() {
    let sample = planar_sample();

    let f = DecisionTree::new().max_depth(3).fit(&sample).unwrap();

    // A perfectly grown tree routes every training row to a leaf
    // whose majority category is the row's own label.
    let classes = f.classes().clone();
    for (row, label) in sample.target().iter().enumerate() {
        let probability = f.probability(&sample, row);
        let predicted = if probability[0] >= probability[1] {
            &classes[0]
        } else {
            &classes[1]
        };
        assert_eq!(
            predicted, label,
            "row {row} was routed to a leaf of the other category.",
        );
    }
}


#[test]
fn observer_sees_every_node() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let x = Series::new("x", &[1.0, 2.0, 3.0, 4.0]);
    let y = Series::new("y", &[0_i64, 0, 1, 1]);
    let df = DataFrame::new(vec![x, y]).unwrap();
    let sample = Sample::from_dataframe(df).set_target("y");

    let events = Rc::new(RefCell::new(Vec::new()));
    let record = Rc::clone(&events);

    let tree = DecisionTree::new()
        .max_depth(1)
        .observer(move |event| record.borrow_mut().push(event));
    let f = tree.fit(&sample).unwrap();

    let events = events.borrow();
    assert_eq!(
        events[0],
        GrowthEvent::Processing { depth: 1, n_sample: 4 },
    );
    // The root splits once; both children lie past the depth cap.
    assert_eq!(f.leaves(), 2);
    assert_eq!(
        events.iter()
            .filter(|e| matches!(e, GrowthEvent::MaxDepthReached { .. }))
            .count(),
        2,
    );
}


#[test]
fn prediction_ignores_extra_columns() {
    let sample = planar_sample();
    let f = DecisionTree::new().max_depth(3).fit(&sample).unwrap();

    // A prediction-only sample may keep the target column around;
    // the traversal never looks at it.
    let s1 = Series::new("x", &[7.0, 2.0]);
    let s2 = Series::new("y", &[4.0, 2.0]);
    let target = Series::new("class", &[1_i64, -1]);
    let df = DataFrame::new(vec![s1, s2, target]).unwrap();
    let test = Sample::from_dataframe(df);

    let probabilities = f.predict_all(&test);
    assert_eq!(probabilities.len(), 2);
    assert_eq!(probabilities[0], f.probability(&sample, 3));
    assert_eq!(probabilities[1], f.probability(&sample, 0));
}
