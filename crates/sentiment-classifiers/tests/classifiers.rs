//! Integration tests for the one-vs-rest logistic regression and the
//! multinomial naive Bayes classifiers.

use ndarray::{array, Array2};
use sentiment_classifiers::metrics::accuracy_score;
use sentiment_classifiers::models::classifier_trait::ClassifierModel;
use sentiment_classifiers::models::logistic::OneVsRestLogistic;
use sentiment_classifiers::models::naive_bayes::MultinomialNb;
use sentiment_classifiers::ClassifierError;

fn separable_two_class() -> (Array2<f64>, Vec<i32>) {
    let x = array![
        [2.0, 0.0],
        [1.5, 0.2],
        [1.8, 0.1],
        [1.2, 0.3],
        [0.0, 2.0],
        [0.2, 1.5],
        [0.1, 1.8],
        [0.3, 1.2],
    ];
    (x, vec![1, 1, 1, 1, 0, 0, 0, 0])
}

// ---------------------------------------------------------------------------
// One-vs-rest logistic regression
// ---------------------------------------------------------------------------

#[test]
fn logistic_separates_linearly_separable_data() {
    let (x, y) = separable_two_class();
    let mut clf = OneVsRestLogistic::new(0.5, 500, 0.01).unwrap();
    clf.fit(x.view(), &y).unwrap();

    let pred = clf.predict(x.view()).unwrap();
    assert_eq!(accuracy_score(&y, &pred.to_vec()).unwrap(), 1.0);
}

#[test]
fn logistic_loss_is_non_increasing_after_warmup() {
    let (x, y) = separable_two_class();
    let mut clf = OneVsRestLogistic::new(0.5, 500, 0.01).unwrap();
    clf.fit(x.view(), &y).unwrap();

    for class in [0, 1] {
        let history = clf.loss_history(class).unwrap();
        assert_eq!(history.len(), 500);
        for (i, pair) in history.windows(2).enumerate().skip(10) {
            assert!(
                pair[1] <= pair[0] + 1e-12,
                "class {} loss rose at iteration {}: {} -> {}",
                class,
                i + 1,
                pair[0],
                pair[1]
            );
        }
        assert!(history[499] < history[0]);
    }
}

#[test]
fn logistic_handles_three_classes() {
    let x = array![
        [1.0, 0.0, 0.0],
        [0.9, 0.1, 0.0],
        [0.0, 1.0, 0.0],
        [0.1, 0.9, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.1, 0.9],
    ];
    let y = vec![2, 2, 0, 0, 1, 1];
    let mut clf = OneVsRestLogistic::new(0.5, 1000, 0.0).unwrap();
    clf.fit(x.view(), &y).unwrap();

    assert_eq!(clf.classes(), Some(&[2, 0, 1][..]));
    let proba = clf.predict_proba(x.view()).unwrap();
    assert_eq!(proba.dim(), (6, 3));
    assert!(proba.iter().all(|p| (0.0..=1.0).contains(p)));
    assert_eq!(clf.predict(x.view()).unwrap().to_vec(), y);
}

#[test]
fn logistic_ties_pick_the_first_observed_class() {
    // Zero features keep every weight and bias at zero, so both models
    // predict exactly 0.5 for every row.
    let x = Array2::<f64>::zeros((2, 1));
    let mut clf = OneVsRestLogistic::new(0.1, 10, 0.1).unwrap();
    clf.fit(x.view(), &[5, 9]).unwrap();
    let proba = clf.predict_proba(x.view()).unwrap();
    assert_eq!(proba[(0, 0)], proba[(0, 1)]);
    assert_eq!(clf.predict(x.view()).unwrap().to_vec(), vec![5, 5]);
}

#[test]
fn logistic_rejects_shape_mismatches() {
    let (x, y) = separable_two_class();
    let mut clf = OneVsRestLogistic::default();
    assert!(matches!(
        clf.fit(x.view(), &y[..3]),
        Err(ClassifierError::DimensionMismatch { expected: 8, found: 3, .. })
    ));

    let empty = Array2::<f64>::zeros((0, 2));
    assert_eq!(
        clf.fit(empty.view(), &[]),
        Err(ClassifierError::EmptyInput("fit"))
    );

    clf.fit(x.view(), &y).unwrap();
    let wide = Array2::<f64>::zeros((1, 3));
    assert!(matches!(
        clf.predict(wide.view()),
        Err(ClassifierError::DimensionMismatch { expected: 2, found: 3, .. })
    ));
}

#[test]
fn logistic_rejects_invalid_hyper_parameters() {
    assert!(OneVsRestLogistic::new(0.0, 10, 0.0).is_err());
    assert!(OneVsRestLogistic::new(0.1, 0, 0.0).is_err());
    assert!(OneVsRestLogistic::new(0.1, 10, -0.5).is_err());
}

// ---------------------------------------------------------------------------
// Multinomial naive Bayes
// ---------------------------------------------------------------------------

#[test]
fn naive_bayes_recovers_disjoint_vocabularies() {
    // Columns 0..3 only occur in class 0 documents, 3..6 only in class 1.
    let x_train = array![
        [2.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 3.0, 0.0, 0.0, 0.0],
        [1.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 2.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0, 1.0],
        [0.0, 0.0, 0.0, 2.0, 0.0, 1.0],
    ];
    let y_train = vec![0, 0, 0, 1, 1, 1];
    let mut nb = MultinomialNb::new(1.0).unwrap();
    nb.fit(x_train.view(), &y_train).unwrap();

    let x_test = array![
        [0.0, 2.0, 1.0, 0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 3.0],
        [0.0, 0.0, 0.0, 1.0, 1.0, 0.0],
    ];
    assert_eq!(nb.predict(x_test.view()).unwrap().to_vec(), vec![0, 0, 1, 1]);
}

#[test]
fn naive_bayes_ties_pick_the_first_observed_class() {
    let x = array![[1.0, 1.0], [1.0, 1.0]];
    let mut nb = MultinomialNb::default();

    nb.fit(x.view(), &[7, 3]).unwrap();
    let jll = nb.joint_log_likelihood(x.view()).unwrap();
    assert_eq!(jll[(0, 0)], jll[(0, 1)]);
    assert_eq!(nb.predict(x.view()).unwrap().to_vec(), vec![7, 7]);

    nb.fit(x.view(), &[3, 7]).unwrap();
    assert_eq!(nb.predict(x.view()).unwrap().to_vec(), vec![3, 3]);
}

#[test]
fn naive_bayes_rejects_shape_mismatches() {
    let x = array![[1.0, 0.0], [0.0, 1.0]];
    let mut nb = MultinomialNb::default();
    assert!(matches!(
        nb.fit(x.view(), &[0]),
        Err(ClassifierError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        nb.predict(x.view()),
        Err(ClassifierError::NotFitted(_))
    ));

    nb.fit(x.view(), &[0, 1]).unwrap();
    let narrow = array![[1.0]];
    assert!(matches!(
        nb.predict(narrow.view()),
        Err(ClassifierError::DimensionMismatch { expected: 2, found: 1, .. })
    ));
}

#[test]
fn naive_bayes_rejects_empty_declared_class() {
    let x = array![[1.0, 0.0], [0.0, 1.0]];
    let mut nb = MultinomialNb::default();
    assert_eq!(
        nb.fit_with_classes(x.view(), &[0, 1], &[0, 1, 2]),
        Err(ClassifierError::InsufficientData { class: 2 })
    );
}

#[test]
fn classifiers_leave_inputs_untouched() {
    let (x, y) = separable_two_class();
    let before = x.clone();
    let mut clf = OneVsRestLogistic::new(0.1, 20, 0.1).unwrap();
    clf.fit(x.view(), &y).unwrap();
    let mut nb = MultinomialNb::default();
    nb.fit(x.view(), &y).unwrap();
    assert_eq!(x, before);
}
