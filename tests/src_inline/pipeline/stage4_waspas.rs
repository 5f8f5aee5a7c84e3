use super::*;
use crate::model::Matrix;

#[test]
fn test_blends_sum_and_product() {
    let n = Matrix::from_rows(vec![vec![1.0, 0.5], vec![0.25, 1.0]]).unwrap();
    let w = WeightVector::new(vec![0.6, 0.4]);
    let out = run_stage4(&n, &w, &WaspasParams::default()).unwrap();

    let wsm0 = 1.0 * 0.6 + 0.5 * 0.4;
    let wpm0 = 1.0f64.powf(0.6) * 0.5f64.powf(0.4);
    let wsm1 = 0.25 * 0.6 + 1.0 * 0.4;
    let wpm1 = 0.25f64.powf(0.6) * 1.0f64.powf(0.4);

    assert!((out.wsm[0] - wsm0).abs() < 1e-12);
    assert!((out.wpm[0] - wpm0).abs() < 1e-12);
    assert!((out.scores[0] - (0.5 * wsm0 + 0.5 * wpm0)).abs() < 1e-12);
    assert!((out.scores[1] - (0.5 * wsm1 + 0.5 * wpm1)).abs() < 1e-12);
}

#[test]
fn test_zero_value_zeroes_product() {
    let n = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 1.0]]).unwrap();
    let w = WeightVector::new(vec![0.5, 0.5]);
    let out = run_stage4(&n, &w, &WaspasParams::default()).unwrap();
    assert_eq!(out.wpm[0], 0.0);
    assert_eq!(out.wsm[0], 0.5);
    assert_eq!(out.scores[0], 0.25);
    assert_eq!(out.scores[1], 1.0);
}

#[test]
fn test_zero_value_with_zero_weight_is_neutral() {
    assert_eq!(weighted_product(&[0.0, 0.5], &[0.0, 1.0]), 0.5);
}

#[test]
fn test_lambda_extremes() {
    let n = Matrix::from_rows(vec![vec![0.5, 1.0], vec![1.0, 0.5]]).unwrap();
    let w = WeightVector::new(vec![0.3, 0.7]);

    let sum_only = run_stage4(&n, &w, &WaspasParams::new(1.0).unwrap()).unwrap();
    assert_eq!(sum_only.scores, sum_only.wsm);

    let product_only = run_stage4(&n, &w, &WaspasParams::new(0.0).unwrap()).unwrap();
    assert_eq!(product_only.scores, product_only.wpm);
}

#[test]
fn test_raising_a_value_never_lowers_score() {
    let w = WeightVector::new(vec![0.55, 0.45]);
    let params = WaspasParams::default();
    let mut prev = f64::NEG_INFINITY;
    for step in 0..=10 {
        let v = step as f64 / 10.0;
        let n = Matrix::from_rows(vec![vec![v, 0.7], vec![1.0, 1.0]]).unwrap();
        let score = run_stage4(&n, &w, &params).unwrap().scores[0];
        assert!(score >= prev, "score dropped at v={v}");
        prev = score;
    }
}

#[test]
fn test_weight_length_mismatch_is_shape_error() {
    let n = Matrix::from_rows(vec![vec![1.0, 0.5], vec![0.5, 1.0]]).unwrap();
    let w = WeightVector::new(vec![1.0]);
    assert!(matches!(
        run_stage4(&n, &w, &WaspasParams::default()),
        Err(RankError::Shape(_))
    ));
}

#[test]
fn test_lambda_out_of_range_is_rejected() {
    for lambda in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            WaspasParams::new(lambda),
            Err(RankError::InvalidParameter(_))
        ));
    }
    assert_eq!(WaspasParams::default().lambda, 0.5);
}
