use crate::core::error::RademacherError;
use crate::core::rademacher::generalization_gap_bound;
use approx::assert_abs_diff_eq;

#[test]
fn 일반화_격차_상한_계산_테스트() {
    let bound = generalization_gap_bound(0.1, 100, 0.05, 1.0).unwrap();
    let expected = 0.2 + 3.0 * ((2.0f64 / 0.05).ln() / 200.0).sqrt();

    assert_abs_diff_eq!(bound, expected, epsilon = 1e-12);
}

#[test]
fn 손실_범위_스케일_테스트() {
    let unit = generalization_gap_bound(0.0, 50, 0.1, 1.0).unwrap();
    let scaled = generalization_gap_bound(0.0, 50, 0.1, 4.0).unwrap();

    assert_abs_diff_eq!(scaled, 4.0 * unit, epsilon = 1e-12);
}

#[test]
fn 표본이_클수록_상한_감소_테스트() {
    let small = generalization_gap_bound(0.2, 10, 0.05, 1.0).unwrap();
    let large = generalization_gap_bound(0.2, 10_000, 0.05, 1.0).unwrap();

    assert!(large < small);
}

#[test]
fn 잘못된_상한_인자_거부_테스트() {
    assert_eq!(
        generalization_gap_bound(0.1, 0, 0.05, 1.0).unwrap_err(),
        RademacherError::EmptySample
    );
    assert!(generalization_gap_bound(0.1, 10, 0.0, 1.0).is_err());
    assert!(generalization_gap_bound(0.1, 10, 1.0, 1.0).is_err());
    assert!(generalization_gap_bound(0.1, 10, 0.05, 0.0).is_err());
    assert!(generalization_gap_bound(f64::NAN, 10, 0.05, 1.0).is_err());
}
