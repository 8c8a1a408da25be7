use crate::core::error::RademacherError;
use crate::core::optimizers::{SolverSettings, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

#[test]
fn 최적화기_설정_기본값_테스트() {
    let settings = SolverSettings::default();

    assert_eq!(settings.tolerance, 1e-5, "허용 오차 기본값");
    assert_eq!(settings.max_iterations, 1000, "반복 상한 기본값");
    assert_eq!(settings.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(settings.max_iterations, DEFAULT_MAX_ITERATIONS);
    assert!(settings.validate().is_ok());
}

#[test]
fn 최적화기_설정_빌더_테스트() {
    let settings = SolverSettings::new()
        .with_max_iterations(50)
        .with_tolerance(1e-8);

    assert_eq!(settings.max_iterations, 50);
    assert_eq!(settings.tolerance, 1e-8);
}

#[test]
fn 잘못된_최적화기_설정_거부_테스트() {
    let zero = SolverSettings::new().with_max_iterations(0);
    assert!(matches!(zero.validate(), Err(RademacherError::InvalidConfig(_))));

    for tolerance in [0.0, -1e-5, f64::NAN, f64::INFINITY] {
        let settings = SolverSettings::new().with_tolerance(tolerance);
        assert!(settings.validate().is_err(), "허용 오차 {tolerance} 거부");
    }
}
