use crate::core::error::RademacherError;
use crate::core::model::{HypothesisClass, LabeledPoint, PenalizedLinearModel, TrainingSample};
use crate::core::optimizers::NelderMeadMinimizer;
use anyhow::Result;
use approx::assert_abs_diff_eq;
use nalgebra::DVector;

fn 선형_표본(slope: f64) -> TrainingSample {
    let pairs: Vec<(f64, f64)> = [1.0, 2.0, 3.0, 4.0].iter().map(|&x| (x, slope * x)).collect();
    TrainingSample::from_pairs(&pairs).unwrap()
}

#[test]
fn 선형_예측_내적_테스트() -> Result<()> {
    let sample = TrainingSample::from_rows(&[vec![1.0, 2.0, 3.0]], &[0.0])?;
    let model = PenalizedLinearModel::new(sample, 10.0, 2)?;

    let theta = DVector::from_vec(vec![0.5, -1.0, 2.0]);
    let x = DVector::from_vec(vec![1.0, 2.0, 3.0]);
    assert_abs_diff_eq!(model.predict(&theta, &x)?, 4.5, epsilon = 1e-12);
    assert_eq!(model.parameter_dimension(), 3);

    Ok(())
}

#[test]
fn 예측_차원_불일치_오류_테스트() -> Result<()> {
    let model = PenalizedLinearModel::new(선형_표본(1.0), 1.0, 2)?;
    let theta = DVector::from_vec(vec![0.1, 0.2]);

    let err = model.predict(&theta, &DVector::from_vec(vec![1.0])).unwrap_err();
    assert!(matches!(err, RademacherError::DimensionMismatch { .. }));
    assert!(model.empirical_risk(&theta).is_err());

    Ok(())
}

#[test]
fn 제곱_오차_손실_테스트() -> Result<()> {
    let model = PenalizedLinearModel::new(선형_표본(1.0), 1.0, 2)?;
    let observed = LabeledPoint::scalar(2.0, 3.0);
    let predicted = observed.with_label(0.5);

    assert_abs_diff_eq!(model.loss(&observed, &predicted), 6.25, epsilon = 1e-12);
    assert_eq!(model.loss(&observed, &observed), 0.0);

    Ok(())
}

#[test]
fn 경험적_위험_평균_테스트() -> Result<()> {
    let model = PenalizedLinearModel::new(선형_표본(0.5), 1.0, 2)?;

    // 완벽한 적합
    assert_abs_diff_eq!(model.empirical_risk(&DVector::from_vec(vec![0.5]))?, 0.0, epsilon = 1e-12);

    // θ = 0: 평균 (0.5x)² = 0.25 · (1+4+9+16)/4
    assert_abs_diff_eq!(model.empirical_risk(&model.zero_parameter())?, 1.875, epsilon = 1e-12);

    Ok(())
}

#[test]
fn erm_학습_수렴_테스트() -> Result<()> {
    let model = PenalizedLinearModel::new(선형_표본(0.5), 1.0, 2)?;
    let minimizer = NelderMeadMinimizer::default();

    let report = model.train(&minimizer, &model.zero_parameter(), 1000)?;

    assert!(report.converged, "학습이 수렴해야 함");
    assert_abs_diff_eq!(report.parameter[0], 0.5, epsilon = 1e-2);
    assert!(report.risk < 1e-3);

    let theta = report.require_converged()?;
    assert!(model.feasible_region().is_satisfied(&theta));

    Ok(())
}

#[test]
fn 제약이_활성인_학습_테스트() -> Result<()> {
    // 최적 기울기 2는 |θ| ≤ 1 밖에 있으므로 경계 θ = 1에서 멈춰야 함
    let model = PenalizedLinearModel::new(선형_표본(2.0), 1.0, 2)?;
    let minimizer = NelderMeadMinimizer::default();

    let report = model.train(&minimizer, &model.zero_parameter(), 1000)?;

    assert!(model.feasible_region().is_satisfied(&report.parameter));
    assert_abs_diff_eq!(report.parameter[0], 1.0, epsilon = 1e-2);

    Ok(())
}

#[test]
fn 수렴하지_않은_학습_보고_테스트() -> Result<()> {
    let model = PenalizedLinearModel::new(선형_표본(0.5), 1.0, 2)?;
    let minimizer = NelderMeadMinimizer::default();

    // 반복 한 번으로는 허용 오차에 도달할 수 없음
    let report = model.train(&minimizer, &model.zero_parameter(), 1)?;

    assert!(!report.converged);
    assert!(matches!(
        report.require_converged().unwrap_err(),
        RademacherError::TrainingDidNotConverge { .. }
    ));

    Ok(())
}

#[test]
fn 잘못된_학습_설정_거부_테스트() -> Result<()> {
    let model = PenalizedLinearModel::new(선형_표본(0.5), 1.0, 2)?;
    let minimizer = NelderMeadMinimizer::default();

    let zero_iterations = model.train(&minimizer, &model.zero_parameter(), 0);
    assert!(matches!(zero_iterations, Err(RademacherError::InvalidConfig(_))));

    let infeasible = model.train(&minimizer, &DVector::from_vec(vec![5.0]), 100);
    assert!(matches!(infeasible, Err(RademacherError::InfeasibleStart { .. })));

    let wrong_dim = model.train(&minimizer, &DVector::from_vec(vec![0.0, 0.0]), 100);
    assert!(matches!(wrong_dim, Err(RademacherError::DimensionMismatch { .. })));

    Ok(())
}

#[test]
fn 잘못된_모델_구성_거부_테스트() {
    assert!(PenalizedLinearModel::new(선형_표본(1.0), -1.0, 2).is_err());
    assert!(PenalizedLinearModel::new(선형_표본(1.0), 1.0, 0).is_err());
}
