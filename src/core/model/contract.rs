//! 가설 클래스가 갖춰야 할 최소 기능 집합과 공유 ERM 학습 절차

use log::{info, warn};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use super::constraint::Constraint;
use super::sample::{LabeledPoint, TrainingSample};
use crate::core::error::{RademacherError, Result};
use crate::core::optimizers::{ConstrainedMinimizer, Objective, SolverSettings};

/// 파라미터화된 가설 클래스
///
/// 구체 타입은 `predict`, `training_data`, `loss`, `feasible_region`,
/// `parameter_dimension`만 구현한다. 경험적 위험과 학습 절차는 이 기능들로만
/// 만들어지며 구체 타입에서 재정의하지 않는다.
///
/// 읽기 전용 메서드는 여러 스레드에서 동시에 호출될 수 있어야 한다.
pub trait HypothesisClass: Send + Sync {
    /// 파라미터와 특징으로부터 예측값 계산
    fn predict(&self, parameter: &DVector<f64>, features: &DVector<f64>) -> Result<f64>;

    fn training_data(&self) -> &TrainingSample;

    /// 예제별 손실 (≥ 0)
    ///
    /// 학습 점뿐 아니라 라벨 자리에 예측값이 들어간 합성 쌍에도 정의되어야 한다.
    fn loss(&self, observed: &LabeledPoint, predicted: &LabeledPoint) -> f64;

    fn feasible_region(&self) -> &Constraint;

    /// 파라미터 공간의 차원
    fn parameter_dimension(&self) -> usize;

    /// 학습 점 하나에 대한 손실 `loss(p, [p.x, predict(θ, p.x)])`
    fn pointwise_loss(&self, parameter: &DVector<f64>, point: &LabeledPoint) -> Result<f64> {
        let prediction = self.predict(parameter, &point.features)?;
        Ok(self.loss(point, &point.with_label(prediction)))
    }

    /// 경험적 위험: 학습 표본 전체의 평균 손실
    fn empirical_risk(&self, parameter: &DVector<f64>) -> Result<f64> {
        let sample = self.training_data();
        let mut total = 0.0;
        for point in sample {
            total += self.pointwise_loss(parameter, point)?;
        }
        Ok(total / sample.len() as f64)
    }

    /// 시작점이 파라미터 공간과 가능 영역에 맞는지 검사
    fn check_parameter(&self, parameter: &DVector<f64>) -> Result<()> {
        let expected = self.parameter_dimension();
        if parameter.len() != expected {
            return Err(RademacherError::DimensionMismatch {
                context: "parameter vector",
                expected,
                actual: parameter.len(),
            });
        }
        let violation = self.feasible_region().violation(parameter);
        if violation > 0.0 {
            return Err(RademacherError::InfeasibleStart { violation });
        }
        Ok(())
    }

    /// 가능 영역 위에서 경험적 위험 최소화 (ERM)
    ///
    /// 허용 오차는 1e-5로 고정된다. 최적화기의 수렴 여부는 보고서에 그대로
    /// 담기며, 수렴하지 않은 파라미터로 계속할지는 호출자가 정한다.
    fn train(
        &self,
        minimizer: &dyn ConstrainedMinimizer,
        initial_guess: &DVector<f64>,
        max_iterations: u64,
    ) -> Result<TrainingReport> {
        let settings = SolverSettings::new().with_max_iterations(max_iterations);
        settings.validate()?;
        self.check_parameter(initial_guess)?;

        info!(
            "학습 시작: n={}, 차원={}, 제약={}, 반복 상한={}",
            self.training_data().len(),
            self.parameter_dimension(),
            self.feasible_region().name(),
            max_iterations
        );

        let objective = EmpiricalRiskObjective { model: self };
        let outcome = minimizer.minimize(
            &objective,
            initial_guess,
            self.feasible_region(),
            &settings,
        )?;

        if outcome.success {
            info!(
                "학습 완료: 위험={:.6e}, 반복={}",
                outcome.value, outcome.iterations
            );
        } else {
            warn!(
                "학습이 수렴하지 않음: 위험={:.6e}, 반복={}",
                outcome.value, outcome.iterations
            );
        }

        Ok(TrainingReport {
            parameter: outcome.solution,
            risk: outcome.value,
            converged: outcome.success,
            iterations: outcome.iterations,
        })
    }
}

/// 경험적 위험을 최적화기용 목적 함수로 감싼 것
pub struct EmpiricalRiskObjective<'a, H: HypothesisClass + ?Sized> {
    pub model: &'a H,
}

impl<H: HypothesisClass + ?Sized> Objective for EmpiricalRiskObjective<'_, H> {
    fn evaluate(&self, parameter: &DVector<f64>) -> Result<f64> {
        self.model.empirical_risk(parameter)
    }
}

/// ERM 학습 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// 학습된 파라미터 (추정기의 시작점)
    pub parameter: DVector<f64>,
    /// 학습된 파라미터에서의 경험적 위험
    pub risk: f64,
    /// 최적화기가 수렴을 보고했는지
    pub converged: bool,
    pub iterations: u64,
}

impl TrainingReport {
    /// 수렴한 경우에만 파라미터를 돌려줌
    pub fn require_converged(self) -> Result<DVector<f64>> {
        if self.converged {
            Ok(self.parameter)
        } else {
            Err(RademacherError::TrainingDidNotConverge {
                iterations: self.iterations,
            })
        }
    }
}
