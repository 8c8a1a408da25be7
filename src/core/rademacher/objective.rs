//! 시행별 목적 함수

use nalgebra::DVector;

use super::signs::SignVector;
use crate::core::error::{RademacherError, Result};
use crate::core::model::HypothesisClass;
use crate::core::optimizers::Objective;

/// `-(1/n) Σ s_i · loss(p_i, [x_i, predict(θ, x_i)])`
///
/// 부호 벡터를 명시적으로 들고 있는 순수 함수 객체. 최대화 문제를
/// 최적화기가 기대하는 최소화 형태로 바꾸기 위해 부호를 뒤집는다.
pub struct RademacherObjective<'a, H: HypothesisClass + ?Sized> {
    model: &'a H,
    signs: &'a SignVector,
}

impl<'a, H: HypothesisClass + ?Sized> RademacherObjective<'a, H> {
    pub fn new(model: &'a H, signs: &'a SignVector) -> Result<Self> {
        let n = model.training_data().len();
        if signs.len() != n {
            return Err(RademacherError::DimensionMismatch {
                context: "sign vector vs training sample",
                expected: n,
                actual: signs.len(),
            });
        }
        Ok(Self { model, signs })
    }

    /// 부호와 손실의 상관: 최대화 대상 (목적 함수의 부호 반대)
    pub fn correlation(&self, parameter: &DVector<f64>) -> Result<f64> {
        let sample = self.model.training_data();
        let mut total = 0.0;
        for (point, sign) in sample.iter().zip(self.signs.iter()) {
            total += sign * self.model.pointwise_loss(parameter, point)?;
        }
        Ok(total / sample.len() as f64)
    }
}

impl<H: HypothesisClass + ?Sized> Objective for RademacherObjective<'_, H> {
    fn evaluate(&self, parameter: &DVector<f64>) -> Result<f64> {
        Ok(-self.correlation(parameter)?)
    }
}
