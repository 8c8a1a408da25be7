//! ℓ_q 노름으로 제한된 선형 예측기 (참조 구현)

use nalgebra::DVector;

use super::constraint::Constraint;
use super::contract::HypothesisClass;
use super::sample::{LabeledPoint, TrainingSample};
use crate::core::error::{RademacherError, Result};

/// `f_θ(x) = θ·x`, 제곱 오차 손실, `‖θ‖_q ≤ max_norm`
#[derive(Debug, Clone)]
pub struct PenalizedLinearModel {
    training_data: TrainingSample,
    max_norm: f64,
    norm_degree: u32,
    constraint: Constraint,
}

impl PenalizedLinearModel {
    pub fn new(training_data: TrainingSample, max_norm: f64, norm_degree: u32) -> Result<Self> {
        let constraint = Constraint::norm_ball(norm_degree, max_norm)?;
        Ok(Self {
            training_data,
            max_norm,
            norm_degree,
            constraint,
        })
    }

    pub fn max_norm(&self) -> f64 {
        self.max_norm
    }

    pub fn norm_degree(&self) -> u32 {
        self.norm_degree
    }

    /// 원점 (항상 가능 영역 안)
    pub fn zero_parameter(&self) -> DVector<f64> {
        DVector::zeros(self.parameter_dimension())
    }
}

impl HypothesisClass for PenalizedLinearModel {
    fn predict(&self, parameter: &DVector<f64>, features: &DVector<f64>) -> Result<f64> {
        if parameter.len() != features.len() {
            return Err(RademacherError::DimensionMismatch {
                context: "linear prediction",
                expected: features.len(),
                actual: parameter.len(),
            });
        }
        Ok(parameter.dot(features))
    }

    fn training_data(&self) -> &TrainingSample {
        &self.training_data
    }

    fn loss(&self, observed: &LabeledPoint, predicted: &LabeledPoint) -> f64 {
        let diff = observed.label - predicted.label;
        diff * diff
    }

    fn feasible_region(&self) -> &Constraint {
        &self.constraint
    }

    fn parameter_dimension(&self) -> usize {
        self.training_data.dimension()
    }
}
