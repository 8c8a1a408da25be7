pub mod constraint;
pub mod contract;
pub mod linear;
pub mod sample;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use constraint::{lq_norm, Constraint};
pub use contract::{EmpiricalRiskObjective, HypothesisClass, TrainingReport};
pub use linear::PenalizedLinearModel;
pub use sample::{LabeledPoint, TrainingSample};
