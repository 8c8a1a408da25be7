//! # 경험적 라데마허 복잡도 추정
//!
//! 무작위 ±1 부호와 얼마나 잘 상관할 수 있는지를 제약 최대화로 측정하고,
//! 여러 번의 독립 시행으로 평균을 낸다.

pub mod bounds;
pub mod cancel;
pub mod estimator;
pub mod objective;
pub mod signs;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use bounds::generalization_gap_bound;
pub use cancel::{CancellationToken, GuardedObjective};
pub use estimator::{
    estimate, estimate_default, EstimateReport, EstimatorConfig, RademacherEstimator,
    TrialOutcome, TrialStatus,
};
pub use objective::RademacherObjective;
pub use signs::SignVector;
