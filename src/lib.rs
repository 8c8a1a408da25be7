//! 경험적 라데마허 복잡도 추정 라이브러리
//!
//! 학습된 파라미터 모델이 무작위 ±1 잡음과 얼마나 상관할 수 있는지를
//! 제약 최대화로 반복 측정해 일반화 격차의 상한을 구한다.

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 모델 계약
    HypothesisClass, PenalizedLinearModel, TrainingSample, LabeledPoint, Constraint, TrainingReport,
    // 최적화기
    ConstrainedMinimizer, Objective, MinimizerOutcome, NelderMeadMinimizer, SolverSettings,
    // 추정기
    RademacherEstimator, EstimatorConfig, EstimateReport, TrialOutcome, TrialStatus,
    SignVector, CancellationToken, estimate, generalization_gap_bound,
    RademacherError,
};

