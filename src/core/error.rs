//! 추정기 전체에서 공유하는 오류 타입

use thiserror::Error;

/// 라이브러리 공통 Result 별칭
pub type Result<T> = std::result::Result<T, RademacherError>;

/// 학습/추정 과정에서 호출자에게 드러나는 실패 조건
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RademacherError {
    /// 시행 횟수, 반복 상한, 허용 오차 등 잘못된 설정
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// 학습 데이터가 비어 있음
    #[error("training sample must contain at least one point")]
    EmptySample,

    /// 파라미터와 특징 벡터의 차원이 맞지 않음
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// 시작 파라미터가 가능 영역 밖에 있음
    #[error("starting parameter violates the feasible region by {violation:e}")]
    InfeasibleStart { violation: f64 },

    /// 모든 시행이 수렴에 실패함
    #[error("no trials converged ({trials} attempted)")]
    NoTrialsConverged { trials: usize },

    /// 학습이 수렴하지 않았음 (호출자가 명시적으로 요구한 경우에만)
    #[error("training did not converge after {iterations} iterations")]
    TrainingDidNotConverge { iterations: u64 },

    /// 목적 함수가 유한하지 않은 값을 반환함
    #[error("objective returned a non-finite value: {0}")]
    NonFiniteObjective(f64),

    /// 시행 하나가 제한 시간을 넘김
    #[error("trial exceeded its time budget")]
    TrialTimedOut,

    /// 협조적 취소 요청
    #[error("estimation cancelled")]
    Cancelled,

    /// 외부 최적화기 내부 오류
    #[error("solver failure: {0}")]
    Solver(String),
}

impl RademacherError {
    /// 설정 오류 생성 헬퍼
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
