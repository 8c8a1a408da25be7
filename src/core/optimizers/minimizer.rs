//! 외부 제약 최적화기와의 경계

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use super::config::SolverSettings;
use crate::core::error::Result;
use crate::core::model::Constraint;

/// 최소화 대상 스칼라 함수
///
/// 구현체는 부수 효과가 없어야 하며 여러 스레드에서 동시에 호출될 수 있다.
pub trait Objective: Send + Sync {
    fn evaluate(&self, parameter: &DVector<f64>) -> Result<f64>;
}

impl<F> Objective for F
where
    F: Fn(&DVector<f64>) -> Result<f64> + Send + Sync,
{
    fn evaluate(&self, parameter: &DVector<f64>) -> Result<f64> {
        self(parameter)
    }
}

/// 최적화 호출 하나의 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimizerOutcome {
    /// 최적화기가 돌려준 해
    pub solution: DVector<f64>,
    /// 해에서의 목적 함수 값
    pub value: f64,
    /// 최적화기가 보고한 성공 여부
    pub success: bool,
    /// 사용한 반복 횟수
    pub iterations: u64,
}

/// 블랙박스 제약 비선형 최소화기
///
/// `minimize(목적, 초기점, 제약, 허용오차, 반복상한) → (해, 값, 성공여부)`.
/// 수렴 실패는 오류가 아니라 `success == false`로 보고한다. `Err`는
/// 목적 함수 자체의 오류(차원 불일치, 취소, 시간 초과)나 최적화기 내부
/// 오류에만 쓴다.
pub trait ConstrainedMinimizer: Send + Sync {
    fn minimize(
        &self,
        objective: &dyn Objective,
        initial_guess: &DVector<f64>,
        constraint: &Constraint,
        settings: &SolverSettings,
    ) -> Result<MinimizerOutcome>;
}

impl<M: ConstrainedMinimizer + ?Sized> ConstrainedMinimizer for &M {
    fn minimize(
        &self,
        objective: &dyn Objective,
        initial_guess: &DVector<f64>,
        constraint: &Constraint,
        settings: &SolverSettings,
    ) -> Result<MinimizerOutcome> {
        (**self).minimize(objective, initial_guess, constraint, settings)
    }
}
