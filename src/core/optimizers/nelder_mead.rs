//! argmin Nelder–Mead 기반 기본 제약 최소화기
//!
//! 제약은 극단적 장벽(extreme barrier)으로 처리한다. 가능 영역 밖의 점은
//! 목적 함수를 평가하지 않고 큰 상수 비용을 돌려주므로, 가능한 초기점에서
//! 출발하면 최적 꼭짓점은 항상 가능 영역 안에 머문다.

use argmin::core::{CostFunction, Executor, State, TerminationReason, TerminationStatus};
use argmin::solver::neldermead::NelderMead;
use log::debug;
use nalgebra::DVector;

use super::config::SolverSettings;
use super::minimizer::{ConstrainedMinimizer, MinimizerOutcome, Objective};
use crate::core::error::{RademacherError, Result};
use crate::core::model::Constraint;

/// 가능 영역 밖 점에 부여하는 기본 비용
pub const DEFAULT_INFEASIBLE_COST: f64 = 1e10;

/// Nelder–Mead 단체법 최소화기
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelderMeadMinimizer {
    /// 0이 아닌 좌표의 초기 단체 상대 보폭
    pub relative_step: f64,
    /// 0인 좌표의 초기 단체 절대 보폭
    pub zero_step: f64,
    /// 가능 영역 밖 점의 비용
    pub infeasible_cost: f64,
}

impl Default for NelderMeadMinimizer {
    fn default() -> Self {
        Self {
            relative_step: 0.05,
            zero_step: 0.00025,
            infeasible_cost: DEFAULT_INFEASIBLE_COST,
        }
    }
}

impl NelderMeadMinimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_relative_step(mut self, step: f64) -> Self {
        self.relative_step = step;
        self
    }

    pub fn with_zero_step(mut self, step: f64) -> Self {
        self.zero_step = step;
        self
    }

    /// 초기점과 좌표축 방향으로 한 칸씩 옮긴 점들로 이루어진 n+1개 꼭짓점
    pub fn initial_simplex(&self, initial_guess: &DVector<f64>) -> Vec<Vec<f64>> {
        let origin: Vec<f64> = initial_guess.iter().copied().collect();
        let mut vertices = Vec::with_capacity(origin.len() + 1);
        vertices.push(origin.clone());
        for i in 0..origin.len() {
            let mut vertex = origin.clone();
            vertex[i] = if vertex[i] != 0.0 {
                vertex[i] * (1.0 + self.relative_step)
            } else {
                self.zero_step
            };
            vertices.push(vertex);
        }
        vertices
    }
}

/// argmin에 넘기는 장벽 문제
struct BarrierProblem<'a> {
    objective: &'a dyn Objective,
    constraint: &'a Constraint,
    infeasible_cost: f64,
}

impl CostFunction for BarrierProblem<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> std::result::Result<Self::Output, argmin::core::Error> {
        let theta = DVector::from_column_slice(param);
        let violation = self.constraint.violation(&theta);
        if violation > 0.0 {
            return Ok(self.infeasible_cost * (1.0 + violation.min(1e6)));
        }

        let value = self.objective.evaluate(&theta)?;
        if !value.is_finite() {
            return Err(RademacherError::NonFiniteObjective(value).into());
        }
        Ok(value)
    }
}

impl ConstrainedMinimizer for NelderMeadMinimizer {
    fn minimize(
        &self,
        objective: &dyn Objective,
        initial_guess: &DVector<f64>,
        constraint: &Constraint,
        settings: &SolverSettings,
    ) -> Result<MinimizerOutcome> {
        settings.validate()?;
        if initial_guess.is_empty() {
            return Err(RademacherError::config("initial guess must be non-empty"));
        }

        let problem = BarrierProblem {
            objective,
            constraint,
            infeasible_cost: self.infeasible_cost,
        };
        let solver = NelderMead::new(self.initial_simplex(initial_guess))
            .with_sd_tolerance(settings.tolerance)
            .map_err(|e| RademacherError::Solver(e.to_string()))?;

        let result = Executor::new(problem, solver)
            .configure(|state| state.max_iters(settings.max_iterations))
            .run()
            .map_err(|e| match e.downcast_ref::<RademacherError>() {
                Some(inner) => inner.clone(),
                None => RademacherError::Solver(e.to_string()),
            })?;

        let state = result.state();
        let iterations = state.get_iter();
        let converged = matches!(
            state.get_termination_status(),
            TerminationStatus::Terminated(TerminationReason::SolverConverged)
        );
        let solution = state
            .get_best_param()
            .map(|p| DVector::from_column_slice(p))
            .unwrap_or_else(|| initial_guess.clone());

        // 가능한 꼭짓점의 비용은 장벽을 거치지 않은 목적 함수 값 그대로다
        let feasible = constraint.is_satisfied(&solution);
        let value = state.get_best_cost();

        debug!(
            "Nelder-Mead 종료: status={:?}, iterations={}, value={:.6e}, feasible={}",
            state.get_termination_status(),
            iterations,
            value,
            feasible
        );

        Ok(MinimizerOutcome {
            solution,
            value,
            success: converged && feasible,
            iterations,
        })
    }
}
