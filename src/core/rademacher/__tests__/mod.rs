//! # 라데마허 추정기 테스트

pub mod bounds_test;

use nalgebra::DVector;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::core::error::Result;
use crate::core::model::Constraint;
use crate::core::optimizers::{ConstrainedMinimizer, MinimizerOutcome, Objective, SolverSettings};

/// 1차원 파라미터를 격자 위에서 전수 탐색하는 결정적 최소화기
pub struct GridMinimizer {
    pub lower: f64,
    pub upper: f64,
    pub steps: usize,
}

impl GridMinimizer {
    pub fn unit() -> Self {
        Self { lower: -1.0, upper: 1.0, steps: 2000 }
    }
}

impl ConstrainedMinimizer for GridMinimizer {
    fn minimize(
        &self,
        objective: &dyn Objective,
        initial_guess: &DVector<f64>,
        constraint: &Constraint,
        _settings: &SolverSettings,
    ) -> Result<MinimizerOutcome> {
        let mut best = initial_guess.clone();
        let mut best_value = objective.evaluate(&best)?;
        for i in 0..=self.steps {
            let w = self.lower + (self.upper - self.lower) * i as f64 / self.steps as f64;
            let candidate = DVector::from_element(1, w);
            if !constraint.is_satisfied(&candidate) {
                continue;
            }
            let value = objective.evaluate(&candidate)?;
            if value < best_value {
                best_value = value;
                best = candidate;
            }
        }
        Ok(MinimizerOutcome {
            solution: best,
            value: best_value,
            success: true,
            iterations: self.steps as u64,
        })
    }
}

/// 항상 수렴 실패를 보고하는 최소화기 (호출 횟수 기록)
#[derive(Default)]
pub struct FailingMinimizer {
    pub calls: AtomicUsize,
}

impl FailingMinimizer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ConstrainedMinimizer for FailingMinimizer {
    fn minimize(
        &self,
        objective: &dyn Objective,
        initial_guess: &DVector<f64>,
        _constraint: &Constraint,
        settings: &SolverSettings,
    ) -> Result<MinimizerOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(MinimizerOutcome {
            solution: initial_guess.clone(),
            value: objective.evaluate(initial_guess)?,
            success: false,
            iterations: settings.max_iterations,
        })
    }
}

/// 평가 전에 잠시 멈추는 최소화기 (시간 제한 검증용)
pub struct SlowMinimizer {
    pub delay: Duration,
}

impl ConstrainedMinimizer for SlowMinimizer {
    fn minimize(
        &self,
        objective: &dyn Objective,
        initial_guess: &DVector<f64>,
        _constraint: &Constraint,
        _settings: &SolverSettings,
    ) -> Result<MinimizerOutcome> {
        std::thread::sleep(self.delay);
        Ok(MinimizerOutcome {
            solution: initial_guess.clone(),
            value: objective.evaluate(initial_guess)?,
            success: true,
            iterations: 1,
        })
    }
}

/// 수렴했다고 보고하면서 NaN 값을 돌려주는 최소화기
pub struct NanMinimizer;

impl ConstrainedMinimizer for NanMinimizer {
    fn minimize(
        &self,
        _objective: &dyn Objective,
        initial_guess: &DVector<f64>,
        _constraint: &Constraint,
        _settings: &SolverSettings,
    ) -> Result<MinimizerOutcome> {
        Ok(MinimizerOutcome {
            solution: initial_guess.clone(),
            value: f64::NAN,
            success: true,
            iterations: 1,
        })
    }
}
