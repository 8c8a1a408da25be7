use serde::{Deserialize, Serialize};

use crate::core::error::{RademacherError, Result};

/// 학습과 모든 시행에서 쓰는 기본 수렴 허용 오차
pub const DEFAULT_TOLERANCE: f64 = 1e-5;
/// 최적화 호출 하나당 기본 반복 상한
pub const DEFAULT_MAX_ITERATIONS: u64 = 1000;

/// 외부 최적화기 호출 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// 수렴 허용 오차
    pub tolerance: f64,
    /// 반복 상한
    pub max_iterations: u64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverSettings {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 반복 상한 설정
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// 허용 오차 설정
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// 최적화기 호출 전에 설정 검증
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(RademacherError::config("iteration cap must be positive"));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RademacherError::config(format!(
                "tolerance must be positive and finite (got {})",
                self.tolerance
            )));
        }
        Ok(())
    }
}
