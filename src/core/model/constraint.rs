//! 가능 파라미터 영역 (비선형 부등식 제약)

use nalgebra::DVector;
use std::fmt;
use std::sync::Arc;

use crate::core::error::{RademacherError, Result};

type ConstraintFn = Arc<dyn Fn(&DVector<f64>) -> f64 + Send + Sync>;

/// `lower ≤ g(θ) ≤ upper` 형태의 제약
///
/// 학습과 모든 시행에서 같은 객체를 읽기 전용으로 공유한다.
#[derive(Clone)]
pub struct Constraint {
    function: ConstraintFn,
    lower: f64,
    upper: f64,
    name: String,
}

impl Constraint {
    pub fn new<F>(name: impl Into<String>, function: F, lower: f64, upper: f64) -> Result<Self>
    where
        F: Fn(&DVector<f64>) -> f64 + Send + Sync + 'static,
    {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(RademacherError::config(format!(
                "constraint bounds must satisfy lower <= upper (got {lower}, {upper})"
            )));
        }
        Ok(Self {
            function: Arc::new(function),
            lower,
            upper,
            name: name.into(),
        })
    }

    /// 상한만 있는 제약 `g(θ) ≤ upper`
    pub fn upper_bound<F>(name: impl Into<String>, function: F, upper: f64) -> Result<Self>
    where
        F: Fn(&DVector<f64>) -> f64 + Send + Sync + 'static,
    {
        Self::new(name, function, f64::NEG_INFINITY, upper)
    }

    /// ℓ_q 노름 공 `‖θ‖_q ≤ radius`
    pub fn norm_ball(q: u32, radius: f64) -> Result<Self> {
        if q == 0 {
            return Err(RademacherError::config("norm degree q must be at least 1"));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RademacherError::config(format!(
                "norm bound must be positive and finite (got {radius})"
            )));
        }
        Self::upper_bound(
            format!("l{q}-ball(r={radius})"),
            move |theta: &DVector<f64>| lq_norm(theta, q),
            radius,
        )
    }

    pub fn evaluate(&self, parameter: &DVector<f64>) -> f64 {
        (self.function)(parameter)
    }

    /// 경계 밖으로 벗어난 정도 (가능 영역 안이면 0)
    pub fn violation(&self, parameter: &DVector<f64>) -> f64 {
        let value = self.evaluate(parameter);
        if value.is_nan() {
            return f64::INFINITY;
        }
        (self.lower - value).max(0.0) + (value - self.upper).max(0.0)
    }

    pub fn is_satisfied(&self, parameter: &DVector<f64>) -> bool {
        self.violation(parameter) == 0.0
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.name)
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

/// ℓ_q 노름: (Σ|θ_i|^q)^(1/q)
pub fn lq_norm(theta: &DVector<f64>, q: u32) -> f64 {
    match q {
        1 => theta.iter().map(|v| v.abs()).sum(),
        2 => theta.norm(),
        _ => {
            let q = q as f64;
            theta.iter().map(|v| v.abs().powf(q)).sum::<f64>().powf(1.0 / q)
        }
    }
}
