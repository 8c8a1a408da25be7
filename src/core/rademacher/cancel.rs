//! 협조적 취소와 시행별 시간 제한

use nalgebra::DVector;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::core::error::{RademacherError, Result};
use crate::core::optimizers::Objective;

/// 여러 스레드가 공유하는 취소 플래그
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// 취소되었으면 `Cancelled` 오류
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(RademacherError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// 평가할 때마다 취소 플래그와 마감 시각을 확인하는 목적 함수 래퍼
///
/// 최적화기 내부에는 마감 개념이 없으므로 목적 함수 평가 지점에서 끊는다.
pub struct GuardedObjective<'a> {
    inner: &'a dyn Objective,
    token: Option<&'a CancellationToken>,
    deadline: Option<Instant>,
}

impl<'a> GuardedObjective<'a> {
    pub fn new(
        inner: &'a dyn Objective,
        token: Option<&'a CancellationToken>,
        deadline: Option<Instant>,
    ) -> Self {
        Self {
            inner,
            token,
            deadline,
        }
    }
}

impl Objective for GuardedObjective<'_> {
    fn evaluate(&self, parameter: &DVector<f64>) -> Result<f64> {
        if let Some(token) = self.token {
            token.check()?;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(RademacherError::TrialTimedOut);
            }
        }
        self.inner.evaluate(parameter)
    }
}
