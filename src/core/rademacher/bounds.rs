use crate::core::error::{RademacherError, Result};

/// 라데마허 복잡도 기반 일반화 격차 상한
///
/// 손실이 `[0, loss_range]`에 있을 때 확률 1-δ 이상으로
/// `L(h) - L̂(h) ≤ 2·R̂ + 3·B·sqrt(ln(2/δ) / 2n)`.
pub fn generalization_gap_bound(
    complexity: f64,
    sample_size: usize,
    delta: f64,
    loss_range: f64,
) -> Result<f64> {
    if sample_size == 0 {
        return Err(RademacherError::EmptySample);
    }
    if !(delta > 0.0 && delta < 1.0) {
        return Err(RademacherError::config(format!(
            "confidence parameter delta must lie in (0, 1) (got {delta})"
        )));
    }
    if !(loss_range.is_finite() && loss_range > 0.0) {
        return Err(RademacherError::config(format!(
            "loss range must be positive and finite (got {loss_range})"
        )));
    }
    if !complexity.is_finite() {
        return Err(RademacherError::config("complexity estimate must be finite"));
    }

    let confidence = (2.0 / delta).ln() / (2.0 * sample_size as f64);
    Ok(2.0 * complexity + 3.0 * loss_range * confidence.sqrt())
}
