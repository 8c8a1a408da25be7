//! 라벨이 붙은 학습 표본

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::core::error::{RademacherError, Result};

/// (특징, 라벨) 쌍
///
/// 손실 함수에는 실제 관측 쌍뿐 아니라 라벨 자리에 모델 예측값을 넣은
/// 합성 쌍도 전달된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub features: DVector<f64>,
    pub label: f64,
}

impl LabeledPoint {
    pub fn new(features: DVector<f64>, label: f64) -> Self {
        Self { features, label }
    }

    /// 1차원 특징을 가진 점
    pub fn scalar(feature: f64, label: f64) -> Self {
        Self::new(DVector::from_element(1, feature), label)
    }

    /// 같은 특징에 다른 라벨(예: 예측값)을 붙인 쌍
    pub fn with_label(&self, label: f64) -> Self {
        Self {
            features: self.features.clone(),
            label,
        }
    }

    pub fn dimension(&self) -> usize {
        self.features.len()
    }
}

/// 불변 학습 표본: n ≥ 1, 모든 점의 특징 차원이 동일
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    points: Vec<LabeledPoint>,
    dimension: usize,
}

impl TrainingSample {
    pub fn new(points: Vec<LabeledPoint>) -> Result<Self> {
        let first = points.first().ok_or(RademacherError::EmptySample)?;
        let dimension = first.dimension();
        if dimension == 0 {
            return Err(RademacherError::config("feature vectors must be non-empty"));
        }

        for point in &points {
            if point.dimension() != dimension {
                return Err(RademacherError::DimensionMismatch {
                    context: "training sample features",
                    expected: dimension,
                    actual: point.dimension(),
                });
            }
            if !point.label.is_finite() || point.features.iter().any(|v| !v.is_finite()) {
                return Err(RademacherError::config("training sample contains non-finite values"));
            }
        }

        Ok(Self { points, dimension })
    }

    /// 스칼라 (x, y) 쌍으로부터 생성
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|&(x, y)| LabeledPoint::scalar(x, y))
                .collect(),
        )
    }

    /// 특징 행렬의 각 행과 라벨로부터 생성
    pub fn from_rows(rows: &[Vec<f64>], labels: &[f64]) -> Result<Self> {
        if rows.len() != labels.len() {
            return Err(RademacherError::DimensionMismatch {
                context: "feature rows vs labels",
                expected: rows.len(),
                actual: labels.len(),
            });
        }
        Self::new(
            rows.iter()
                .zip(labels)
                .map(|(row, &y)| LabeledPoint::new(DVector::from_row_slice(row), y))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 생성자가 빈 표본을 거부하므로 항상 false
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a TrainingSample {
    type Item = &'a LabeledPoint;
    type IntoIter = std::slice::Iter<'a, LabeledPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
