use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{RademacherError, Result};

/// 라데마허 부호 벡터: 각 성분이 확률 1/2로 ±1
///
/// 시행마다 새로 뽑고 시행이 끝나면 버린다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignVector(Vec<i8>);

impl SignVector {
    /// 길이 n의 독립 부호 추출
    pub fn draw<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        Self((0..n).map(|_| if rng.gen_bool(0.5) { 1 } else { -1 }).collect())
    }

    /// 호출자가 정한 부호로 생성 (각 성분은 +1 또는 -1)
    pub fn from_signs(signs: Vec<i8>) -> Result<Self> {
        if signs.is_empty() {
            return Err(RademacherError::config("sign vector must be non-empty"));
        }
        if let Some(bad) = signs.iter().find(|&&s| s != 1 && s != -1) {
            return Err(RademacherError::config(format!(
                "sign vector entries must be +1 or -1 (got {bad})"
            )));
        }
        Ok(Self(signs))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i8] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|&s| s as f64)
    }

    /// +1 개수에서 -1 개수를 뺀 값
    pub fn balance(&self) -> i64 {
        self.0.iter().map(|&s| s as i64).sum()
    }
}
