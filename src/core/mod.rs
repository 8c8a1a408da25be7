//! # 라데마허 복잡도 핵심 모듈
//!
//! 가설 클래스 계약, 외부 최적화기 경계, 몬테카를로 추정기

pub mod error;
pub mod model;
pub mod optimizers;
pub mod rademacher;

// 주요 타입들 재수출
pub use error::{RademacherError, Result};
pub use model::*;
pub use optimizers::*;
pub use rademacher::*;
