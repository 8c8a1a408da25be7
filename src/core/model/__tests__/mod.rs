//! # 모델 계약 테스트

pub mod linear_test;
