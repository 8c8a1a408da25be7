//! # 최적화기 경계 테스트

pub mod config_test;
