pub mod config;
pub mod minimizer;
pub mod nelder_mead;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

pub use config::{SolverSettings, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use minimizer::{ConstrainedMinimizer, MinimizerOutcome, Objective};
pub use nelder_mead::NelderMeadMinimizer;
