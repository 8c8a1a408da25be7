//! 몬테카를로 경험적 라데마허 복잡도 추정기

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::cancel::{CancellationToken, GuardedObjective};
use super::objective::RademacherObjective;
use super::signs::SignVector;
use crate::core::error::{RademacherError, Result};
use crate::core::model::HypothesisClass;
use crate::core::optimizers::{
    ConstrainedMinimizer, NelderMeadMinimizer, SolverSettings, DEFAULT_MAX_ITERATIONS,
};

/// 추정기 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// 독립 시행 횟수 K
    pub trials: usize,
    /// 시행마다 쓰는 최적화기 설정
    pub solver: SolverSettings,
    /// 부호 추출 시드 (없으면 엔트로피에서)
    pub seed: Option<u64>,
    /// rayon 전역 풀에서 시행을 병렬 실행
    pub parallel: bool,
    /// 진행 막대 표시
    pub show_progress: bool,
    /// 시행 하나당 시간 제한
    pub trial_timeout: Option<Duration>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            solver: SolverSettings::default(),
            seed: None,
            parallel: false,
            show_progress: false,
            trial_timeout: None,
        }
    }
}

impl EstimatorConfig {
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            ..Default::default()
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.solver.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.solver.tolerance = tolerance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_trial_timeout(mut self, timeout: Duration) -> Self {
        self.trial_timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(RademacherError::config("number of trials K must be at least 1"));
        }
        self.solver.validate()?;
        if self.trial_timeout == Some(Duration::ZERO) {
            return Err(RademacherError::config("trial timeout must be non-zero"));
        }
        Ok(())
    }
}

/// 시행 하나의 종료 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialStatus {
    Converged,
    NotConverged,
    TimedOut,
}

/// 시행 하나의 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub index: usize,
    pub status: TrialStatus,
    /// 회복한 최댓값 (수렴한 경우에만)
    pub value: Option<f64>,
    pub iterations: u64,
}

/// 추정 결과 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    /// 수렴한 시행 값들의 산술 평균
    pub value: f64,
    /// 평균의 표준 오차 (수렴한 시행이 1개면 0)
    pub standard_error: f64,
    pub trials: usize,
    pub converged: usize,
    pub not_converged: usize,
    pub timed_out: usize,
    pub outcomes: Vec<TrialOutcome>,
}

impl EstimateReport {
    fn from_outcomes(outcomes: Vec<TrialOutcome>) -> Result<Self> {
        let trials = outcomes.len();
        let values: Vec<f64> = outcomes.iter().filter_map(|o| o.value).collect();
        if values.is_empty() {
            return Err(RademacherError::NoTrialsConverged { trials });
        }

        let m = values.len() as f64;
        let mean = values.iter().sum::<f64>() / m;
        let standard_error = if values.len() > 1 {
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (m - 1.0);
            (variance / m).sqrt()
        } else {
            0.0
        };

        let count = |status: TrialStatus| outcomes.iter().filter(|o| o.status == status).count();
        Ok(Self {
            value: mean,
            standard_error,
            trials,
            converged: count(TrialStatus::Converged),
            not_converged: count(TrialStatus::NotConverged),
            timed_out: count(TrialStatus::TimedOut),
            outcomes,
        })
    }

    /// 수렴한 시행의 비율
    pub fn success_rate(&self) -> f64 {
        self.converged as f64 / self.trials as f64
    }
}

/// 경험적 라데마허 복잡도 추정기
///
/// 호출 사이에 상태를 갖지 않는다. 가설 클래스는 읽기만 하며 다시 학습하지
/// 않고, 시작 파라미터는 명시적으로 전달받는다.
pub struct RademacherEstimator<M: ConstrainedMinimizer> {
    minimizer: M,
    config: EstimatorConfig,
    cancellation: Option<CancellationToken>,
}

impl RademacherEstimator<NelderMeadMinimizer> {
    /// 기본 Nelder–Mead 최소화기 사용
    pub fn with_default_minimizer(config: EstimatorConfig) -> Self {
        Self::new(NelderMeadMinimizer::default(), config)
    }
}

impl<M: ConstrainedMinimizer> RademacherEstimator<M> {
    pub fn new(minimizer: M, config: EstimatorConfig) -> Self {
        Self {
            minimizer,
            config,
            cancellation: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// K번의 독립 시행을 돌려 추정치 계산
    pub fn run<H: HypothesisClass + ?Sized>(
        &self,
        model: &H,
        start: &DVector<f64>,
    ) -> Result<EstimateReport> {
        self.validate(model, start)?;

        let n = model.training_data().len();
        let seeds = self.trial_seeds();
        info!(
            "라데마허 추정 시작: K={}, n={}, 반복 상한={}, 병렬={}",
            self.config.trials, n, self.config.solver.max_iterations, self.config.parallel
        );

        self.execute(model, start, seeds.len(), |index| {
            let mut rng = StdRng::seed_from_u64(seeds[index]);
            Ok(SignVector::draw(n, &mut rng))
        })
    }

    /// 호출자가 준 부호 벡터들로 같은 파이프라인 실행
    ///
    /// 시행 횟수는 `signs.len()`이며 구성의 `trials`와 시드는 쓰지 않는다.
    pub fn run_with_signs<H: HypothesisClass + ?Sized>(
        &self,
        model: &H,
        start: &DVector<f64>,
        signs: &[SignVector],
    ) -> Result<EstimateReport> {
        if signs.is_empty() {
            return Err(RademacherError::config("at least one sign vector is required"));
        }
        self.validate(model, start)?;
        self.execute(model, start, signs.len(), |index| Ok(signs[index].clone()))
    }

    /// 부호 벡터 하나로 시행 하나 실행
    pub fn run_trial<H: HypothesisClass + ?Sized>(
        &self,
        model: &H,
        start: &DVector<f64>,
        index: usize,
        signs: &SignVector,
    ) -> Result<TrialOutcome> {
        if let Some(token) = &self.cancellation {
            token.check()?;
        }

        let objective = RademacherObjective::new(model, signs)?;
        let deadline = self.config.trial_timeout.map(|t| Instant::now() + t);
        let guarded = GuardedObjective::new(&objective, self.cancellation.as_ref(), deadline);

        let result = self.minimizer.minimize(
            &guarded,
            start,
            model.feasible_region(),
            &self.config.solver,
        );

        match result {
            Ok(outcome) if outcome.success && outcome.value.is_finite() => {
                let value = -outcome.value;
                debug!("시행 {index}: 최댓값={value:.6e}, 반복={}", outcome.iterations);
                Ok(TrialOutcome {
                    index,
                    status: TrialStatus::Converged,
                    value: Some(value),
                    iterations: outcome.iterations,
                })
            }
            Ok(outcome) => {
                warn!(
                    "시행 {index}: 수렴 실패로 제외 (값={}, 반복={})",
                    outcome.value, outcome.iterations
                );
                Ok(TrialOutcome {
                    index,
                    status: TrialStatus::NotConverged,
                    value: None,
                    iterations: outcome.iterations,
                })
            }
            Err(RademacherError::TrialTimedOut) => {
                warn!("시행 {index}: 시간 초과로 제외");
                Ok(TrialOutcome {
                    index,
                    status: TrialStatus::TimedOut,
                    value: None,
                    iterations: 0,
                })
            }
            Err(e) => Err(e),
        }
    }

    fn validate<H: HypothesisClass + ?Sized>(&self, model: &H, start: &DVector<f64>) -> Result<()> {
        self.config.validate()?;
        model.check_parameter(start)?;
        // 계약 위반(차원 불일치 등)은 최적화기 호출 전에 드러낸다
        model.empirical_risk(start)?;
        Ok(())
    }

    /// 시행별 독립 시드: 순차/병렬 실행이 같은 부호 벡터를 보도록 미리 정한다
    pub(crate) fn trial_seeds(&self) -> Vec<u64> {
        let mut master = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        (0..self.config.trials).map(|_| master.gen()).collect()
    }

    fn execute<H, F>(
        &self,
        model: &H,
        start: &DVector<f64>,
        trials: usize,
        signs_for: F,
    ) -> Result<EstimateReport>
    where
        H: HypothesisClass + ?Sized,
        F: Fn(usize) -> Result<SignVector> + Sync,
    {
        let progress = self.progress_bar(trials);
        let trial = |index: usize| -> Result<TrialOutcome> {
            let signs = signs_for(index)?;
            let outcome = self.run_trial(model, start, index, &signs);
            progress.inc(1);
            outcome
        };

        let outcomes: Result<Vec<TrialOutcome>> = if self.config.parallel {
            (0..trials).into_par_iter().map(trial).collect()
        } else {
            (0..trials).map(trial).collect()
        };
        progress.finish_and_clear();

        let report = EstimateReport::from_outcomes(outcomes?)?;
        info!(
            "라데마허 추정 완료: R̂={:.6e} ± {:.2e}, 수렴 {}/{}",
            report.value, report.standard_error, report.converged, report.trials
        );
        Ok(report)
    }

    fn progress_bar(&self, trials: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(trials as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40}] {percent}% 시행 {pos}/{len}")
        {
            pb.set_style(style);
        }
        pb
    }
}

/// 기본 최소화기로 K번 시행한 추정치
///
/// `max_iterations`는 시행 하나당 반복 상한 (보통 1000).
pub fn estimate<H: HypothesisClass + ?Sized>(
    trials: usize,
    model: &H,
    start: &DVector<f64>,
    max_iterations: u64,
) -> Result<f64> {
    let config = EstimatorConfig::new(trials).with_max_iterations(max_iterations);
    RademacherEstimator::with_default_minimizer(config)
        .run(model, start)
        .map(|report| report.value)
}

/// 반복 상한을 기본값으로 둔 `estimate`
pub fn estimate_default<H: HypothesisClass + ?Sized>(
    trials: usize,
    model: &H,
    start: &DVector<f64>,
) -> Result<f64> {
    estimate(trials, model, start, DEFAULT_MAX_ITERATIONS)
}
