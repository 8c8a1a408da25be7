use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use empirical_rademacher::{
    generalization_gap_bound, EstimatorConfig, HypothesisClass, NelderMeadMinimizer,
    PenalizedLinearModel, RademacherEstimator, TrainingSample,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// y = θ*·x + 잡음 형태의 합성 회귀 표본
fn synthetic_sample(n: usize, dimension: usize, noise: f64, seed: u64) -> Result<TrainingSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let truth: Vec<f64> = (0..dimension).map(|_| rng.gen_range(-0.5..0.5)).collect();

    let mut rows = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for _ in 0..n {
        let x: Vec<f64> = (0..dimension).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let y = x.iter().zip(&truth).map(|(a, b)| a * b).sum::<f64>()
            + noise * rng.gen_range(-1.0..1.0);
        rows.push(x);
        labels.push(y);
    }
    Ok(TrainingSample::from_rows(&rows, &labels)?)
}

/// 가능 영역 전체에서의 제곱 손실 상한
///
/// 횔더 부등식 |θ·x| ≤ ‖θ‖_q‖x‖_p (1/p + 1/q = 1)로 예측값 크기를 제한한다.
fn squared_loss_range(model: &PenalizedLinearModel) -> f64 {
    let q = model.norm_degree();
    let dual_norm = |x: &[f64]| -> f64 {
        if q == 1 {
            x.iter().fold(0.0f64, |m, v| m.max(v.abs()))
        } else {
            let p = q as f64 / (q as f64 - 1.0);
            x.iter().map(|v| v.abs().powf(p)).sum::<f64>().powf(1.0 / p)
        }
    };
    model
        .training_data()
        .iter()
        .map(|point| {
            let reach = point.label.abs() + model.max_norm() * dual_norm(point.features.as_slice());
            reach * reach
        })
        .fold(f64::MIN_POSITIVE, f64::max)
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("rademacher")
        .version("0.1.0")
        .about("ℓ_q 노름 제한 선형 모델의 경험적 라데마허 복잡도 추정")
        .arg(
            Arg::new("samples")
                .long("samples")
                .short('n')
                .value_name("N")
                .help("학습 표본 크기")
                .value_parser(value_parser!(usize))
                .default_value("50"),
        )
        .arg(
            Arg::new("dimension")
                .long("dimension")
                .short('d')
                .value_name("D")
                .help("특징 차원")
                .value_parser(value_parser!(usize))
                .default_value("3"),
        )
        .arg(
            Arg::new("trials")
                .long("trials")
                .short('k')
                .value_name("K")
                .help("몬테카를로 시행 횟수")
                .value_parser(value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            Arg::new("max-norm")
                .long("max-norm")
                .value_name("B")
                .help("파라미터 노름 상한")
                .value_parser(value_parser!(f64))
                .default_value("1.0"),
        )
        .arg(
            Arg::new("q")
                .long("q")
                .value_name("Q")
                .help("노름 차수")
                .value_parser(value_parser!(u32))
                .default_value("2"),
        )
        .arg(
            Arg::new("max-iter")
                .long("max-iter")
                .value_name("ITER")
                .help("시행당 반복 상한")
                .value_parser(value_parser!(u64))
                .default_value("1000"),
        )
        .arg(
            Arg::new("noise")
                .long("noise")
                .value_name("SIGMA")
                .help("라벨 잡음 크기")
                .value_parser(value_parser!(f64))
                .default_value("0.1"),
        )
        .arg(
            Arg::new("delta")
                .long("delta")
                .value_name("DELTA")
                .help("일반화 상한의 신뢰 수준 파라미터")
                .value_parser(value_parser!(f64))
                .default_value("0.05"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("난수 시드")
                .value_parser(value_parser!(u64))
                .default_value("42"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("시행을 병렬로 실행")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("결과를 JSON으로 출력")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let n = *matches.get_one::<usize>("samples").context("missing --samples")?;
    let dimension = *matches.get_one::<usize>("dimension").context("missing --dimension")?;
    let trials = *matches.get_one::<usize>("trials").context("missing --trials")?;
    let max_norm = *matches.get_one::<f64>("max-norm").context("missing --max-norm")?;
    let q = *matches.get_one::<u32>("q").context("missing --q")?;
    let max_iter = *matches.get_one::<u64>("max-iter").context("missing --max-iter")?;
    let noise = *matches.get_one::<f64>("noise").context("missing --noise")?;
    let delta = *matches.get_one::<f64>("delta").context("missing --delta")?;
    let seed = *matches.get_one::<u64>("seed").context("missing --seed")?;
    let parallel = matches.get_flag("parallel");
    let json = matches.get_flag("json");

    if n == 0 || dimension == 0 {
        bail!("samples and dimension must be positive");
    }

    let sample = synthetic_sample(n, dimension, noise, seed)?;
    let model = PenalizedLinearModel::new(sample, max_norm, q)?;
    let minimizer = NelderMeadMinimizer::default();

    let training = model.train(&minimizer, &model.zero_parameter(), max_iter)?;
    if !training.converged {
        eprintln!("경고: 학습이 {}회 반복 후에도 수렴하지 않았습니다", training.iterations);
    }

    let config = EstimatorConfig::new(trials)
        .with_max_iterations(max_iter)
        .with_seed(seed)
        .with_parallel(parallel)
        .with_progress(!json);
    let report = RademacherEstimator::new(minimizer, config).run(&model, &training.parameter)?;

    let loss_range = squared_loss_range(&model);
    let bound = generalization_gap_bound(report.value, n, delta, loss_range)?;

    if json {
        let output = serde_json::json!({
            "training": training,
            "estimate": report,
            "generalization_gap_bound": bound,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\n=== 경험적 라데마허 복잡도 ===");
    println!("   - 표본: n={}, 차원={}, ‖θ‖_{} ≤ {}", n, dimension, q, max_norm);
    println!(
        "   - 학습: 위험={:.6}, 수렴={}, 반복={}",
        training.risk, training.converged, training.iterations
    );
    println!("   - R̂ = {:.6} ± {:.6}", report.value, report.standard_error);
    println!(
        "   - 시행: 수렴 {}/{} (미수렴 {}, 시간초과 {})",
        report.converged, report.trials, report.not_converged, report.timed_out
    );
    println!("   - 일반화 격차 상한 (δ={}): {:.6}", delta, bound);

    Ok(())
}
