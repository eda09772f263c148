use std::time::Duration;

use waypath::benchmark::{measure, per_run, sample, summarize, BenchmarkConfig, T_CRITICAL_5_DF};

#[test]
fn test_summarize_mean_and_confidence() {
    let stats = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], T_CRITICAL_5_DF);

    assert!((stats.mean_secs - 3.5).abs() < 1e-12);
    // s = sqrt(17.5 / 5), delta = t * s / sqrt(6)
    let expected = T_CRITICAL_5_DF * (3.5f64).sqrt() / 6f64.sqrt();
    assert!((stats.delta_secs - expected).abs() < 1e-12);
}

#[test]
fn test_summarize_degenerate_inputs() {
    let empty = summarize(&[], T_CRITICAL_5_DF);
    assert_eq!((empty.mean_secs, empty.delta_secs), (0.0, 0.0));

    let single = summarize(&[0.25], T_CRITICAL_5_DF);
    assert_eq!((single.mean_secs, single.delta_secs), (0.25, 0.0));

    let constant = summarize(&[2.0, 2.0, 2.0], T_CRITICAL_5_DF);
    assert_eq!(constant.delta_secs, 0.0);
}

#[test]
fn test_measure_runs_warmup_and_repetitions() {
    let config = BenchmarkConfig::default().with_warmup(2).with_repetitions(3);
    let mut calls = 0;
    measure(&config, || calls += 1);
    assert_eq!(calls, 5);
}

#[test]
fn test_sample_repeats_measurements() {
    let config = BenchmarkConfig::default()
        .with_warmup(1)
        .with_repetitions(2)
        .with_samples(4, 3.1824);
    let mut calls = 0;
    let stats = sample(&config, || calls += 1);

    assert_eq!(calls, 4 * (1 + 2));
    assert!(stats.mean_secs >= 0.0);
    assert!(stats.delta_secs >= 0.0);
}

#[test]
fn test_default_config() {
    let config = BenchmarkConfig::default();
    assert_eq!(config.warmup, 5);
    assert_eq!(config.repetitions, 20);
    assert_eq!(config.samples, 6);
    assert_eq!(config.t_critical, T_CRITICAL_5_DF);
}

#[test]
fn test_per_run_handles_counts_beyond_u32() {
    let total = Duration::from_secs(1 << 32);
    assert_eq!(per_run(total, 1 << 32), Duration::from_secs(1));
    assert_eq!(per_run(Duration::from_millis(1500), 3), Duration::from_millis(500));
    assert_eq!(per_run(Duration::from_secs(2), 0), Duration::from_secs(2));
}
