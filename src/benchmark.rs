//! Timing harness for comparing path finders.
//!
//! A sample is the mean wall time of `repetitions` runs after `warmup` untimed
//! runs. Several samples give a mean and the half-width of a Student-t
//! confidence interval around it.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Two-sided 95% Student-t critical value for 5 degrees of freedom
pub const T_CRITICAL_5_DF: f64 = 2.5706;

/// Parameters of a measurement
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Untimed runs before each sample
    pub warmup: usize,
    /// Timed runs averaged into one sample
    pub repetitions: usize,
    /// Number of samples
    pub samples: usize,
    /// Critical value matching `samples - 1` degrees of freedom
    pub t_critical: f64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warmup: 5,
            repetitions: 20,
            samples: 6,
            t_critical: T_CRITICAL_5_DF,
        }
    }
}

impl BenchmarkConfig {
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions.max(1);
        self
    }

    /// Set the sample count together with its critical value
    pub fn with_samples(mut self, samples: usize, t_critical: f64) -> Self {
        self.samples = samples.max(2);
        self.t_critical = t_critical;
        self
    }
}

/// Mean run time and confidence half-width, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub mean_secs: f64,
    pub delta_secs: f64,
}

/// Mean wall time of one call of `run`
pub fn measure<F>(config: &BenchmarkConfig, mut run: F) -> Duration
where
    F: FnMut(),
{
    for _ in 0..config.warmup {
        run();
    }

    let start = Instant::now();
    for _ in 0..config.repetitions.max(1) {
        run();
    }
    per_run(start.elapsed(), config.repetitions)
}

/// Share of `total` taken by one of `runs` runs
pub fn per_run(total: Duration, runs: usize) -> Duration {
    total.div_f64(runs.max(1) as f64)
}

/// Collects `config.samples` measurements of `run` and summarizes them
pub fn sample<F>(config: &BenchmarkConfig, mut run: F) -> Measurement
where
    F: FnMut(),
{
    let times: Vec<f64> = (0..config.samples)
        .map(|_| measure(config, &mut run).as_secs_f64())
        .collect();
    summarize(&times, config.t_critical)
}

/// Mean and `t * s / sqrt(n)` of the given times
pub fn summarize(times: &[f64], t_critical: f64) -> Measurement {
    let n = times.len();
    if n == 0 {
        return Measurement {
            mean_secs: 0.0,
            delta_secs: 0.0,
        };
    }

    let mean = times.iter().sum::<f64>() / n as f64;
    if n == 1 {
        return Measurement {
            mean_secs: mean,
            delta_secs: 0.0,
        };
    }

    let variance = times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    Measurement {
        mean_secs: mean,
        delta_secs: t_critical * variance.sqrt() / (n as f64).sqrt(),
    }
}
