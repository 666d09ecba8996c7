use std::time::Instant;

use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use super::SortAlgorithm;
use crate::error::{DsaError, Result};

/// Configuration for a timed comparison of the sorting routines
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Number of random integers to sort
    pub size: usize,
    /// Inclusive lower bound for generated values
    pub min_value: i32,
    /// Exclusive upper bound for generated values
    pub max_value: i32,
    /// Algorithms to run, in order
    pub algorithms: Vec<SortAlgorithm>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            size: std::env::var("DSA_COMPARE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10_000),
            min_value: std::env::var("DSA_COMPARE_MIN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(-10_000),
            max_value: std::env::var("DSA_COMPARE_MAX")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10_000),
            algorithms: std::env::var("DSA_COMPARE_ALGORITHMS")
                .ok()
                .map(|s| parse_algorithms(&s))
                .unwrap_or_else(|| SortAlgorithm::ALL.to_vec()),
        }
    }
}

fn parse_algorithms(list: &str) -> Vec<SortAlgorithm> {
    list.split(',')
        .filter(|name| !name.trim().is_empty())
        .filter_map(|name| match name.parse() {
            Ok(algorithm) => Some(algorithm),
            Err(e) => {
                warn!("Skipping entry in DSA_COMPARE_ALGORITHMS: {}", e);
                None
            },
        })
        .collect()
}

impl ComparisonConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_value >= self.max_value {
            return Err(DsaError::Config(format!(
                "empty value range: min {} must be below max {}",
                self.min_value, self.max_value
            )));
        }
        if self.algorithms.is_empty() {
            return Err(DsaError::Config("no sort algorithms selected".to_string()));
        }
        Ok(())
    }
}

/// Wall-clock time a single algorithm took on the shared input
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmTiming {
    pub algorithm: SortAlgorithm,
    pub millis: u64,
    pub micros: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub size: usize,
    pub min_value: i32,
    pub max_value: i32,
    pub timings: Vec<AlgorithmTiming>,
}

impl ComparisonReport {
    pub fn timing(&self, algorithm: SortAlgorithm) -> Option<&AlgorithmTiming> {
        self.timings.iter().find(|t| t.algorithm == algorithm)
    }

    /// Pretty-printed JSON form of the report
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn log_summary(&self) {
        info!(
            "Sorted {} values in [{}, {}) with {} algorithms",
            self.size,
            self.min_value,
            self.max_value,
            self.timings.len()
        );
        for timing in &self.timings {
            info!(
                "{:>10} sort duration: {} millis ({} us)",
                timing.algorithm, timing.millis, timing.micros
            );
        }
    }
}

/// Generate `config.size` values uniformly drawn from `[min_value, max_value)`
pub fn random_input<R: Rng + ?Sized>(config: &ComparisonConfig, rng: &mut R) -> Vec<i32> {
    (0..config.size)
        .map(|_| rng.gen_range(config.min_value..config.max_value))
        .collect()
}

/// Sort one random input with every configured algorithm and time each run.
///
/// Each algorithm works on its own copy. Any output that differs from the
/// standard library sort fails the whole comparison.
pub fn run_comparison(config: &ComparisonConfig) -> Result<ComparisonReport> {
    config.validate()?;

    let input = random_input(config, &mut rand::thread_rng());
    let mut reference = input.clone();
    SortAlgorithm::Std.sort(&mut reference);

    let mut timings = Vec::with_capacity(config.algorithms.len());
    for &algorithm in &config.algorithms {
        let mut values = input.clone();

        let start = Instant::now();
        algorithm.sort(&mut values);
        let elapsed = start.elapsed();

        if values != reference {
            return Err(DsaError::SortMismatch(format!(
                "{} sort disagrees with the reference ordering on {} values",
                algorithm, config.size
            )));
        }

        timings.push(AlgorithmTiming {
            algorithm,
            millis: elapsed.as_millis() as u64,
            micros: elapsed.as_micros() as u64,
        });
    }

    Ok(ComparisonReport {
        size: config.size,
        min_value: config.min_value,
        max_value: config.max_value,
        timings,
    })
}
