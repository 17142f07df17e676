//! Bulk generator verification
//!
//! Generates many targets and checks the closure property: every output is
//! an 8-character string accepted by the validator. Also collects operator
//! and character distributions, which makes skew in the rejection sampling
//! visible.

use crate::core::{Equation, TARGET_LEN};
use crate::generator;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from a bulk generation run
#[derive(Debug)]
pub struct GeneratorStats {
    pub total: usize,
    /// Outputs that failed re-validation (must be zero)
    pub invalid: usize,
    /// How many targets used each operator
    pub operator_counts: HashMap<char, usize>,
    /// Occurrences of every character across all targets
    pub char_counts: HashMap<char, usize>,
    pub duration: Duration,
    pub targets_per_second: f64,
}

/// Generate `count` targets in parallel and validate every one
#[must_use]
pub fn run_generator_stats(count: usize) -> GeneratorStats {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let targets: Vec<Equation> = (0..count)
        .into_par_iter()
        .map(|_| {
            let target = generator::generate();
            pb.inc(1);
            target
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut invalid = 0;
    let mut operator_counts: HashMap<char, usize> = HashMap::new();
    let mut char_counts: HashMap<char, usize> = HashMap::new();

    for target in &targets {
        let text = target.text();
        if text.len() != TARGET_LEN || !Equation::is_valid(text) {
            invalid += 1;
        }

        for ch in text.chars() {
            *char_counts.entry(ch).or_insert(0) += 1;
            if matches!(ch, '+' | '-' | '*' | '/') {
                *operator_counts.entry(ch).or_insert(0) += 1;
            }
        }
    }

    GeneratorStats {
        total: targets.len(),
        invalid,
        operator_counts,
        char_counts,
        duration,
        targets_per_second: targets.len() as f64 / duration.as_secs_f64(),
    }
}
