//! Seed-sweep regression benchmark: solve a range of deterministically
//! shuffled deals and write a JSON summary for manual tracking across
//! changes. Not wired into `cargo test`; invoked via `--bench-seeds`.
//!
//! Grounded in the teacher's `solver/src/main.rs::do_seed_benchmark` (same
//! per-seed timing + JSON summary shape), adapted from FreeCell's harness to
//! this crate's own `driver::solve`.

use std::fs;
use std::time::Instant;

use klondike_engine::deck::shuffled_deck;
use serde::{Deserialize, Serialize};

use crate::config::MAX_DEPTH;
use crate::driver;

#[derive(Serialize, Deserialize, Debug, Clone)]
struct SeedResult {
    seed: u64,
    solved: bool,
    foundation_count: u8,
    execution_time_ms: u64,
    timestamp: String,
    move_count: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug)]
struct BenchmarkSummary {
    total_games: usize,
    solved_games: usize,
    average_time_ms: f64,
}

#[derive(Serialize, Deserialize, Debug)]
struct BenchmarkResults {
    results: Vec<SeedResult>,
    summary: BenchmarkSummary,
}

/// Runs the solver over seeds `start..start+count`, writing `filename` after
/// every seed so a long sweep can be interrupted without losing progress.
pub fn run_seed_sweep(start: u64, count: u64, filename: &str) {
    let mut results = Vec::with_capacity(count as usize);
    for seed in start..start + count {
        let deck = shuffled_deck(seed);
        let began = Instant::now();
        let outcome = driver::solve(deck, MAX_DEPTH.min(200), |_| {});
        let execution_time_ms = began.elapsed().as_millis() as u64;

        results.push(SeedResult {
            seed,
            solved: outcome.solved,
            foundation_count: outcome.foundation_count,
            execution_time_ms,
            timestamp: chrono::Utc::now().to_rfc3339(),
            move_count: outcome.solved.then(|| outcome.moves.len()),
        });

        if results.len() % 10 == 0 || seed == start + count - 1 {
            save_results(&results, filename);
        }
    }
    save_results(&results, filename);

    let solved = results.iter().filter(|r| r.solved).count();
    println!("Benchmark complete: {solved}/{} seeds solved, summary in {filename}", results.len());
}

fn save_results(results: &[SeedResult], filename: &str) {
    let solved = results.iter().filter(|r| r.solved).count();
    let average_time_ms = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.execution_time_ms as f64).sum::<f64>() / results.len() as f64
    };
    let report = BenchmarkResults {
        results: results.to_vec(),
        summary: BenchmarkSummary { total_games: results.len(), solved_games: solved, average_time_ms },
    };
    if let Ok(json) = serde_json::to_string_pretty(&report) {
        let _ = fs::write(filename, json);
    }
}
