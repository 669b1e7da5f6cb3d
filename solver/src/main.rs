//! IDA* Klondike solitaire solver: loads a deal from `deck.txt`, searches for
//! an optimal (minimal move-count) solution, and prints it in the packed
//! format an external viewer consumes.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod arena;
mod bench;
mod config;
mod driver;
mod fingerprint;
mod packed;
mod progress;

use std::fs;
use std::io::{IsTerminal, Read};
use std::time::Instant;

use klondike_engine::deck;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let quiet = args.iter().any(|a| a == "--quiet");
    if let Some(pos) = args.iter().position(|a| a == "--bench-seeds") {
        let count: u64 = args.get(pos + 1).and_then(|s| s.parse().ok()).unwrap_or(100);
        progress::print_banner();
        bench::run_seed_sweep(1, count, "benchmark_summary.json");
        return;
    }

    progress::print_banner();

    let cards = match load_deck("deck.txt") {
        Ok(cards) => cards,
        Err(message) => {
            println!("{message}");
            wait_for_keypress();
            return;
        }
    };

    let initial_bound = {
        let state = klondike_engine::GameState::new_dealt(cards);
        state.min_win_at()
    };
    progress::print_trying(initial_bound);

    let started = Instant::now();
    let outcome = driver::solve(cards, initial_bound, |event| {
        if !quiet {
            progress::print_progress(event);
        }
    });
    progress::print_result(outcome.bound, outcome.foundation_count);
    if outcome.solved {
        println!("{}", packed::format_solution(&outcome.moves));
    }
    progress::print_elapsed(started.elapsed().as_millis());

    wait_for_keypress();
}

fn load_deck(path: &str) -> Result<[klondike_engine::Card; 52], String> {
    let contents = fs::read_to_string(path)
        .map_err(|_| "No deck found to solve! Should be located in deck.txt".to_string())?;
    deck::parse(&contents).map_err(|e| format!("Deck found in deck.txt is invalid: {e}"))
}

/// Mirrors the original's blocking `getchar()` before exit, skipped when
/// stdin isn't a terminal so automated runs (tests, CI, the seed benchmark)
/// never hang waiting for input that will never arrive.
fn wait_for_keypress() {
    if std::io::stdin().is_terminal() {
        let _ = std::io::stdin().read(&mut [0u8; 1]);
    }
}
