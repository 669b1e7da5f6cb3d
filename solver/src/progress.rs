//! Stdout formatting for the search banner and per-iteration progress lines.
//! Kept separate from [`crate::driver`] so the driver's `on_progress`
//! callback stays testable without touching stdout.

use crate::driver::Progress;

pub const BANNER: &str = "Klondike Solver\n--------------------------------------------------------------------------------";

pub fn print_banner() {
    println!("{BANNER}");
}

pub fn print_progress(event: Progress) {
    match event {
        Progress::Depth { total_moves, open_size, open_top, closed_size, foundation } => {
            println!("Depth: {total_moves} Open: {open_size}-{open_top} Closed: {closed_size} Foundation: {foundation}");
        }
        Progress::Reopening { new_bound, open_before, open_size, open_top, closed_size } => {
            println!("Reopening: {new_bound} OpenPrev: {open_before} Open: {open_size}-{open_top} Closed: {closed_size}");
        }
    }
}

pub fn print_trying(initial_bound: i32) {
    println!("Trying {initial_bound}");
}

pub fn print_result(bound: i32, foundation_count: u8) {
    println!("Found: {bound} {foundation_count}");
}

pub fn print_elapsed(millis: u128) {
    println!("Done {millis}");
}
