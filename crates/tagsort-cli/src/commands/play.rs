//! The `tagsort play` command: a terminal presentation adapter.
//!
//! Reads one gesture per stdin line and forwards it as a single engine
//! operation, then re-renders entirely from the returned state. The adapter
//! keeps no placement state of its own.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tagsort_core::catalog::{CatalogFile, CatalogSource};
use tagsort_core::engine::TagSortState;
use tagsort_core::model::Zone;
use tagsort_core::report::EvaluationResult;

pub fn execute(
    catalog_path: PathBuf,
    answer_set: String,
    seed: Option<u64>,
    report: Option<PathBuf>,
) -> Result<()> {
    let file = CatalogFile::from_path(&catalog_path)?;
    let tags = file.load_answer_set(&answer_set)?;
    tracing::debug!(path = %catalog_path.display(), set = %answer_set, "catalog loaded");

    let mut state = match seed {
        Some(seed) => TagSortState::with_rng(tags, &mut StdRng::seed_from_u64(seed))?,
        None => TagSortState::new(tags)?,
    };

    println!(
        "Answer set '{answer_set}': {} tags. Type 'help' for commands.",
        state.catalog().len()
    );
    render(&state);

    let stdin = std::io::stdin();
    let mut last_result: Option<EvaluationResult> = None;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, arg) = match input.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match command {
            "toggle" | "t" => {
                if let Err(e) = state.toggle(arg) {
                    report_error(&e);
                }
            }
            "drag" | "d" => {
                if let Err(e) = state.begin_drag(arg) {
                    report_error(&e);
                }
            }
            "drop" => match arg.parse::<Zone>() {
                Ok(zone) => {
                    if let Err(e) = state.move_to(zone) {
                        report_error(&e);
                    }
                }
                Err(msg) => println!("{msg}"),
            },
            "cancel" => state.end_drag(),
            "check" | "c" => match state.check() {
                Ok(result) => {
                    print_result(&result);
                    last_result = Some(result);
                }
                Err(e) => report_error(&e),
            },
            "reset" | "r" => match seed {
                Some(seed) => state.reset_with_rng(&mut StdRng::seed_from_u64(seed)),
                None => state.reset(),
            },
            "show" | "s" => {}
            "help" | "h" => {
                print_help();
                continue;
            }
            "quit" | "q" => break,
            other => {
                println!("Unknown command: {other} (try 'help')");
                continue;
            }
        }

        render(&state);
    }

    // A drag abandoned at quit is a cancellation, never an implicit move.
    state.end_drag();

    if let (Some(path), Some(result)) = (report, last_result) {
        result.save_json(&path)?;
        println!("Result saved to: {}", path.display());
    }

    Ok(())
}

fn render(state: &TagSortState) {
    println!();
    println!("Bank:   {}", zone_line(state.bank()));
    println!("Answer: {}", zone_line(state.answer()));
    if let Some(label) = state.dragging() {
        println!("Dragging: {label}");
    }
    if state.is_checked() {
        println!("(locked: 'reset' to try again)");
    }
}

fn zone_line(labels: &[String]) -> String {
    if labels.is_empty() {
        "(empty)".to_string()
    } else {
        labels
            .iter()
            .map(|l| format!("[{l}]"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn print_result(result: &EvaluationResult) {
    let mut table = Table::new();
    table.set_header(vec!["Tag", "Verdict", "Feedback"]);
    for outcome in &result.outcomes {
        let verdict = if outcome.is_correct { "correct" } else { "wrong" };
        table.add_row(vec![outcome.label.as_str(), verdict, outcome.feedback.as_str()]);
    }
    println!("{table}");
    println!("Score: {}/{}", result.correct_count, result.total_correct);
    if result.is_full_credit() {
        println!("Perfect! Every correct tag found.");
    }
}

fn report_error(e: &tagsort_core::error::EngineError) {
    if e.needs_reset() {
        println!("{e}");
    } else {
        println!("{e} (nothing moved)");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  toggle <label>   move a tag to the other zone");
    println!("  drag <label>     start dragging a tag");
    println!("  drop <zone>      drop the dragged tag into 'bank' or 'answer'");
    println!("  cancel           abandon the current drag");
    println!("  check            evaluate the answer zone and lock the exercise");
    println!("  reset            reshuffle everything back into the bank");
    println!("  show             re-print the current state");
    println!("  quit             leave the exercise");
}
