//! Display functions for command results

use super::formatters::{batch_position, create_progress_bar, format_elapsed, tile_marker};
use crate::commands::{ImportReport, ListSummary};
use crate::core::TileState;
use crate::game::Session;
use crate::store::KeyValueStore;
use colored::Colorize;
use rand::Rng;

/// Tiles printed per line in line mode
const TILES_PER_ROW: usize = 4;

/// Print the result of an import
pub fn print_import_report(report: &ImportReport) {
    println!(
        "\n{} {}",
        "✅".green(),
        report.imported.summary().green().bold()
    );
    println!("   File: {}", report.file.bright_white());
    if report.ignored_files > 0 {
        println!(
            "   {}",
            format!(
                "{} more file(s) ignored: only the first file is imported",
                report.ignored_files
            )
            .yellow()
        );
    }
}

/// Print the stored list
pub fn print_list_summary(summary: &ListSummary, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", summary.title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📚 {} pairs | {} per round | {} rounds",
        summary.pairs.len().to_string().bright_yellow().bold(),
        summary.pair_count,
        summary.rounds
    );

    if summary.pairs.is_empty() {
        println!("\n   No word list loaded yet. Import a .xlsx or .txt file first.");
        return;
    }

    let shown = if verbose { summary.pairs.len() } else { 10 };
    println!();
    for (i, pair) in summary.pairs.iter().take(shown).enumerate() {
        println!(
            "   {:>3}. {} {} {}",
            i + 1,
            pair.front().bright_white(),
            "→".bright_black(),
            pair.back()
        );
    }
    if summary.pairs.len() > shown {
        println!(
            "   {}",
            format!("… {} more (use --verbose)", summary.pairs.len() - shown).bright_black()
        );
    }
}

/// Print the current board in line mode
pub fn print_board<S: KeyValueStore, R: Rng>(session: &Session<S, R>) {
    let (batch, batches) =
        batch_position(session.start_index(), session.pair_count(), session.word_count());

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{}  |  ⏱ {}  |  batch {batch}/{batches}",
        session.title().bright_cyan().bold(),
        format_elapsed(session.elapsed_seconds()).bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    if session.tiles().is_empty() {
        println!("   (no tiles: import a word list first)");
        return;
    }

    for (row_start, row) in session
        .tiles()
        .chunks(TILES_PER_ROW)
        .enumerate()
        .map(|(r, row)| (r * TILES_PER_ROW, row))
    {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(offset, tile)| {
                let label = format!(
                    "{:>2}.{}{:<14}",
                    row_start + offset + 1,
                    tile_marker(tile.state()),
                    tile.content()
                );
                match tile.state() {
                    TileState::Idle => label.normal().to_string(),
                    TileState::Selected => label.bright_yellow().bold().to_string(),
                    TileState::Eliminated => label.bright_black().to_string(),
                    TileState::Mismatched => label.red().to_string(),
                }
            })
            .collect();
        println!("{}", line.join(" "));
    }

    let total = session.tiles().len();
    let cleared = session
        .tiles()
        .iter()
        .filter(|t| t.state() == TileState::Eliminated)
        .count();
    println!(
        "\n   {} {cleared}/{total}",
        create_progress_bar(cleared as f64, total as f64, 30).green()
    );
    if !session.is_unlocked() {
        println!("   {}", "Type 'start' to play.".bright_black());
    }
}

/// Print the round-complete banner
pub fn print_round_complete(elapsed_seconds: u64) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "      🎉 ✨  R O U N D   C L E A R E D !  ✨ 🎉      "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Time: {}\n",
        format_elapsed(elapsed_seconds).bright_yellow().bold()
    );
}
