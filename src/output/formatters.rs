//! Formatting utilities for terminal output

use crate::core::{PairCount, TileState};

/// Marker shown next to a tile for its state
#[must_use]
pub const fn tile_marker(state: TileState) -> &'static str {
    match state {
        TileState::Idle => "  ",
        TileState::Selected => "▶ ",
        TileState::Eliminated => "✓ ",
        TileState::Mismatched => "✗ ",
    }
}

/// Elapsed time as `42s` or `3m 07s`
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    if seconds < 60 {
        format!("{seconds}s")
    } else {
        format!("{}m {:02}s", seconds / 60, seconds % 60)
    }
}

/// 1-based batch number and total batch count for a round offset
#[must_use]
pub fn batch_position(start_index: usize, pair_count: PairCount, word_count: usize) -> (usize, usize) {
    let per_batch = pair_count.get();
    let total = word_count.div_ceil(per_batch);
    let current = (start_index / 2) / per_batch + 1;
    (current.min(total.max(1)), total)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
