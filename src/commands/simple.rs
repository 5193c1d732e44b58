//! Simple interactive CLI mode
//!
//! Text-based game without TUI: tiles are picked by number.

use crate::game::{
    COMPLETE_NOTICE_DELAY, ClickOutcome, REVERT_DELAY, RESOLVE_DELAY, Session, SessionEvent,
};
use crate::output::{print_board, print_round_complete};
use crate::store::KeyValueStore;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Wall clock feeding real elapsed time into the session
struct Clock {
    last: Instant,
}

impl Clock {
    fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    fn tick<S: KeyValueStore, R: Rng>(&mut self, session: &mut Session<S, R>) {
        let now = Instant::now();
        session.advance(now - self.last);
        self.last = now;
    }

    /// Wait out a visual delay, then catch the session up
    fn settle<S: KeyValueStore, R: Rng>(&mut self, session: &mut Session<S, R>, wait: Duration) {
        thread::sleep(wait);
        self.tick(session);
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: KeyValueStore, R: Rng>(session: &mut Session<S, R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Word Elimination - Line Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Clear the board by picking a word and its translation.");
    println!("Enter two tile numbers separated by a space, e.g. '3 12'.\n");
    println!("Commands: 'start', 'continue', 'pairs <5-50>', 'quit'\n");

    let mut clock = Clock::new();

    loop {
        clock.tick(session);
        print_board(session);

        let input = get_user_input("Tiles or command")?.to_lowercase();
        clock.tick(session);

        let mut words = input.split_whitespace();
        match (words.next(), words.next()) {
            (None, _) => {}
            (Some("quit" | "q" | "exit"), _) => {
                session.shutdown();
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            (Some("start" | "s" | "restart"), _) => {
                if let Err(e) = session.start() {
                    println!("{}", format!("❌ {e}").red());
                }
            }
            (Some("continue" | "c"), _) => match session.continue_round() {
                Ok(()) => report_events(session),
                Err(e) => println!("{}", format!("❌ {e}").red()),
            },
            (Some("pairs" | "p"), Some(n)) => match n.parse::<usize>() {
                Ok(n) => {
                    session.change_pair_count(n);
                    println!("Pairs per round: {}", session.pair_count());
                }
                Err(_) => println!("❌ 'pairs' expects a number between 5 and 50"),
            },
            (Some(a), Some(b)) => match (parse_tile(a), parse_tile(b)) {
                (Some(a), Some(b)) => play_pair(session, &mut clock, a, b),
                _ => println!("❌ Tile numbers must be positive integers"),
            },
            (Some(other), None) => {
                println!("❌ Unknown command '{other}'");
            }
        }
    }
}

fn play_pair<S: KeyValueStore, R: Rng>(
    session: &mut Session<S, R>,
    clock: &mut Clock,
    first: usize,
    second: usize,
) {
    if !session.is_playing() {
        println!("Type 'start' to begin a round.");
        return;
    }

    if let Some(reason) = pick_error(session, first, second) {
        println!("❌ {reason}");
        return;
    }

    if session.click(first) != ClickOutcome::AwaitingPartner {
        println!("❌ Tile {} can't be picked right now", first + 1);
        return;
    }
    match session.click(second) {
        ClickOutcome::Matched { .. } => {
            println!("{}", "✓ Match!".green().bold());
            clock.settle(session, RESOLVE_DELAY);
        }
        ClickOutcome::Mismatched { .. } => {
            println!("{}", "✗ Not a pair".red());
            clock.settle(session, RESOLVE_DELAY + REVERT_DELAY);
        }
        ClickOutcome::Ignored | ClickOutcome::AwaitingPartner => {
            println!("❌ Tile {} can't be picked right now", second + 1);
            return;
        }
    }

    if !session.is_playing() {
        clock.settle(session, COMPLETE_NOTICE_DELAY);
        report_events(session);
    }
}

/// Why two tiles can't be picked together
///
/// Checked before either tile is clicked, so a rejected pick leaves nothing
/// selected.
fn pick_error<S: KeyValueStore, R: Rng>(
    session: &Session<S, R>,
    first: usize,
    second: usize,
) -> Option<String> {
    if session.pending_tile().is_some() {
        return Some("A tile is still waiting for its partner".to_string());
    }
    if first == second {
        return Some("Pick two different tiles".to_string());
    }
    for index in [first, second] {
        match session.tiles().get(index) {
            None => return Some(format!("There is no tile {}", index + 1)),
            Some(tile) if !tile.state().is_clickable() => {
                return Some(format!("Tile {} can't be picked right now", index + 1));
            }
            Some(_) => {}
        }
    }
    None
}

fn report_events<S: KeyValueStore, R: Rng>(session: &mut Session<S, R>) {
    for event in session.drain_events() {
        match event {
            SessionEvent::RoundComplete { elapsed_seconds } => {
                print_round_complete(elapsed_seconds);
                println!("Type 'continue' for the next batch.\n");
            }
            SessionEvent::ListCompleted => {
                println!(
                    "{}",
                    "🔁 Whole list completed, starting over from the top!"
                        .bright_cyan()
                        .bold()
                );
            }
        }
    }
}

/// Convert a 1-based tile number to an index
fn parse_tile(s: &str) -> Option<usize> {
    s.parse::<usize>().ok()?.checked_sub(1)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like quitting
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PairCount, TileState, WordPair};
    use crate::store::{MemoryStore, WordListStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn started_session() -> Session<MemoryStore, StdRng> {
        let mut store = WordListStore::open(MemoryStore::new()).unwrap();
        store
            .replace(
                (0..5)
                    .map(|i| WordPair::new(format!("w{i}"), format!("t{i}")).unwrap())
                    .collect(),
            )
            .unwrap();
        let mut session =
            Session::with_rng(store, PairCount::clamped(5), StdRng::seed_from_u64(17));
        session.start().unwrap();
        session
    }

    fn index_of(session: &Session<MemoryStore, StdRng>, content: &str) -> usize {
        session
            .tiles()
            .iter()
            .position(|t| t.content() == content)
            .unwrap()
    }

    #[test]
    fn same_tile_twice_leaves_nothing_selected() {
        let mut session = started_session();
        let mut clock = Clock::new();
        let words = session.words().to_vec();
        let a = index_of(&session, words[0].front());

        play_pair(&mut session, &mut clock, a, a);
        assert_eq!(session.pending_tile(), None);
        assert_eq!(session.tiles()[a].state(), TileState::Idle);

        let b = index_of(&session, words[1].front());
        let c = index_of(&session, words[1].back());
        play_pair(&mut session, &mut clock, b, c);
        assert_eq!(session.tiles()[b].state(), TileState::Eliminated);
        assert_eq!(session.tiles()[c].state(), TileState::Eliminated);
        assert_eq!(session.tiles()[a].state(), TileState::Idle);
        assert_eq!(session.pending_tile(), None);
    }

    #[test]
    fn out_of_range_or_cleared_tiles_are_rejected_up_front() {
        let mut session = started_session();
        let mut clock = Clock::new();
        let words = session.words().to_vec();
        let a = index_of(&session, words[0].front());
        let b = index_of(&session, words[0].back());

        assert!(pick_error(&session, a, 99).is_some());
        play_pair(&mut session, &mut clock, a, 99);
        assert_eq!(session.pending_tile(), None);
        assert_eq!(session.tiles()[a].state(), TileState::Idle);

        play_pair(&mut session, &mut clock, a, b);
        assert_eq!(session.tiles()[a].state(), TileState::Eliminated);

        let c = index_of(&session, words[1].front());
        assert!(pick_error(&session, a, c).is_some());
        play_pair(&mut session, &mut clock, a, c);
        assert_eq!(session.tiles()[c].state(), TileState::Idle);
        assert_eq!(session.pending_tile(), None);
    }

    #[test]
    fn valid_pick_has_no_error() {
        let session = started_session();
        assert_eq!(pick_error(&session, 0, 1), None);
    }

    #[test]
    fn tile_numbers_are_one_based() {
        assert_eq!(parse_tile("1"), Some(0));
        assert_eq!(parse_tile("12"), Some(11));
        assert_eq!(parse_tile("0"), None);
        assert_eq!(parse_tile("x"), None);
    }
}
