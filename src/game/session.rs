//! Session controller: game lifecycle, batch progression and timing
//!
//! The session owns the word list store, the board, the round timer and the
//! queue of delayed continuations. Time is logical: the embedding event loop
//! calls [`Session::advance`] with however much real time has passed, and the
//! session interleaves timer ticks and due continuations in time order.

use super::matcher::{ClickOutcome, MatchEngine};
use super::panel::build_round;
use super::scheduler::{Continuation, Due, RoundId, Scheduler};
use super::shuffle::shuffled;
use super::timer::Timer;
use crate::core::{PairCount, Tile, WordPair};
use crate::store::{KeyValueStore, StoreError, WordListStore};
use crate::wordlists::{ImportedList, ParseError, SourceFile, parse_file};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info};

/// Pause before a formed pair is resolved
pub const RESOLVE_DELAY: Duration = Duration::from_millis(200);

/// How long a mismatched pair stays flagged before reverting to idle
pub const REVERT_DELAY: Duration = Duration::from_millis(500);

/// Pause between clearing the board and announcing it
pub const COMPLETE_NOTICE_DELAY: Duration = Duration::from_millis(600);

/// Signals for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The board was cleared; carries the round's time
    RoundComplete { elapsed_seconds: u64 },
    /// `continue` ran past the end of the list and wrapped to the start
    ListCompleted,
}

/// Error raised by a lifecycle operation
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no word list loaded: import a .xlsx or .txt list first")]
    NoWordListLoaded,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Error raised by an import; the previous list stays in place
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("imported list could not be saved: {0}")]
    Store(#[from] StoreError),
}

/// One game session over a persisted word list
#[derive(Debug)]
pub struct Session<S, R = StdRng> {
    store: WordListStore<S>,
    engine: MatchEngine,
    scheduler: Scheduler,
    timer: Timer,
    rng: R,
    now: Duration,
    start_index: usize,
    pair_count: PairCount,
    playing: bool,
    unlocked: bool,
    events: VecDeque<SessionEvent>,
}

impl<S: KeyValueStore> Session<S, StdRng> {
    /// Create a session seeded from the OS
    #[must_use]
    pub fn new(store: WordListStore<S>, pair_count: PairCount) -> Self {
        Self::with_rng(store, pair_count, StdRng::from_os_rng())
    }
}

impl<S: KeyValueStore, R: Rng> Session<S, R> {
    /// Create a session with an explicit random source
    ///
    /// A persisted list is previewed right away at offset 0; the board stays
    /// locked until [`Session::start`].
    pub fn with_rng(store: WordListStore<S>, pair_count: PairCount, rng: R) -> Self {
        let mut session = Self {
            store,
            engine: MatchEngine::new(),
            scheduler: Scheduler::new(),
            timer: Timer::new(),
            rng,
            now: Duration::ZERO,
            start_index: 0,
            pair_count,
            playing: false,
            unlocked: false,
            events: VecDeque::new(),
        };
        if !session.store.is_empty() {
            session.rebuild_round();
        }
        session
    }

    // ----- presentation boundary -----

    #[must_use]
    pub fn title(&self) -> &str {
        self.store.title()
    }

    #[must_use]
    pub fn words(&self) -> &[WordPair] {
        self.store.words()
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        self.engine.tiles()
    }

    #[must_use]
    pub const fn pending_tile(&self) -> Option<usize> {
        self.engine.pending()
    }

    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.timer.elapsed_seconds()
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    #[must_use]
    pub const fn pair_count(&self) -> PairCount {
        self.pair_count
    }

    /// Offset of the current round into the list, counted in tiles
    #[must_use]
    pub const fn start_index(&self) -> usize {
        self.start_index
    }

    #[must_use]
    pub const fn round(&self) -> RoundId {
        self.engine.round()
    }

    #[must_use]
    pub const fn store(&self) -> &WordListStore<S> {
        &self.store
    }

    /// Take the signals raised since the last call
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    // ----- list management -----

    /// Import a user-supplied file, replacing the list on success
    ///
    /// The parsed list is shuffled, persisted, and the board rebuilt from
    /// offset 0. Nothing changes if parsing or saving fails.
    ///
    /// # Errors
    /// Returns `ImportError::Parse` for unsupported, unreadable or empty input
    /// and `ImportError::Store` if the list cannot be saved.
    pub fn import(&mut self, file: &SourceFile) -> Result<ImportedList, ImportError> {
        let imported = parse_file(file)?;
        self.load_pairs(&imported.pairs)?;
        info!(
            file = file.name(),
            format = %imported.format,
            pairs = imported.pairs.len(),
            skipped = imported.skipped_lines,
            "word list imported"
        );
        Ok(imported)
    }

    /// Shuffle `pairs` into the canonical list and show its first round
    ///
    /// # Errors
    /// Returns `StoreError` if the list cannot be saved.
    pub fn load_pairs(&mut self, pairs: &[WordPair]) -> Result<(), StoreError> {
        let words = shuffled(pairs, &mut self.rng);
        self.store.replace(words)?;
        self.start_index = 0;
        self.rebuild_round();
        Ok(())
    }

    /// Set the title; blank input restores the default
    ///
    /// # Errors
    /// Returns `StoreError` if the title cannot be saved.
    pub fn set_title(&mut self, title: &str) -> Result<(), StoreError> {
        self.store.set_title(title)
    }

    // ----- lifecycle -----

    /// Start (or restart) a game from a freshly shuffled list
    ///
    /// # Errors
    /// Returns `GameError::NoWordListLoaded` without touching any state when
    /// the list is empty, or `GameError::Store` if the reshuffled list cannot
    /// be saved.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.store.is_empty() {
            return Err(GameError::NoWordListLoaded);
        }

        let words = shuffled(self.store.words(), &mut self.rng);
        self.store.replace(words)?;
        self.start_index = 0;
        self.rebuild_round();

        self.timer.reset();
        self.unlocked = true;
        self.timer.start();
        self.playing = true;
        info!(pairs = self.store.len(), pair_count = %self.pair_count, "game started");
        Ok(())
    }

    /// Move on to the next batch of the list, wrapping after the last one
    ///
    /// # Errors
    /// Returns `GameError::NoWordListLoaded` when the list is empty.
    pub fn continue_round(&mut self) -> Result<(), GameError> {
        if self.store.is_empty() {
            return Err(GameError::NoWordListLoaded);
        }

        let next = self.start_index + self.pair_count.tile_span();
        if next >= self.store.len() * 2 {
            self.start_index = 0;
            self.events.push_back(SessionEvent::ListCompleted);
            info!("whole list completed, starting over");
        } else {
            self.start_index = next;
        }
        self.rebuild_round();

        self.timer.reset();
        self.timer.start();
        self.playing = true;
        debug!(start_index = self.start_index, "next round");
        Ok(())
    }

    /// Change the round size and rebuild the current round at the same offset
    pub fn change_pair_count(&mut self, pair_count: usize) {
        self.pair_count = PairCount::clamped(pair_count);
        if !self.store.is_empty() {
            self.rebuild_round();
        }
    }

    /// Stop the timer and drop pending continuations
    pub fn shutdown(&mut self) {
        self.timer.stop();
        self.scheduler.clear();
        self.playing = false;
    }

    // ----- interaction -----

    /// Click tile `index`
    ///
    /// Clicks are ignored unless a game is running. A formed pair is resolved
    /// after [`RESOLVE_DELAY`].
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        if !self.playing {
            return ClickOutcome::Ignored;
        }

        let outcome = self.engine.click(index, self.store.words());
        let round = self.engine.round();
        let due = self.now + RESOLVE_DELAY;
        match outcome {
            ClickOutcome::Matched { first, second } => {
                self.scheduler
                    .schedule(due, round, Continuation::Eliminate { first, second });
            }
            ClickOutcome::Mismatched { first, second } => {
                self.scheduler
                    .schedule(due, round, Continuation::FlagMismatch { first, second });
            }
            ClickOutcome::Ignored | ClickOutcome::AwaitingPartner => {}
        }
        outcome
    }

    /// Let `delta` of time pass, firing timer ticks and due continuations
    pub fn advance(&mut self, delta: Duration) {
        let target = self.now + delta;

        while let Some(due) = self.scheduler.next_due().filter(|&due| due <= target) {
            let at = due.max(self.now);
            self.timer.advance(at - self.now);
            self.now = at;
            while let Some(entry) = self.scheduler.pop_due(self.now) {
                self.fire(entry);
            }
        }

        self.timer.advance(target - self.now);
        self.now = target;
    }

    fn fire(&mut self, entry: Due) {
        if entry.round != self.engine.round() {
            debug!(action = ?entry.action, round = entry.round, "dropping continuation from an old round");
            return;
        }

        match entry.action {
            Continuation::Eliminate { first, second } => {
                self.engine.eliminate(first, second);
                if self.playing && self.engine.is_cleared() {
                    self.on_round_complete();
                }
            }
            Continuation::FlagMismatch { first, second } => {
                self.engine.flag_mismatch(first, second);
                self.scheduler.schedule(
                    self.now + REVERT_DELAY,
                    entry.round,
                    Continuation::Revert { first, second },
                );
            }
            Continuation::Revert { first, second } => {
                self.engine.revert(first, second);
            }
            Continuation::AnnounceComplete => {
                self.events.push_back(SessionEvent::RoundComplete {
                    elapsed_seconds: self.timer.elapsed_seconds(),
                });
            }
        }
    }

    fn on_round_complete(&mut self) {
        self.timer.stop();
        self.playing = false;
        info!(
            seconds = self.timer.elapsed_seconds(),
            start_index = self.start_index,
            "round cleared"
        );
        self.scheduler.schedule(
            self.now + COMPLETE_NOTICE_DELAY,
            self.engine.round(),
            Continuation::AnnounceComplete,
        );
    }

    fn rebuild_round(&mut self) {
        let contents = build_round(
            self.store.words(),
            self.start_index,
            self.pair_count.get(),
            &mut self.rng,
        );
        let round = self.engine.load_round(contents);
        debug!(round, tiles = self.engine.tiles().len(), "board rebuilt");
    }
}
