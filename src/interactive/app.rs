//! TUI application state and logic

use super::rendering::{self, BoardGeometry};
use crate::commands::import_paths;
use crate::core::TileState;
use crate::game::{ClickOutcome, Session, SessionEvent};
use crate::store::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Event poll interval; also the resolution of the on-screen clock
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S: KeyValueStore> {
    pub session: Session<S>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Board area from the last draw, used for mouse hit-testing
    pub board_area: Cell<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Board,
    ImportPath,
    EditTitle,
    RoundComplete { elapsed_seconds: u64 },
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl<S: KeyValueStore> App<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        let mut app = Self {
            session,
            input_mode: InputMode::Board,
            input_buffer: String::new(),
            cursor: 0,
            messages: Vec::new(),
            should_quit: false,
            board_area: Cell::new(Rect::default()),
        };

        if app.session.word_count() == 0 {
            app.add_message(
                "Welcome! Press 'i' to import a .xlsx or .txt word list.",
                MessageStyle::Info,
            );
        } else {
            app.add_message(
                &format!(
                    "Loaded {} pairs. Press 's' to start!",
                    app.session.word_count()
                ),
                MessageStyle::Info,
            );
        }
        app
    }

    pub fn start_game(&mut self) {
        match self.session.start() {
            Ok(()) => {
                self.cursor = 0;
                self.input_mode = InputMode::Board;
                self.add_message("Game started. Match each word with its pair!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn continue_game(&mut self) {
        match self.session.continue_round() {
            Ok(()) => {
                self.cursor = 0;
                self.input_mode = InputMode::Board;
                self.add_message("Next batch!", MessageStyle::Info);
                self.handle_events();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn import_file(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            self.add_message("No file given", MessageStyle::Error);
            return;
        }

        match import_paths(&mut self.session, &[PathBuf::from(path)]) {
            Ok(report) => {
                self.cursor = 0;
                let style = if report.imported.skipped_lines > 0 {
                    MessageStyle::Warning
                } else {
                    MessageStyle::Success
                };
                self.add_message(&report.imported.summary(), style);
            }
            Err(e) => {
                warn!(path, error = %e, "import failed");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn commit_title(&mut self) {
        let title = std::mem::take(&mut self.input_buffer);
        if let Err(e) = self.session.set_title(&title) {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    pub fn change_pairs(&mut self, increase: bool) {
        let current = self.session.pair_count();
        let next = if increase {
            current.increased()
        } else {
            current.decreased()
        };
        if next != current {
            self.session.change_pair_count(next.get());
            self.cursor = self.cursor.min(self.session.tiles().len().saturating_sub(1));
        }
    }

    pub fn click(&mut self, index: usize) {
        self.cursor = index;
        match self.session.click(index) {
            ClickOutcome::Mismatched { .. } => {
                self.add_message("Not a pair, try again", MessageStyle::Warning);
            }
            ClickOutcome::Ignored if !self.session.is_unlocked() => {
                self.add_message("Press 's' to start the game", MessageStyle::Info);
            }
            _ => {}
        }
    }

    /// Move the cursor by `(dx, dy)` tiles on a grid `columns` wide
    pub fn move_cursor(&mut self, dx: isize, dy: isize, columns: usize) {
        let count = self.session.tiles().len();
        if count == 0 {
            return;
        }
        let columns = columns.max(1) as isize;
        let target = self.cursor as isize + dx + dy * columns;
        if (0..count as isize).contains(&target) {
            self.cursor = target as usize;
        }
    }

    /// Let real time pass and react to what the session signals
    pub fn tick(&mut self, delta: Duration) {
        self.session.advance(delta);
        self.handle_events();
    }

    fn handle_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::RoundComplete { elapsed_seconds } => {
                    info!(elapsed_seconds, "round complete");
                    self.input_mode = InputMode::RoundComplete { elapsed_seconds };
                    self.add_message(
                        &format!("Round cleared in {elapsed_seconds}s!"),
                        MessageStyle::Success,
                    );
                }
                SessionEvent::ListCompleted => {
                    self.add_message(
                        "Whole list completed, starting over from the top!",
                        MessageStyle::Success,
                    );
                }
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn columns(&self) -> usize {
        BoardGeometry::new(self.board_area.get(), self.session.tiles().len()).columns
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundComplete { .. } => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('c') | KeyCode::Enter => self.continue_game(),
                KeyCode::Esc => self.input_mode = InputMode::Board,
                _ => {}
            },
            InputMode::Board => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('s') => self.start_game(),
                KeyCode::Char('c') => {
                    if self.session.is_unlocked() && !self.session.is_playing() {
                        self.continue_game();
                    }
                }
                KeyCode::Char('+' | '=') => self.change_pairs(true),
                KeyCode::Char('-') => self.change_pairs(false),
                KeyCode::Char('i') => {
                    self.input_mode = InputMode::ImportPath;
                    self.input_buffer.clear();
                }
                KeyCode::Char('t') => {
                    self.input_mode = InputMode::EditTitle;
                    self.input_buffer = self.session.title().to_string();
                }
                KeyCode::Left => self.move_cursor(-1, 0, self.columns()),
                KeyCode::Right => self.move_cursor(1, 0, self.columns()),
                KeyCode::Up => self.move_cursor(0, -1, self.columns()),
                KeyCode::Down => self.move_cursor(0, 1, self.columns()),
                KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
                _ => {}
            },
            InputMode::ImportPath | InputMode::EditTitle => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Board;
                    self.input_buffer.clear();
                }
                KeyCode::Enter => {
                    let mode = self.input_mode;
                    self.input_mode = InputMode::Board;
                    if mode == InputMode::ImportPath {
                        let path = std::mem::take(&mut self.input_buffer);
                        self.import_file(&path);
                    } else {
                        self.commit_title();
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.input_mode != InputMode::Board
            || mouse.kind != MouseEventKind::Down(MouseButton::Left)
        {
            return;
        }
        let geometry = BoardGeometry::new(self.board_area.get(), self.session.tiles().len());
        if let Some(index) = geometry.tile_at(mouse.column, mouse.row) {
            self.click(index);
        }
    }

    /// Count of tiles in a given state, for the status line
    #[must_use]
    pub fn count_in(&self, state: TileState) -> usize {
        self.session
            .tiles()
            .iter()
            .filter(|t| t.state() == state)
            .count()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(mut app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app, poll_event);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Wait up to one poll interval for a terminal event
fn poll_event() -> io::Result<Option<Event>> {
    if event::poll(POLL_INTERVAL)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Drive the app until it quits or the terminal fails; the session is shut
/// down either way
fn run_app<B, S, F>(terminal: &mut Terminal<B>, app: &mut App<S>, next_event: F) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    F: FnMut() -> io::Result<Option<Event>>,
{
    let res = event_loop(terminal, app, next_event);
    app.session.shutdown();
    res
}

fn event_loop<B, S, F>(terminal: &mut Terminal<B>, app: &mut App<S>, mut next_event: F) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    F: FnMut() -> io::Result<Option<Event>>,
{
    let mut last = Instant::now();

    loop {
        terminal.draw(|f| rendering::ui(f, app))?;

        match next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Some(Event::Mouse(mouse)) => app.handle_mouse(mouse),
            _ => {}
        }

        let now = Instant::now();
        app.tick(now - last);
        last = now;

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PairCount, WordPair};
    use crate::game::{COMPLETE_NOTICE_DELAY, RESOLVE_DELAY};
    use crate::store::{MemoryStore, WordListStore};
    use ratatui::backend::TestBackend;

    fn app_with(n: usize) -> App<MemoryStore> {
        let mut store = WordListStore::open(MemoryStore::new()).unwrap();
        store
            .replace(
                (0..n)
                    .map(|i| WordPair::new(format!("w{i}"), format!("t{i}")).unwrap())
                    .collect(),
            )
            .unwrap();
        App::new(Session::new(store, PairCount::clamped(5)))
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn index_of(app: &App<MemoryStore>, content: &str) -> usize {
        app.session
            .tiles()
            .iter()
            .position(|t| t.content() == content)
            .unwrap()
    }

    #[test]
    fn start_without_list_reports_error() {
        let mut app = app_with(0);
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.session.is_playing());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("no word list"));
    }

    #[test]
    fn clearing_the_board_opens_the_completion_modal() {
        let mut app = app_with(5);
        press(&mut app, KeyCode::Char('s'));
        let words = app.session.words().to_vec();
        for pair in &words {
            let a = index_of(&app, pair.front());
            let b = index_of(&app, pair.back());
            app.click(a);
            app.click(b);
            app.tick(RESOLVE_DELAY);
        }
        app.tick(COMPLETE_NOTICE_DELAY);
        assert!(matches!(app.input_mode, InputMode::RoundComplete { .. }));

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.input_mode, InputMode::Board);
        assert!(app.session.is_playing());
    }

    #[test]
    fn title_editing_commits_on_enter() {
        let mut app = app_with(0);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.input_mode, InputMode::EditTitle);
        app.input_buffer.clear();
        for c in "Animals".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.title(), "Animals");
        assert_eq!(app.input_mode, InputMode::Board);
    }

    #[test]
    fn pair_count_keys_rebuild_board() {
        let mut app = app_with(20);
        assert_eq!(app.session.tiles().len(), 10);
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.session.tiles().len(), 12);
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.session.pair_count().get(), 5);
    }

    #[test]
    fn cursor_stays_on_the_board() {
        let mut app = app_with(5);
        app.move_cursor(-1, 0, 4);
        assert_eq!(app.cursor, 0);
        app.move_cursor(0, 1, 4);
        assert_eq!(app.cursor, 4);
        app.move_cursor(0, 5, 4);
        assert_eq!(app.cursor, 4);
    }

    #[test]
    fn missing_import_file_is_reported() {
        let mut app = app_with(3);
        app.import_file("/nonexistent/list.txt");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.session.word_count(), 3);
    }

    fn key_event(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn failing_input_still_shuts_the_session_down() {
        let mut app = app_with(5);
        app.start_game();
        let words = app.session.words().to_vec();
        let a = index_of(&app, words[0].front());
        let b = index_of(&app, words[0].back());
        app.click(a);
        app.click(b);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut calls = 0;
        let res = run_app(&mut terminal, &mut app, || {
            calls += 1;
            if calls == 1 {
                Ok(None)
            } else {
                Err(io::Error::other("input closed"))
            }
        });

        assert!(res.is_err());
        assert!(!app.session.is_playing());
        app.session.advance(RESOLVE_DELAY);
        assert_eq!(app.count_in(TileState::Eliminated), 0);
    }

    #[test]
    fn quit_key_ends_the_loop_and_shuts_down() {
        let mut app = app_with(5);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut script = vec![key_event('q'), key_event('s')];

        run_app(&mut terminal, &mut app, || Ok(script.pop())).unwrap();

        assert!(app.should_quit);
        assert!(app.session.is_unlocked());
        assert!(!app.session.is_playing());
    }
}
