//! TUI rendering with ratatui
//!
//! Board grid, timer and status panels for the elimination game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Tile, TileState};
use crate::output::formatters::{batch_position, format_elapsed};
use crate::store::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Narrowest a tile may get before the grid drops a column
const MIN_TILE_WIDTH: u16 = 16;

/// Height of a bordered tile; tiles collapse to one line when the grid would overflow
const TALL_TILE_HEIGHT: u16 = 3;

/// Grid placement of tiles inside the board area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub area: Rect,
    pub count: usize,
    pub columns: usize,
    pub tile_width: u16,
    pub tile_height: u16,
}

impl BoardGeometry {
    #[must_use]
    pub fn new(area: Rect, count: usize) -> Self {
        let columns = (area.width / MIN_TILE_WIDTH).max(1);
        let tile_width = area.width / columns;
        let rows = count.div_ceil(columns as usize);
        let tile_height = if rows * TALL_TILE_HEIGHT as usize <= area.height as usize {
            TALL_TILE_HEIGHT
        } else {
            1
        };

        Self {
            area,
            count,
            columns: columns as usize,
            tile_width,
            tile_height,
        }
    }

    /// Screen rectangle of tile `index`, or `None` if it falls outside the area
    #[must_use]
    pub fn tile_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.count || self.tile_width == 0 {
            return None;
        }
        let row = (index / self.columns) as u16;
        let col = (index % self.columns) as u16;
        let y = row.checked_mul(self.tile_height)?;
        if y + self.tile_height > self.area.height {
            return None;
        }
        Some(Rect::new(
            self.area.x + col * self.tile_width,
            self.area.y + y,
            self.tile_width,
            self.tile_height,
        ))
    }

    /// Tile under a screen position
    #[must_use]
    pub fn tile_at(&self, x: u16, y: u16) -> Option<usize> {
        if self.tile_width == 0 || !self.area.contains(Position { x, y }) {
            return None;
        }
        let col = ((x - self.area.x) / self.tile_width) as usize;
        let row = ((y - self.area.y) / self.tile_height) as usize;
        if col >= self.columns {
            return None;
        }
        let index = row * self.columns + col;
        (index < self.count).then_some(index)
    }
}

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board and side panel
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_help(f, app, chunks[3]);

    if let InputMode::RoundComplete { elapsed_seconds } = app.input_mode {
        render_round_complete(f, elapsed_seconds);
    }
}

fn render_header<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let header = Paragraph::new(format!("🧩 {}", app.session.title()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = &app.session;
    let title = if session.is_unlocked() {
        " Board ".to_string()
    } else {
        " Board (locked, press 's' to start) ".to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);
    app.board_area.set(inner);

    if session.tiles().is_empty() {
        let empty = Paragraph::new("No word list yet. Press 'i' to import a .xlsx or .txt file.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        f.render_widget(empty, inner);
        return;
    }

    let geometry = BoardGeometry::new(inner, session.tiles().len());
    for (index, tile) in session.tiles().iter().enumerate() {
        let Some(rect) = geometry.tile_rect(index) else {
            break;
        };
        let focused = app.input_mode == InputMode::Board && index == app.cursor;
        render_tile(f, tile, rect, focused, session.is_unlocked());
    }
}

fn tile_style(state: TileState, unlocked: bool) -> Style {
    if !unlocked {
        return Style::default().fg(Color::DarkGray);
    }
    match state {
        TileState::Idle => Style::default().fg(Color::White),
        TileState::Selected => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TileState::Eliminated => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        TileState::Mismatched => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn render_tile(f: &mut Frame, tile: &Tile, rect: Rect, focused: bool, unlocked: bool) {
    let mut style = tile_style(tile.state(), unlocked);
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let text = if tile.state() == TileState::Eliminated {
        String::new()
    } else {
        tile.content().to_string()
    };

    let paragraph = if rect.height >= TALL_TILE_HEIGHT {
        let border_type = if tile.state() == TileState::Selected {
            BorderType::Double
        } else {
            BorderType::Plain
        };
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .style(style),
        )
    } else {
        Paragraph::new(format!("[{text}]"))
    };

    f.render_widget(
        paragraph.style(style).alignment(Alignment::Center),
        rect,
    );
}

fn render_side_panel<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Timer and batch
            Constraint::Length(3), // Progress
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_stats<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = &app.session;
    let (batch, batches) =
        batch_position(session.start_index(), session.pair_count(), session.word_count());

    let content = vec![
        Line::from(vec![
            Span::raw("⏱  "),
            Span::styled(
                format_elapsed(session.elapsed_seconds()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Pairs/round: {} (+/-)", session.pair_count())),
        Line::from(format!(
            "Batch {batch}/{batches} of {} pairs",
            session.word_count()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_progress<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let total = app.session.tiles().len();
    let cleared = app.count_in(TileState::Eliminated);
    let percent = if total == 0 {
        0
    } else {
        (cleared * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{cleared}/{total}"));
    f.render_widget(gauge, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::ImportPath => (
            " Import word list (.xlsx or .txt path) | Enter to load, ESC to cancel ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::EditTitle => (
            " Edit title | Enter to save, ESC to cancel ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::Board | InputMode::RoundComplete { .. } => {
            let hint = if app.session.is_playing() {
                " Playing: pick two tiles that belong together "
            } else {
                " Ready "
            };
            (hint, "", Color::DarkGray)
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_help<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let start_label = if app.session.is_playing() {
        "restart"
    } else {
        "start"
    };
    let help_text = format!(
        "q: Quit | s: {start_label} | c: Continue | ←↑↓→ + Enter: Pick | +/-: Pairs | i: Import | t: Title"
    );

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_round_complete(f: &mut Frame, elapsed_seconds: u64) {
    let area = centered_rect(50, 7, f.area());
    let content = vec![
        Line::from(Span::styled(
            "🎉 Round cleared! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Time: {}", format_elapsed(elapsed_seconds))),
        Line::from(""),
        Line::from("c: Continue | ESC: Close | q: Quit"),
    ];

    let modal = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

/// Rectangle of `width_percent` width and `height` rows centered in `area`
fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(width_percent.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
