//! TUI (Terminal User Interface) module for the word narrower
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! - Rounds: every submitted known string as coloured tiles, followed by the
//!   eliminated letters of that round
//! - Input: the two feedback fields, the active one highlighted
//! - Information: per-pass counts, suggestion, alternatives and solutions
//!
//! # State Machine
//! `EnteringEliminated` → `EnteringKnown` → back to `EnteringEliminated` once
//! the round has been displayed.

use crate::engine::{FilterPass, UNKNOWN};
use crate::game_state::{GameInterface, UserInput, WelcomeInfo};
use crate::session::RoundReport;
use crate::{cli, debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const BOARD_HEIGHT: u16 = 10;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const ACTIVE_FIELD_STYLE: Style = Style::new().fg(Color::Black).bg(Color::White);

#[derive(Clone, Copy, PartialEq, Debug)]
enum HintState {
    Unknown,
    Correct,
    Misplaced,
}

impl HintState {
    fn of(hint: char) -> Self {
        if hint == UNKNOWN {
            Self::Unknown
        } else if hint.is_uppercase() {
            Self::Correct
        } else {
            Self::Misplaced
        }
    }

    fn colors(self) -> (Color, Color) {
        match self {
            Self::Unknown => (Color::DarkGray, Color::White),
            Self::Correct => (Color::Green, Color::Black),
            Self::Misplaced => (Color::Yellow, Color::Black),
        }
    }
}

/// One submitted round as shown on the board.
#[derive(Debug, Clone)]
struct RoundRow {
    eliminated: String,
    known: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    EnteringEliminated,
    EnteringKnown,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    rounds: &'a [RoundRow],
    eliminated_input: &'a str,
    known_input: &'a str,
    word_length: usize,
    state: TuiState,
    report: Option<&'a (RoundReport, usize)>,
    welcome: &'a [String],
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    rounds: Vec<RoundRow>,
    eliminated_input: String,
    known_input: String,
    pending_eliminated: String,
    pending_known: String,
    word_length: usize,
    state: TuiState,
    report: Option<(RoundReport, usize)>,
    welcome: Vec<String>,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            rounds: Vec::new(),
            eliminated_input: String::new(),
            known_input: String::new(),
            pending_eliminated: String::new(),
            pending_known: String::new(),
            word_length: crate::game_state::DEFAULT_WORD_LENGTH,
            state: TuiState::EnteringEliminated,
            report: None,
            welcome: Vec::new(),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            rounds: &self.rounds,
            eliminated_input: &self.eliminated_input,
            known_input: &self.known_input,
            word_length: self.word_length,
            state: self.state,
            report: self.report.as_ref(),
            welcome: &self.welcome,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(BOARD_HEIGHT), // Rounds so far
                Constraint::Length(4),            // Feedback fields
                Constraint::Min(8),               // Info panel
                Constraint::Length(3),            // Status line
                Constraint::Length(3),            // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.rounds);
        Self::render_inputs(f, chunks[2], ctx);
        Self::render_info(f, chunks[3], ctx);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE NARROWER")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, rounds: &[RoundRow]) {
        let block = Block::default().title("Rounds").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        // Most recent rounds win when the board is full
        let visible = inner.height as usize;
        let skip = rounds.len().saturating_sub(visible);
        let lines: Vec<Line> = rounds.iter().skip(skip).map(Self::round_line).collect();
        f.render_widget(Paragraph::new(lines), inner);
    }

    fn round_line(round: &RoundRow) -> Line<'static> {
        let mut spans = vec![Span::raw("  ")];
        for hint in round.known.chars() {
            let (bg_color, fg_color) = HintState::of(hint).colors();
            spans.push(Span::styled(
                format!(" {} ", hint.to_ascii_uppercase()),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }
        if !round.eliminated.is_empty() {
            spans.push(Span::styled(
                format!("  eliminated: {}", round.eliminated),
                Style::default().fg(Color::Gray),
            ));
        }
        Line::from(spans)
    }

    fn render_inputs(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let field = |label: &str, value: &str, active: bool| {
            let style = if active {
                ACTIVE_FIELD_STYLE
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(format!("{label:<12}")),
                Span::styled(format!(" {value} "), style),
            ])
        };
        let known_placeholder;
        let known = if ctx.known_input.is_empty() && ctx.state != TuiState::EnteringKnown {
            known_placeholder = UNKNOWN.to_string().repeat(ctx.word_length);
            known_placeholder.as_str()
        } else {
            ctx.known_input
        };
        let lines = vec![
            field(
                "Eliminated:",
                ctx.eliminated_input,
                ctx.state == TuiState::EnteringEliminated,
            ),
            field("Known:", known, ctx.state == TuiState::EnteringKnown),
        ];
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Feedback").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn pass_label(pass: FilterPass) -> &'static str {
        match pass {
            FilterPass::EliminatedLetters => "Eliminated letters",
            FilterPass::KnownLetters => "Known letters",
            FilterPass::CorrectPosition => "Correct positions",
            FilterPass::WrongPosition => "Wrong positions",
        }
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some((report, guesses_remaining)) = ctx.report {
            for filter in &report.filters {
                lines.push(Line::from(format!(
                    "{:<20} eliminated {:>5}  remaining {:>5}",
                    Self::pass_label(filter.pass),
                    filter.eliminated,
                    filter.remaining
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled(
                format!(
                    "Suggested Guess: {}",
                    report.suggestion.best.as_deref().unwrap_or("-")
                ),
                SUCCESS_STYLE,
            )]));
            lines.push(Line::from(format!(
                "Alternatives: {}",
                cli::format_word_list(&report.suggestion.alternatives)
            )));
            lines.push(Line::from(format!("Guesses Remaining: {guesses_remaining}")));
            lines.push(Line::from(""));

            if let Some(solutions) = &report.solutions {
                lines.push(Line::from(vec![Span::styled(
                    format!("Possible Solutions ({}):", solutions.len()),
                    INFO_STYLE,
                )]));
                for word in solutions {
                    lines.push(Line::from(format!("  {word}")));
                }
            } else {
                lines.push(Line::from(vec![Span::styled(
                    format!("Candidates remaining: {}", report.remaining),
                    INFO_STYLE,
                )]));
            }
            lines.push(Line::from(""));
        } else {
            for line in ctx.welcome {
                lines.push(Line::from(line.clone()));
            }
            if !ctx.welcome.is_empty() {
                lines.push(Line::from(""));
            }
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message,
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringEliminated => {
                "Type eliminated letters | ENTER: Next field | CTRL-N: New game | ESC: Quit"
            }
            TuiState::EnteringKnown => {
                "UPPER: correct spot | lower: wrong spot | *: unknown | ENTER: Submit | ESC: Quit"
            }
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserInput>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            debug_log!("handle_input() - Ignoring non-key event");
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Garbage from terminal focus changes shows up as replacement or control characters
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );

        if key.code == KeyCode::Esc {
            info_log!("handle_input() - ESC pressed, returning Exit");
            return Ok(Some(UserInput::Exit));
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('n') {
            info_log!("handle_input() - CTRL-N pressed, returning NewGame");
            return Ok(Some(UserInput::NewGame));
        }
        if Self::has_modifier_keys(&key) {
            return Ok(None);
        }

        Ok(match self.state {
            TuiState::EnteringEliminated => self.handle_eliminated_input(key),
            TuiState::EnteringKnown => self.handle_known_input(key),
        })
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_eliminated_input(&mut self, key: KeyEvent) -> Option<UserInput> {
        self.error_message.clear();
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.eliminated_input.push(c);
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.eliminated_input.pop();
            }
            KeyCode::Enter => {
                let letters = std::mem::take(&mut self.eliminated_input);
                info_log!("handle_eliminated_input() - Submitted '{}'", letters);
                self.pending_eliminated.clone_from(&letters);
                return Some(UserInput::Value(letters));
            }
            _ => {
                debug_log!("handle_eliminated_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_known_input(&mut self, key: KeyEvent) -> Option<UserInput> {
        self.error_message.clear();
        match key.code {
            KeyCode::Char(c) if c == UNKNOWN || c.is_ascii_alphabetic() => {
                if self.known_input.len() < self.word_length {
                    self.known_input.push(c);
                } else {
                    self.error_message =
                        format!("Known letters are exactly {} characters", self.word_length);
                }
            }
            KeyCode::Char(c) => {
                self.error_message =
                    format!("Only letters or {UNKNOWN} are allowed! ('{c}' is not valid)");
            }
            KeyCode::Backspace => {
                self.known_input.pop();
            }
            KeyCode::Enter
                if self.known_input.is_empty() || self.known_input.len() == self.word_length =>
            {
                let known = std::mem::take(&mut self.known_input);
                info_log!("handle_known_input() - Submitted '{}'", known);
                self.pending_known.clone_from(&known);
                return Some(UserInput::Value(known));
            }
            KeyCode::Enter => {
                self.error_message = format!(
                    "Known letters must be exactly {} characters!",
                    self.word_length
                );
            }
            _ => {
                debug_log!("handle_known_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn read_field(&mut self, state: TuiState) -> Option<UserInput> {
        self.state = state;
        loop {
            if self.draw().is_err() {
                info_log!("read_field() - Draw failed, returning Exit");
                return Some(UserInput::Exit);
            }
            match self.handle_input() {
                Ok(Some(input)) => return Some(input),
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_field() - Input error: {}", e);
                    return Some(UserInput::Exit);
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self, info: &WelcomeInfo) {
        self.word_length = info.word_length;
        self.welcome = cli::instructions(info.word_length).to_vec();
        self.message = format!(
            "Suggested Start: {} | Loaded {} words",
            info.start_word, info.word_count
        );
        self.status = "Ready - Enter the eliminated letters of your first guess".to_string();
        self.draw_or_log();
    }

    fn read_eliminated(&mut self) -> Option<UserInput> {
        self.read_field(TuiState::EnteringEliminated)
    }

    fn read_known(&mut self, word_length: usize) -> Option<UserInput> {
        self.word_length = word_length;
        self.status = "Enter known letters".to_string();
        self.read_field(TuiState::EnteringKnown)
    }

    fn display_round(&mut self, report: &RoundReport, guesses_remaining: usize) {
        self.rounds.push(RoundRow {
            eliminated: std::mem::take(&mut self.pending_eliminated),
            known: std::mem::take(&mut self.pending_known),
        });
        self.report = Some((report.clone(), guesses_remaining));
        self.message.clear();
        self.status = match &report.suggestion.best {
            Some(best) => format!("{} candidates remaining - try {best}", report.remaining),
            None => "No candidates remain. Check your inputs.".to_string(),
        };
        self.state = TuiState::EnteringEliminated;
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.rounds.clear();
        self.eliminated_input.clear();
        self.known_input.clear();
        self.pending_eliminated.clear();
        self.pending_known.clear();
        self.report = None;
        self.state = TuiState::EnteringEliminated;
        self.message = format!("New game started. Loaded {word_count} words.");
        self.status = "New game - Enter eliminated letters".to_string();
        self.error_message.clear();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_state_of() {
        assert_eq!(HintState::of('*'), HintState::Unknown);
        assert_eq!(HintState::of('U'), HintState::Correct);
        assert_eq!(HintState::of('o'), HintState::Misplaced);
    }

    #[test]
    fn test_round_line_tiles() {
        let round = RoundRow {
            eliminated: "adie".to_string(),
            known: "*Uo**".to_string(),
        };
        let line = TuiInterface::round_line(&round);
        // leading pad, 5 tiles each followed by a gap, then the eliminated letters
        assert_eq!(line.spans.len(), 12);
        assert_eq!(line.spans[3].content, " U ");
        assert_eq!(line.spans[5].content, " O ");
        assert_eq!(line.spans[11].content, "  eliminated: adie");
    }

    #[test]
    fn test_round_line_without_eliminated() {
        let round = RoundRow {
            eliminated: String::new(),
            known: "*****".to_string(),
        };
        assert_eq!(TuiInterface::round_line(&round).spans.len(), 11);
    }
}
