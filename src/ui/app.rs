use crate::config::UiConfig;
use crate::game::{Board, GameEngine, GameMode, OutcomeReporter, COLS};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use log::debug;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

use super::game_view::{self, View};

/// Modal end-of-game notice. The engine reports into it; the app keeps it
/// open until the player acknowledges it.
#[derive(Debug, Default)]
pub struct GameOverDialog {
    message: Option<String>,
}

impl GameOverDialog {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    fn dismiss(&mut self) {
        self.message = None;
    }
}

impl OutcomeReporter for GameOverDialog {
    fn report_outcome(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }
}

pub struct App {
    engine: GameEngine,
    dialog: GameOverDialog,
    /// Board as it stood when the last game ended, shown under the dialog.
    final_board: Option<Board>,
    selected_column: usize,
    board_area: Rect,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(engine: GameEngine, config: &UiConfig) -> Self {
        App {
            engine,
            dialog: GameOverDialog::default(),
            final_board: None,
            selected_column: config.initial_column.min(COLS - 1),
            board_area: Rect::default(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn dialog(&self) -> &GameOverDialog {
        &self.dialog
    }

    /// Handle terminal events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if self.close_dialog() {
            return;
        }
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.play_column(self.selected_column);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_column(self.selected_column);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.new_game(GameMode::SinglePlayer);
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.new_game(GameMode::TwoPlayer);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.close_dialog() {
            return;
        }
        if let Some(column) = game_view::column_at(self.board_area, mouse.column, mouse.row) {
            self.message = None;
            self.selected_column = column;
            self.play_column(column);
        }
    }

    /// Returns true if a dialog was open and has now been closed.
    fn close_dialog(&mut self) -> bool {
        if !self.dialog.is_open() {
            return false;
        }
        self.dialog.dismiss();
        self.final_board = None;
        true
    }

    fn new_game(&mut self, mode: GameMode) {
        self.engine.start_new_game(mode);
        self.message = Some(format!("New game: {}", mode.label()));
    }

    /// Play `column` for the human, then let the turn advance.
    fn play_column(&mut self, column: usize) {
        if !self.engine.play_at(column as i32) {
            // Full or off-board columns are ignored.
            return;
        }
        if self.check_game_end() {
            return;
        }
        self.engine.advance_turn();
        self.check_game_end();
    }

    fn check_game_end(&mut self) -> bool {
        let board = *self.engine.board();
        if self.engine.check_and_handle_game_end(&mut self.dialog) {
            debug!("showing game-over dialog");
            self.final_board = Some(board);
            true
        } else {
            false
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let view = View {
            engine: &self.engine,
            board: self.final_board.as_ref().unwrap_or(self.engine.board()),
            selected_column: self.selected_column,
            message: self.message.as_deref(),
            dialog: self.dialog.message(),
        };
        self.board_area = game_view::render(frame, &view);
    }
}
