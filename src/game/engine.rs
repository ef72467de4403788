use log::{debug, info, trace, warn};

use super::board::{Board, CellValue, COLS};
use super::player::Player;
use crate::ai::{Agent, RandomAgent};
use crate::error::MoveError;

/// Message reported when the board fills up without a winner.
pub const TIE_MESSAGE: &str = "All spots filled, start a new game.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Human plays Red, the computer answers as Yellow.
    #[default]
    SinglePlayer,
    TwoPlayer,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "1 Player vs Computer",
            GameMode::TwoPlayer => "2 Players",
        }
    }
}

/// Which mode a finished game restarts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    /// Keep the mode of the game that just ended.
    #[default]
    SameMode,
    /// Always fall back to a single-player game.
    SinglePlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Tie,
}

impl Outcome {
    /// Human-readable result, or `None` while the game is still going.
    pub fn message(self) -> Option<String> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win(player) => Some(format!("{} wins!", player.name())),
            Outcome::Tie => Some(TIE_MESSAGE.to_string()),
        }
    }
}

/// Receives the end-of-game message from [`GameEngine::check_and_handle_game_end`].
pub trait OutcomeReporter {
    fn report_outcome(&mut self, message: &str);
}

/// The single live game: board, turn state and the computer opponent.
pub struct GameEngine {
    board: Board,
    current_player: Player,
    last_mover: Option<Player>,
    mode: GameMode,
    restart: RestartPolicy,
    computer: Box<dyn Agent>,
}

impl GameEngine {
    /// Create an engine with a fresh game and an unseeded random computer player.
    pub fn new(mode: GameMode) -> Self {
        Self::with_agent(mode, Box::new(RandomAgent::new()))
    }

    pub fn with_agent(mode: GameMode, computer: Box<dyn Agent>) -> Self {
        let mut engine = GameEngine {
            board: Board::new(),
            current_player: Player::Red,
            last_mover: None,
            mode,
            restart: RestartPolicy::default(),
            computer,
        };
        engine.start_new_game(mode);
        engine
    }

    pub fn with_restart_policy(mut self, restart: RestartPolicy) -> Self {
        self.restart = restart;
        self
    }

    /// Discard the current game and start an empty one. Red moves first.
    pub fn start_new_game(&mut self, mode: GameMode) {
        self.board = Board::new();
        self.current_player = Player::Red; // Red starts
        self.last_mover = None;
        self.mode = mode;
        info!("new game: {} (computer: {})", mode.label(), self.computer.name());
    }

    /// Cell contents at `(column, row)`, row 0 being the top.
    pub fn cell_at(&self, column: i32, row: i32) -> CellValue {
        self.board.cell_at(column, row)
    }

    /// Drop the current player's piece in `column`.
    ///
    /// Returns `false` without touching the board when the column is off the
    /// board or full. The turn is not advanced.
    pub fn play_at(&mut self, column: i32) -> bool {
        if column < 0 || column as usize >= COLS {
            debug!("rejected move: column {column} is off the board");
            return false;
        }
        match self.place(column as usize, self.current_player) {
            Ok(_) => true,
            Err(err) => {
                debug!("rejected move: {err}");
                false
            }
        }
    }

    /// Hand the turn over.
    ///
    /// Two-player games flip the current player. Single-player games let the
    /// computer drop a Yellow piece instead, unless the board is full.
    pub fn advance_turn(&mut self) {
        match self.mode {
            GameMode::TwoPlayer => {
                self.current_player = self.current_player.other();
                debug!("turn passes to {}", self.current_player.name());
            }
            GameMode::SinglePlayer => {
                if self.board.is_full() {
                    return;
                }
                let Some(column) = self.computer.select_action(&self.board) else {
                    return;
                };
                if let Err(err) = self.place(column, Player::COMPUTER) {
                    warn!("{} picked an unplayable column: {err}", self.computer.name());
                }
            }
        }
    }

    /// Scan the board for the player who moved last.
    ///
    /// A win takes precedence over a full board.
    pub fn evaluate_outcome(&self) -> Outcome {
        let player = self.last_mover.unwrap_or(self.current_player);
        if self.board.has_four(player.to_cell()) {
            Outcome::Win(player)
        } else if self.board.is_full() {
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }

    /// Report and reset if the game is over. Returns `true` when it was.
    pub fn check_and_handle_game_end(&mut self, reporter: &mut dyn OutcomeReporter) -> bool {
        let outcome = self.evaluate_outcome();
        let Some(message) = outcome.message() else {
            return false;
        };

        info!("game over: {message}");
        trace!("final board:\n{}", self.board);
        reporter.report_outcome(&message);

        let next_mode = match self.restart {
            RestartPolicy::SameMode => self.mode,
            RestartPolicy::SinglePlayer => GameMode::SinglePlayer,
        };
        self.start_new_game(next_mode);
        true
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn free_spots(&self) -> usize {
        self.board.free_spots()
    }

    pub fn column_count(&self, column: usize) -> usize {
        self.board.height(column)
    }

    pub fn open_columns(&self) -> Vec<usize> {
        self.board.open_columns()
    }

    fn place(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        let row = self.board.drop_piece(column, player.to_cell())?;
        self.last_mover = Some(player);
        debug!("{} plays column {column} (row {row})", player.name());
        trace!("board:\n{}", self.board);
        Ok(row)
    }
}
