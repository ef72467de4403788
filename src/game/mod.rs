//! Core Connect Four game logic: board representation, players, and the
//! engine that applies moves, runs the computer turn and detects the end of a
//! game.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, CellValue, COLS, ROWS};
pub use engine::{GameEngine, GameMode, Outcome, OutcomeReporter, RestartPolicy, TIE_MESSAGE};
pub use player::Player;
