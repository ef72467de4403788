//! Terminal UI: renders the engine's board, turns key presses and mouse
//! clicks into columns, and shows the game-over popup.

mod app;
pub mod game_view;

pub use app::{App, GameOverDialog};
