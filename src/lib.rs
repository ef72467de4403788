//! # Connect Four
//!
//! Connect Four in the terminal, either against a computer that plays random
//! open columns or between two players sharing the keyboard and mouse. The
//! terminal UI is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, and the game engine
//! - [`ai`] — Computer players
//! - [`ui`] — Terminal UI: board view, input mapping, game-over popup
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File logger behind the `log` facade
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
