//! # tui-reversi
//!
//! A two-player Reversi game for the terminal. The crate is split into the
//! rules engine and persisted-state model, and a thin Ratatui driver that
//! holds one game, feeds it moves, and saves it after every change.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: disks, board, rules engine, turn state machine
//! - [`ai`] — Player agent boundary and the uniform-random agent
//! - [`save`] — Text serialization and the single save slot
//! - [`ui`] — Terminal UI: event loop and rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod save;
pub mod ui;
