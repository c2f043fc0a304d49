//! Core Reversi game logic: disk and board representation, player control
//! modes, and the rules engine with its turn state machine.

mod board;
mod disk;
mod player;
mod state;

pub use board::{Board, Position};
pub use disk::Disk;
pub use player::PlayerMode;
pub use state::{AppliedMove, GameOutcome, GameState, MoveError, TurnAdvance};
