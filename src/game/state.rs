use std::cmp::Ordering;

use super::board::{Board, Position};
use super::disk::Disk;
use super::player::PlayerMode;

/// Scan directions for the flip search: the 8 compass neighbours.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The target is occupied, off the board, or flips nothing.
    IllegalMove,
    /// The game has ended; no further moves can be applied.
    GameOver,
}

/// What [`GameState::advance_turn`] resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAdvance {
    /// The opposite side has a legal move and is now to play.
    Next(Disk),
    /// The opposite side has no legal move and passes; the turn stays with
    /// the side that just moved.
    Passed(Disk),
    /// Neither side has a legal move; the game is over.
    Finished,
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Disk),
    Draw,
}

/// A successfully applied move: the successor state and the disks the
/// placement flipped, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub state: GameState,
    pub flipped: Vec<Position>,
}

/// The complete state of one game: whose turn it is, how each side is
/// controlled, and the board.
///
/// `turn == None` is the only end-of-game signal; the winner is derived on
/// demand from the disk counts. Applying a move produces a whole new state,
/// and only the turn field mutates in place, via [`GameState::advance_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    turn: Option<Disk>,
    dark_mode: PlayerMode,
    light_mode: PlayerMode,
    board: Board,
}

impl GameState {
    /// A fresh game on the standard 8x8 opening: dark to move, both sides
    /// manual.
    pub fn initial() -> Self {
        GameState::from_parts(
            Some(Disk::Dark),
            PlayerMode::Manual,
            PlayerMode::Manual,
            Board::standard(),
        )
    }

    /// Assemble a state from its parts — a decoded save, or a board
    /// snapshot.
    pub fn from_parts(
        turn: Option<Disk>,
        dark_mode: PlayerMode,
        light_mode: PlayerMode,
        board: Board,
    ) -> Self {
        GameState {
            turn,
            dark_mode,
            light_mode,
            board,
        }
    }

    /// The side to move, or `None` once the game has ended.
    pub fn turn(&self) -> Option<Disk> {
        self.turn
    }

    /// Get reference to board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Check if game is over.
    pub fn is_terminal(&self) -> bool {
        self.turn.is_none()
    }

    /// How `side` is controlled.
    pub fn mode(&self, side: Disk) -> PlayerMode {
        match side {
            Disk::Dark => self.dark_mode,
            Disk::Light => self.light_mode,
        }
    }

    /// Change how `side` is controlled.
    pub fn set_mode(&mut self, side: Disk, mode: PlayerMode) {
        match side {
            Disk::Dark => self.dark_mode = mode,
            Disk::Light => self.light_mode = mode,
        }
    }

    /// The disks `disk` would flip when placed at `pos`.
    ///
    /// Empty when `pos` is occupied or off the board. Each direction
    /// contributes its run of opposite-colour cells only if the run is
    /// non-empty and ends at a disk of the placed colour; a run cut short by
    /// an empty cell or the board edge contributes nothing.
    pub fn flips_for_move(&self, disk: Disk, pos: Position) -> Vec<Position> {
        let (x, y) = (pos.x as isize, pos.y as isize);
        if !self.board.in_range(x, y) || self.board.disk_at(x, y).is_some() {
            return Vec::new();
        }

        let mut flipped = Vec::new();
        for (dx, dy) in DIRECTIONS {
            let mut run = Vec::new();
            let (mut cx, mut cy) = (x + dx, y + dy);
            loop {
                match self.board.disk_at(cx, cy) {
                    Some(d) if d == disk.flipped() => {
                        run.push(Position::new(cx as usize, cy as usize));
                    }
                    Some(_) => {
                        flipped.append(&mut run);
                        break;
                    }
                    None => break,
                }
                cx += dx;
                cy += dy;
            }
        }
        flipped
    }

    /// Whether placing `disk` at `pos` is legal. A placement must flip at
    /// least one disk; an empty cell with zero flips is still illegal.
    pub fn can_place(&self, disk: Disk, pos: Position) -> bool {
        !self.flips_for_move(disk, pos).is_empty()
    }

    /// Every legal placement for `side`, row-major.
    pub fn valid_moves(&self, side: Disk) -> Vec<Position> {
        self.board
            .positions()
            .filter(|&pos| self.can_place(side, pos))
            .collect()
    }

    /// Place the current side's disk at `pos` and flip the captured runs.
    ///
    /// Returns the successor state together with the flipped coordinates;
    /// `self` is untouched, also on error. The caller resolves what happens
    /// next by calling [`GameState::advance_turn`] on the successor.
    pub fn apply_move(&self, pos: Position) -> Result<AppliedMove, MoveError> {
        let disk = self.turn.ok_or(MoveError::GameOver)?;
        let flipped = self.flips_for_move(disk, pos);
        if flipped.is_empty() {
            return Err(MoveError::IllegalMove);
        }

        let mut next = self.clone();
        next.board.set_disk(pos, Some(disk));
        for &flip in &flipped {
            next.board.set_disk(flip, Some(disk));
        }
        Ok(AppliedMove {
            state: next,
            flipped,
        })
    }

    /// Resolve whose turn comes next.
    ///
    /// Hands the turn to the opposite side when it can move; keeps the turn
    /// when only the current side can, reporting the pass so the caller can
    /// announce it before the same side moves again; ends the game when
    /// neither side can. A finished game stays finished.
    pub fn advance_turn(&mut self) -> TurnAdvance {
        let Some(current) = self.turn else {
            return TurnAdvance::Finished;
        };
        let next = current.flipped();
        if !self.valid_moves(next).is_empty() {
            self.turn = Some(next);
            TurnAdvance::Next(next)
        } else if !self.valid_moves(current).is_empty() {
            TurnAdvance::Passed(next)
        } else {
            self.turn = None;
            TurnAdvance::Finished
        }
    }

    /// Count one side's disks on the board.
    pub fn count_disks(&self, side: Disk) -> usize {
        self.board.count_disks(side)
    }

    /// The side holding the majority of disks, or `None` on equal counts.
    pub fn side_with_more_disks(&self) -> Option<Disk> {
        let dark = self.count_disks(Disk::Dark);
        let light = self.count_disks(Disk::Light);
        match dark.cmp(&light) {
            Ordering::Greater => Some(Disk::Dark),
            Ordering::Less => Some(Disk::Light),
            Ordering::Equal => None,
        }
    }

    /// Get game outcome if game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_terminal() {
            return None;
        }
        Some(match self.side_with_more_disks() {
            Some(side) => GameOutcome::Winner(side),
            None => GameOutcome::Draw,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
