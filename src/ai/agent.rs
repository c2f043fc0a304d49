use crate::game::{Disk, GameState, Position};

/// Universal interface for move selection.
///
/// The driver asks the active side's agent for a placement drawn from the
/// legal moves. Manual sides are driven by keyboard input instead and never
/// consult an agent.
pub trait PlayerAgent {
    /// Choose a placement for `side`, or `None` when `side` has no legal
    /// move. Passing is resolved by the turn state machine, not the agent.
    fn choose_move(&mut self, state: &GameState, side: Disk) -> Option<Position>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
