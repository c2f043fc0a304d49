use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::PlayerAgent;
use crate::game::{Disk, GameState, Position};

/// An agent that selects uniformly at random from the legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerAgent for RandomAgent {
    fn choose_move(&mut self, state: &GameState, side: Disk) -> Option<Position> {
        let moves = state.valid_moves(side);
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, PlayerMode};

    #[test]
    fn test_random_agent_selects_legal_moves() {
        let mut agent = RandomAgent::new();
        let state = GameState::initial();
        let legal = state.valid_moves(Disk::Dark);

        for _ in 0..100 {
            let pos = agent.choose_move(&state, Disk::Dark).unwrap();
            assert!(legal.contains(&pos), "move {:?} is not legal", pos);
        }
    }

    #[test]
    fn test_random_agent_returns_none_without_moves() {
        let mut agent = RandomAgent::new();
        let state = GameState::from_parts(
            Some(Disk::Light),
            PlayerMode::Manual,
            PlayerMode::Manual,
            Board::empty(4, 4),
        );
        assert_eq!(agent.choose_move(&state, Disk::Light), None);
    }

    #[test]
    fn test_random_agent_plays_a_full_game() {
        let mut agent = RandomAgent::new();
        let mut state = GameState::initial();

        while let Some(side) = state.turn() {
            let pos = agent
                .choose_move(&state, side)
                .expect("the side to move always has a legal move");
            state = state.apply_move(pos).unwrap().state;
            state.advance_turn();
        }

        assert!(state.is_terminal());
        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
