use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;
use crate::game::Board;

/// An agent that selects uniformly at random from the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent, for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Option<usize> {
        // Sampling from the explicit list keeps the cost fixed when the board is nearly full.
        let open = board.open_columns();
        if open.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..open.len());
        Some(open[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS, ROWS};

    #[test]
    fn test_random_agent_selects_open_column() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        for col in [0, 2, 4] {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        let open = board.open_columns();

        for _ in 0..100 {
            let action = agent.select_action(&board).unwrap();
            assert!(open.contains(&action), "Action {} is not open", action);
        }
    }

    #[test]
    fn test_random_agent_covers_all_columns() {
        let mut agent = RandomAgent::with_seed(7);
        let board = Board::new();
        let mut seen = [false; COLS];
        for _ in 0..500 {
            seen[agent.select_action(&board).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_agent_full_board() {
        let mut agent = RandomAgent::with_seed(1);
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Yellow).unwrap();
            }
        }
        assert_eq!(agent.select_action(&board), None);
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.select_action(&board), b.select_action(&board));
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
