use crate::game::Board;

/// Interface for computer players.
pub trait Agent {
    /// Select a column for the next piece.
    ///
    /// Must return an open column, or `None` when the board has none left.
    fn select_action(&mut self, board: &Board) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
