//! The agent: a position on the board plus an unbounded pocket.
//!
//! The agent owns its board, which is also what makes "exactly one agent per
//! board" hold by construction. The pocket is a bare count: the agent cannot
//! tell its carried tokens apart, only how many it holds.

use crate::board::{Board, Direction};

pub struct Agent {
    board: Board,
    carried: usize,
}

impl Agent {
    pub fn new(board: Board) -> Agent {
        Agent { board, carried: 0 }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// How many tokens are in the pocket.
    #[inline]
    pub fn carried(&self) -> usize {
        self.carried
    }

    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.carried > 0
    }

    #[inline]
    pub fn current_cell_has_token(&self) -> bool {
        self.board.agent_cell().has_token()
    }

    /// One step in `direction`. `false` (and no change) at a grid edge.
    pub fn step(&mut self, direction: Direction) -> bool {
        self.board.step(direction)
    }

    /// Take the token under the agent into the pocket. `false` (and no
    /// change) when the current cell holds none.
    pub fn pick_up(&mut self) -> bool {
        if !self.board.lift_token() {
            return false;
        }
        self.carried += 1;
        true
    }

    /// Place one pocket token on the current cell. `false` (and no change)
    /// when the cell is occupied or the pocket is empty.
    pub fn put_down(&mut self) -> bool {
        if self.carried == 0 {
            return false;
        }
        if !self.board.drop_token() {
            return false;
        }
        self.carried -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Agent;
    use crate::board::{Board, Cell, Direction};

    #[test]
    fn pick_up_then_put_down_restores_cell_and_pocket() {
        let mut agent = Agent::new(Board::from_heights(&[1]));
        assert_eq!(agent.board().agent_cell(), Cell::Combo);

        assert!(agent.pick_up());
        assert_eq!(agent.carried(), 1);
        assert_eq!(agent.board().agent_cell(), Cell::Agent);

        assert!(agent.put_down());
        assert_eq!(agent.carried(), 0);
        assert_eq!(agent.board().agent_cell(), Cell::Combo);
    }

    #[test]
    fn pick_up_fails_on_bare_ground() {
        let mut agent = Agent::new(Board::from_heights(&[1]));
        assert!(agent.pick_up());
        assert!(!agent.pick_up());
        assert_eq!(agent.carried(), 1);
    }

    #[test]
    fn put_down_fails_on_occupied_cell() {
        let mut agent = Agent::new(Board::from_heights(&[1, 1]));
        assert!(agent.pick_up());
        assert!(agent.step(Direction::Outward));
        // (0, 1) already holds a token; the pocket stays full.
        assert!(!agent.put_down());
        assert_eq!(agent.carried(), 1);
    }

    #[test]
    fn put_down_fails_on_empty_pocket() {
        let mut agent = Agent::new(Board::from_heights(&[1]));
        assert!(agent.step(Direction::Up));
        assert!(!agent.put_down());
        assert_eq!(agent.board().board_tokens(), 1);
    }
}
