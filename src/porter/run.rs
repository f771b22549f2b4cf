//! The row-by-row redistribution protocol.
//!
//! The orchestrator drives the agent through a fixed macro-sequence: locate
//! the outer edge of the ground row, then per row going up, collect every
//! token on the row into the pocket, re-locate the outer edge one row below,
//! and deposit the pocket back against that edge. A row that yields nothing
//! ends the run.
//!
//! An observer hook fires once before the run and after every successful
//! primitive, so an external renderer sees each micro-step. Only successful
//! moves count toward the reported step total.

use crate::board::{Board, Direction};

use super::agent::Agent;

pub struct Redistributor {
    agent: Agent,
    steps: u64,
}

impl Redistributor {
    pub fn new(agent: Agent) -> Redistributor {
        Redistributor { agent, steps: 0 }
    }

    #[inline]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.agent.board()
    }

    /// Successful moves accumulated by the last `run`.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Drive the protocol to completion.
    pub fn run(&mut self, mut observe: impl FnMut(&Board)) {
        self.steps = 0;
        observe(self.agent.board());

        self.walk_to_outer_edge(&mut observe);
        self.walk_up(&mut observe);

        loop {
            if !self.collect_inward(&mut observe) {
                // This row held nothing: the redistribution is done.
                break;
            }
            self.walk_down(&mut observe);
            self.walk_to_outer_edge(&mut observe);
            self.walk_up(&mut observe);
            self.deposit_inward(&mut observe);
            self.walk_to_outer_edge(&mut observe);
            self.walk_up(&mut observe);
        }
    }

    /// One counted step; fires the observer only on success.
    fn advance<F: FnMut(&Board)>(&mut self, direction: Direction, observe: &mut F) -> bool {
        if !self.agent.step(direction) {
            return false;
        }
        self.steps += 1;
        observe(self.agent.board());
        true
    }

    /// Land on the last cell of the first token run found scanning outward:
    /// skip a leading gap, cross the run, then one step back inward.
    ///
    /// This assumes the row's tokens form a single run; tokens past an
    /// interior gap are not reached, and with unsorted column heights such
    /// rows exist (see DESIGN.md).
    fn walk_to_outer_edge<F: FnMut(&Board)>(&mut self, observe: &mut F) {
        while !self.agent.current_cell_has_token() {
            if !self.advance(Direction::Outward, observe) {
                break;
            }
        }
        while self.agent.current_cell_has_token() {
            if !self.advance(Direction::Outward, observe) {
                break;
            }
        }
        self.advance(Direction::Inward, observe);
    }

    fn walk_up<F: FnMut(&Board)>(&mut self, observe: &mut F) {
        self.advance(Direction::Up, observe);
    }

    fn walk_down<F: FnMut(&Board)>(&mut self, observe: &mut F) {
        self.advance(Direction::Down, observe);
    }

    /// Sweep the row down to column 0, pocketing every token on the way.
    /// Returns whether the pocket holds anything afterwards.
    fn collect_inward<F: FnMut(&Board)>(&mut self, observe: &mut F) -> bool {
        loop {
            if self.agent.pick_up() {
                observe(self.agent.board());
            }
            if !self.advance(Direction::Inward, observe) {
                break;
            }
        }
        self.agent.is_carrying()
    }

    /// Drop pocket tokens on consecutive cells working inward. Stops at the
    /// first failed drop (occupied cell or empty pocket) and steps back
    /// outward once.
    fn deposit_inward<F: FnMut(&Board)>(&mut self, observe: &mut F) {
        loop {
            if self.agent.put_down() {
                observe(self.agent.board());
            } else {
                self.advance(Direction::Outward, observe);
                break;
            }
            self.advance(Direction::Inward, observe);
        }
    }
}
