//! In-place terminal rendering of the board between micro-steps.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crossterm::{cursor, queue, terminal};

use crate::board::Board;

/// Redraws the board over itself each frame so the run animates in place
/// instead of scrolling, then sleeps the configured per-step delay.
pub struct LiveFrame {
    out: Stdout,
    delay: Duration,
    drawn_lines: u16,
}

impl LiveFrame {
    pub fn new(delay: Duration) -> LiveFrame {
        LiveFrame {
            out: io::stdout(),
            delay,
            drawn_lines: 0,
        }
    }

    /// Draw one frame over the previous one and pace the animation.
    pub fn draw(&mut self, board: &Board) -> io::Result<()> {
        if self.drawn_lines > 0 {
            queue!(self.out, cursor::MoveUp(self.drawn_lines))?;
        }
        let mut lines = 0u16;
        for line in board.to_string().lines() {
            queue!(
                self.out,
                terminal::Clear(terminal::ClearType::CurrentLine)
            )?;
            writeln!(self.out, "{line}")?;
            lines += 1;
        }
        self.out.flush()?;
        self.drawn_lines = lines;

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}
