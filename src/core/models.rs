use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Empty,
    Wall,
    Rock,
    Undead,
    Girl,
    Helltaker,
    Key,
    Lock,
    CodeUnderRock,
    Code,
    KeyUnderRock,
}

/// Per-cell hazard phase, kept on a board parallel to the cell grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Spike {
    None,
    /// Dangerous this turn; retracts on the next successful move.
    Up,
    /// Safe this turn; rises on the next successful move.
    Down,
    /// Dangerous every turn.
    Always,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
}

/// One fully self-contained game snapshot. Transitions never mutate a
/// snapshot in place; `step` clones first and returns the clone.
#[derive(Clone, Debug)]
pub struct Level {
    pub grid: Vec<Vec<Cell>>,
    pub spikes: Vec<Vec<Spike>>,
    /// Always points at the unique `Cell::Helltaker` in `grid`.
    pub helltaker: Vec2,
    pub moves_left: i32,
    pub has_key: bool,
    pub has_code: bool,
    /// True iff the initial grid contained any `CodeUnderRock`; constant for
    /// the whole lineage of snapshots derived from one loaded level.
    pub needs_code: bool,
    /// Shared across all descendant snapshots, never mutated.
    pub objectives: Rc<Vec<Vec2>>,
}

// Node identity for the search: exactly (grid, spikes, moves_left, has_key,
// has_code). The actor position is derivable from the grid and the
// objectives are shared per lineage, so neither participates.
impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.moves_left == other.moves_left
            && self.has_key == other.has_key
            && self.has_code == other.has_code
            && self.grid == other.grid
            && self.spikes == other.spikes
    }
}

impl Eq for Level {}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
        self.spikes.hash(state);
        self.moves_left.hash(state);
        self.has_key.hash(state);
        self.has_code.hash(state);
    }
}

#[derive(Debug)]
pub enum GameUpdate {
    NextState(Level, GameChangeType),
    Illegal(IllegalMove),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    /// A rock or creature was displaced one cell further along the move.
    Push,
    /// A creature in the destination cell was removed; the actor stayed put.
    Crush,
}

/// Why a requested move could not be applied. The search treats every
/// variant as a non-fatal skip signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalMove {
    Terminal,
    OutOfBounds,
    Wall,
    Girl,
    Locked,
    BlockedPush,
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            IllegalMove::Terminal => "the game is already over",
            IllegalMove::OutOfBounds => "cannot move out of bounds",
            IllegalMove::Wall => "cannot walk into a wall",
            IllegalMove::Girl => "cannot walk into the girl",
            IllegalMove::Locked => "the door is locked",
            IllegalMove::BlockedPush => "cannot push the rock",
        };
        f.write_str(reason)
    }
}
