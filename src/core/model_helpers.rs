use crate::core::{Cell, Direction, Level, Spike, UserAction, Vec2};

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + other.i,
            j: self.j + other.j,
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    pub fn arrow(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }
}

impl UserAction {
    pub fn all_actions() -> Vec<UserAction> {
        Direction::ALL.iter().map(|&d| UserAction::Move(d)).collect()
    }
}

impl Level {
    pub fn height(&self) -> i32 {
        self.grid.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.grid.is_empty() {
            0
        } else {
            self.grid[0].len() as i32
        }
    }

    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.i >= 0 && pos.i < self.height() && pos.j >= 0 && pos.j < self.width()
    }

    pub fn cell(&self, pos: Vec2) -> Cell {
        self.grid[pos.i as usize][pos.j as usize]
    }

    pub fn set_cell(&mut self, pos: Vec2, cell: Cell) {
        self.grid[pos.i as usize][pos.j as usize] = cell;
    }

    pub fn spike(&self, pos: Vec2) -> Spike {
        self.spikes[pos.i as usize][pos.j as usize]
    }

    pub fn is_goal(&self) -> bool {
        let on_objective = self.objectives.contains(&self.helltaker);
        if self.needs_code {
            self.has_code && on_objective
        } else {
            on_objective
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.moves_left <= 0 || self.is_goal()
    }
}
