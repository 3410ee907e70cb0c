use std::path::Path;
use std::rc::Rc;

use crate::core::{Cell, Level, Spike, Vec2};

/// Fatal level-loading failures. None of these are recovered; they abort
/// whatever operation asked for the level.
#[derive(Debug)]
pub enum LevelError {
    Io(std::io::Error),
    MissingBudget,
    BadBudget(String),
    MissingSection(&'static str),
    BadCharacter {
        section: &'static str,
        row: usize,
        col: usize,
        ch: char,
    },
    NotRectangular {
        section: &'static str,
        row: usize,
    },
    DimensionMismatch(&'static str),
    MissingHelltaker,
    DuplicateHelltaker,
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Io(err) => write!(f, "cannot read level file: {}", err),
            LevelError::MissingBudget => write!(f, "level file does not start with a move budget"),
            LevelError::BadBudget(text) => write!(f, "invalid move budget {:?}", text),
            LevelError::MissingSection(name) => write!(f, "missing {:?} section", name),
            LevelError::BadCharacter {
                section,
                row,
                col,
                ch,
            } => write!(
                f,
                "unknown character {:?} in {} section at row {}, col {}",
                ch, section, row, col
            ),
            LevelError::NotRectangular { section, row } => write!(
                f,
                "{} section is not rectangular: row {} differs in width",
                section, row
            ),
            LevelError::DimensionMismatch(section) => write!(
                f,
                "{} section dimensions do not match the grid section",
                section
            ),
            LevelError::MissingHelltaker => write!(f, "level has no Helltaker cell"),
            LevelError::DuplicateHelltaker => write!(f, "level has more than one Helltaker cell"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LevelError {
    fn from(err: std::io::Error) -> Self {
        LevelError::Io(err)
    }
}

pub fn load_level(path: &Path) -> Result<Level, LevelError> {
    let text = std::fs::read_to_string(path)?;
    parse_level(&text)
}

/// Parses the plain-text level format: a move budget, then `grid`, `spikes`
/// and `objectives` sections, blank-line separated, all three of identical
/// dimensions.
pub fn parse_level(text: &str) -> Result<Level, LevelError> {
    let blocks = split_blocks(text);
    let mut blocks = blocks.into_iter();

    let budget_block = blocks.next().ok_or(LevelError::MissingBudget)?;
    let budget_line = budget_block.first().copied().unwrap_or("");
    let moves_left: i32 = budget_line
        .parse()
        .map_err(|_| LevelError::BadBudget(budget_line.to_string()))?;

    let grid_rows = section_rows(blocks.next(), "grid")?;
    let spike_rows = section_rows(blocks.next(), "spikes")?;
    let objective_rows = section_rows(blocks.next(), "objectives")?;

    let grid = parse_grid(&grid_rows)?;
    let spikes = parse_spikes(&spike_rows)?;

    if !dims_match(&grid, &spikes) {
        return Err(LevelError::DimensionMismatch("spikes"));
    }
    let objectives = parse_objectives(&objective_rows)?;
    if objective_rows.len() != grid.len()
        || objective_rows
            .iter()
            .any(|row| row.chars().count() != grid[0].len())
    {
        return Err(LevelError::DimensionMismatch("objectives"));
    }

    let helltaker = find_helltaker(&grid)?;
    let needs_code = grid
        .iter()
        .any(|row| row.contains(&Cell::CodeUnderRock));

    Ok(Level {
        grid,
        spikes,
        helltaker,
        moves_left,
        has_key: false,
        has_code: false,
        needs_code,
        objectives: Rc::new(objectives),
    })
}

/// Groups non-empty trimmed lines into blank-line separated blocks.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// A section block is its header line followed by at least one row.
fn section_rows<'a>(
    block: Option<Vec<&'a str>>,
    name: &'static str,
) -> Result<Vec<&'a str>, LevelError> {
    let block = block.ok_or(LevelError::MissingSection(name))?;
    let (&header, rows) = block.split_first().ok_or(LevelError::MissingSection(name))?;
    if header != name || rows.is_empty() {
        return Err(LevelError::MissingSection(name));
    }
    Ok(rows.to_vec())
}

fn parse_grid(rows: &[&str]) -> Result<Vec<Vec<Cell>>, LevelError> {
    parse_board(rows, "grid", |ch| match ch {
        '#' => Some(Cell::Wall),
        '.' => Some(Cell::Empty),
        'H' => Some(Cell::Helltaker),
        'U' => Some(Cell::Undead),
        'R' => Some(Cell::Rock),
        'G' => Some(Cell::Girl),
        'L' => Some(Cell::Lock),
        'K' => Some(Cell::Key),
        'C' => Some(Cell::CodeUnderRock),
        'Y' => Some(Cell::KeyUnderRock),
        _ => None,
    })
}

fn parse_spikes(rows: &[&str]) -> Result<Vec<Vec<Spike>>, LevelError> {
    parse_board(rows, "spikes", |ch| match ch {
        '.' => Some(Spike::None),
        'S' => Some(Spike::Up),
        's' => Some(Spike::Down),
        'T' => Some(Spike::Always),
        _ => None,
    })
}

fn parse_board<T>(
    rows: &[&str],
    section: &'static str,
    parse: impl Fn(char) -> Option<T>,
) -> Result<Vec<Vec<T>>, LevelError> {
    let mut board = Vec::with_capacity(rows.len());
    let width = rows.first().map_or(0, |row| row.chars().count());
    for (i, row) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(width);
        for (j, ch) in row.chars().enumerate() {
            let cell = parse(ch).ok_or(LevelError::BadCharacter {
                section,
                row: i,
                col: j,
                ch,
            })?;
            cells.push(cell);
        }
        if cells.len() != width {
            return Err(LevelError::NotRectangular { section, row: i });
        }
        board.push(cells);
    }
    Ok(board)
}

fn parse_objectives(rows: &[&str]) -> Result<Vec<Vec2>, LevelError> {
    let mut objectives = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        for (j, ch) in row.chars().enumerate() {
            match ch {
                '.' => {}
                'O' => objectives.push(Vec2 {
                    i: i as i32,
                    j: j as i32,
                }),
                _ => {
                    return Err(LevelError::BadCharacter {
                        section: "objectives",
                        row: i,
                        col: j,
                        ch,
                    });
                }
            }
        }
    }
    Ok(objectives)
}

fn dims_match<A, B>(grid: &[Vec<A>], other: &[Vec<B>]) -> bool {
    grid.len() == other.len()
        && grid
            .iter()
            .zip(other.iter())
            .all(|(a, b)| a.len() == b.len())
}

fn find_helltaker(grid: &[Vec<Cell>]) -> Result<Vec2, LevelError> {
    let mut found = None;
    for (i, row) in grid.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if cell == Cell::Helltaker {
                if found.is_some() {
                    return Err(LevelError::DuplicateHelltaker);
                }
                found = Some(Vec2 {
                    i: i as i32,
                    j: j as i32,
                });
            }
        }
    }
    found.ok_or(LevelError::MissingHelltaker)
}
