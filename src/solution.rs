use crate::core::Direction;

/// Run-length encodes consecutive repeated directions.
pub fn compress_solution(moves: &[Direction]) -> Vec<(usize, Direction)> {
    let mut runs: Vec<(usize, Direction)> = Vec::new();
    for &direction in moves {
        match runs.last_mut() {
            Some((count, last)) if *last == direction => *count += 1,
            _ => runs.push((1, direction)),
        }
    }
    runs
}

/// Human-readable solution string, e.g. `[Left, Left, Up]` becomes "2← 1↑".
pub fn format_solution(moves: &[Direction]) -> String {
    compress_solution(moves)
        .into_iter()
        .map(|(count, direction)| format!("{}{}", count, direction.arrow()))
        .collect::<Vec<_>>()
        .join(" ")
}
