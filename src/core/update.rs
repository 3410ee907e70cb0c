use crate::core::{Cell, GameChangeType, GameUpdate, IllegalMove, Level, Spike, UserAction};

/// Applies one move to an immutable snapshot. On success the returned
/// snapshot has every invariant re-established: exactly one actor cell, the
/// spike boards cycled, and the move budget decremented (twice when the
/// actor ends the turn on raised spikes).
pub fn step(level: &Level, action: UserAction) -> GameUpdate {
    use GameChangeType::*;

    if level.is_terminal() {
        return GameUpdate::Illegal(IllegalMove::Terminal);
    }

    let UserAction::Move(direction) = action;
    let delta = direction.delta();
    let from = level.helltaker;
    let dest = from + delta;
    if !level.in_bounds(dest) {
        return GameUpdate::Illegal(IllegalMove::OutOfBounds);
    }
    // Two cells ahead along the move; pushes are resolved against this cell
    // and never chain further.
    let far = dest + delta;

    let mut next = level.clone();
    next.set_cell(from, Cell::Empty);

    let change = match level.cell(dest) {
        Cell::Empty => {
            next.set_cell(dest, Cell::Helltaker);
            next.helltaker = dest;
            PlayerMove
        }
        Cell::Wall => return GameUpdate::Illegal(IllegalMove::Wall),
        Cell::Girl => return GameUpdate::Illegal(IllegalMove::Girl),
        Cell::Key => {
            next.set_cell(dest, Cell::Helltaker);
            next.helltaker = dest;
            next.has_key = true;
            PlayerMove
        }
        Cell::Code => {
            next.set_cell(dest, Cell::Helltaker);
            next.helltaker = dest;
            next.has_code = true;
            PlayerMove
        }
        Cell::Lock => {
            if !level.has_key {
                return GameUpdate::Illegal(IllegalMove::Locked);
            }
            // The lock is consumed; the cell becomes plain floor once the
            // actor moves on.
            next.set_cell(dest, Cell::Helltaker);
            next.helltaker = dest;
            PlayerMove
        }
        Cell::Undead => {
            // The actor never advances into a creature.
            next.set_cell(from, Cell::Helltaker);
            next.set_cell(dest, Cell::Empty);
            if level.in_bounds(far) && level.cell(far) == Cell::Empty {
                next.set_cell(far, Cell::Undead);
                Push
            } else {
                // Anything behind the creature destroys it.
                Crush
            }
        }
        Cell::Rock => {
            next.set_cell(from, Cell::Helltaker);
            if !level.in_bounds(far) {
                return GameUpdate::Illegal(IllegalMove::BlockedPush);
            }
            match level.cell(far) {
                Cell::Empty => {
                    next.set_cell(dest, Cell::Empty);
                    next.set_cell(far, Cell::Rock);
                }
                Cell::Key => {
                    // The rock covers the key without granting it.
                    next.set_cell(dest, Cell::Empty);
                    next.set_cell(far, Cell::KeyUnderRock);
                }
                _ => return GameUpdate::Illegal(IllegalMove::BlockedPush),
            }
            Push
        }
        Cell::CodeUnderRock => {
            next.set_cell(from, Cell::Helltaker);
            if !level.in_bounds(far) || level.cell(far) != Cell::Empty {
                return GameUpdate::Illegal(IllegalMove::BlockedPush);
            }
            // The push uncovers the code in place and the rock moves on.
            next.set_cell(dest, Cell::Code);
            next.set_cell(far, Cell::Rock);
            Push
        }
        Cell::KeyUnderRock => {
            next.set_cell(from, Cell::Helltaker);
            if !level.in_bounds(far) || level.cell(far) != Cell::Empty {
                return GameUpdate::Illegal(IllegalMove::BlockedPush);
            }
            next.set_cell(dest, Cell::Key);
            next.set_cell(far, Cell::Rock);
            Push
        }
        // The actor cell was cleared above and there is exactly one actor.
        Cell::Helltaker => return GameUpdate::Illegal(IllegalMove::OutOfBounds),
    };

    cycle_spikes(&mut next);

    next.moves_left -= 1;
    match next.spike(next.helltaker) {
        Spike::Up | Spike::Always => next.moves_left -= 1,
        Spike::None | Spike::Down => {}
    }

    GameUpdate::NextState(next, change)
}

// Phase flip and creature removal are independent of scan order: each cell
// is rewritten from its own previous phase only.
fn cycle_spikes(level: &mut Level) {
    for i in 0..level.spikes.len() {
        for j in 0..level.spikes[i].len() {
            match level.spikes[i][j] {
                Spike::Up => level.spikes[i][j] = Spike::Down,
                Spike::Down => {
                    level.spikes[i][j] = Spike::Up;
                    // Rising spikes destroy any creature caught on them.
                    if level.grid[i][j] == Cell::Undead {
                        level.grid[i][j] = Cell::Empty;
                    }
                }
                Spike::None | Spike::Always => {}
            }
        }
    }
}
