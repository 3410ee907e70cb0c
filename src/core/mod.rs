mod model_helpers;
mod models;
mod update;

pub use models::{
    Cell, Direction, GameChangeType, GameUpdate, IllegalMove, Level, Spike, UserAction, Vec2,
};
pub use update::step;
