use crate::core::{GameChangeType, IllegalMove, Level};

pub struct GameRenderState {
    pub game: Level,
    pub won: bool,
    pub out_of_moves: bool,
    pub error: Option<IllegalMove>,
    pub last_change: Option<GameChangeType>,
}
