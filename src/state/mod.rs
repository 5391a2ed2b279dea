pub mod player;
pub mod round;
pub mod game;

pub use player::PlayerState;
pub use round::{Phase, PendingClaims, RoundState};
pub use game::GameState;
