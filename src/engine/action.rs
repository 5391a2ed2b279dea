//! Action 行動 --- the step input: one submitted action per active seat.

use crate::tile::Tile;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Discard,
    Chi,
    Pon,
    Daiminkan,
    Ankan,
    Kakan,
    Riichi,
    Ron,
    Tsumo,
    KyushuKyuhai,
    Pass,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    /// Required for Discard, the claimed tile for Chi/Pon/Daiminkan, the fourth tile for Kakan,
    /// any member tile for Ankan.
    pub tile: Option<Tile>,
    /// Required for all meld actions: the tiles drawn from the actor's own concealed hand.
    pub consume_tiles: Option<Vec<Tile>>,
}

impl Action {
    pub fn discard(tile: Tile) -> Self { Action { kind: ActionKind::Discard, tile: Some(tile), consume_tiles: None } }
    pub fn riichi(tile: Tile) -> Self { Action { kind: ActionKind::Riichi, tile: Some(tile), consume_tiles: None } }
    pub fn tsumo() -> Self { Action { kind: ActionKind::Tsumo, tile: None, consume_tiles: None } }
    pub fn ron() -> Self { Action { kind: ActionKind::Ron, tile: None, consume_tiles: None } }
    pub fn pass() -> Self { Action { kind: ActionKind::Pass, tile: None, consume_tiles: None } }
    pub fn kyushu_kyuhai() -> Self { Action { kind: ActionKind::KyushuKyuhai, tile: None, consume_tiles: None } }

    pub fn ankan(tiles: [Tile; 4]) -> Self {
        Action { kind: ActionKind::Ankan, tile: Some(tiles[0]), consume_tiles: Some(tiles.to_vec()) }
    }
    pub fn kakan(added: Tile) -> Self {
        Action { kind: ActionKind::Kakan, tile: Some(added), consume_tiles: None }
    }
    pub fn chi(called: Tile, own: [Tile; 2]) -> Self {
        Action { kind: ActionKind::Chi, tile: Some(called), consume_tiles: Some(own.to_vec()) }
    }
    pub fn pon(called: Tile, own: [Tile; 2]) -> Self {
        Action { kind: ActionKind::Pon, tile: Some(called), consume_tiles: Some(own.to_vec()) }
    }
    pub fn daiminkan(called: Tile, own: [Tile; 3]) -> Self {
        Action { kind: ActionKind::Daiminkan, tile: Some(called), consume_tiles: Some(own.to_vec()) }
    }
}
