//! PlayerState 手番 --- everything tracked per seat: hand, melds, discards, and the flags that
//! the engine (never the player) mutates: riichi lifecycle, furiten.

use crate::hand::Hand;
use crate::meld::Meld;
use crate::tile::Tile;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub hand: Hand,
    pub melds: Vec<Meld>,
    pub discards: Vec<Tile>,
    /// Index into `discards` at which riichi was declared, if any.
    pub riichi_discard_index: Option<usize>,
    pub riichi_declared: bool,
    /// Riichi has been called but the declaring discard hasn't happened yet.
    pub riichi_stage: bool,
    pub double_riichi_eligible: bool,
    pub ippatsu_eligible: bool,
    /// Temporary furiten: a ron was passed on this go-around; clears on this seat's next draw.
    pub furiten_temporary: bool,
    /// Permanent furiten: a wait-set tile is in this seat's own discards.
    pub furiten_permanent: bool,
    pub score: i64,
}

impl PlayerState {
    pub fn new(starting_score: i64) -> Self {
        PlayerState { score: starting_score, ..Default::default() }
    }

    pub fn is_concealed(&self) -> bool {
        self.melds.iter().all(|m| !m.is_opened())
    }

    pub fn is_riichi(&self) -> bool { self.riichi_declared }

    /// Tile count including melds, per the {13,14} invariant.
    pub fn total_tile_count(&self) -> u32 {
        let meld_tiles: u32 = self.melds.iter().map(|m| if m.is_kan() { 4 } else { 3 }).sum();
        self.hand.total() + meld_tiles
    }

    pub fn is_furiten(&self) -> bool { self.furiten_temporary || self.furiten_permanent }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_player_state_has_no_furiten_and_starting_score() {
        let p = PlayerState::new(25_000);
        assert_eq!(p.score, 25_000);
        assert!(!p.is_furiten());
        assert!(p.is_concealed());
    }
}
