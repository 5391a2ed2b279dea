//! RoundState 局 --- everything that resets between rounds: wind, dealer, wall, dora, and the
//! engine's own position in the WaitAct/WaitResponse state machine.

use crate::seat::Seat;
use crate::tile::{Tile, TileType};
use crate::wall::Wall;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// `current_player` just drew or claimed; awaiting their discard/tsumo/kan/riichi/pass.
    WaitAct,
    /// A tile was just discarded (or a kakan declared); awaiting responses from other seats.
    WaitResponse,
    RoundOver,
}

/// What a discard (or kakan) currently offers to the other seats, and who has answered so far.
#[derive(Clone, Debug, Default)]
pub struct PendingClaims {
    pub discarder: Option<Seat>,
    pub tile: Option<Tile>,
    /// True if this is a kakan addition (only chankan ron is offered, no pon/chi).
    pub is_kakan: bool,
    pub offered_to: Vec<Seat>,
    pub answered: Vec<Seat>,
}

impl PendingClaims {
    pub fn is_settled(&self) -> bool {
        self.offered_to.iter().all(|s| self.answered.contains(s))
    }
}

pub struct RoundState {
    pub round_wind: TileType,
    pub dealer: Seat,
    pub honba: u32,
    pub kyotaku: u32,
    pub wall: Wall,
    pub current_player: Seat,
    pub phase: Phase,
    pub last_discard: Option<(Seat, Tile)>,
    pub pending_claims: PendingClaims,
    pub current_drawn_tile: Option<Tile>,
    /// Set once per go-around on the very first uninterrupted draw (for kyushu-kyuhai checks).
    pub is_first_uninterrupted_go_around: bool,
    pub is_rinshan_draw: bool,
    pub kan_declarations: Vec<Seat>,
}

impl RoundState {
    pub fn new(round_wind: TileType, dealer: Seat, honba: u32, kyotaku: u32, seed: u64) -> Self {
        RoundState {
            round_wind,
            dealer,
            honba,
            kyotaku,
            wall: Wall::new(seed),
            current_player: dealer,
            phase: Phase::WaitAct,
            last_discard: None,
            pending_claims: PendingClaims::default(),
            current_drawn_tile: None,
            is_first_uninterrupted_go_around: true,
            is_rinshan_draw: false,
            kan_declarations: Vec::new(),
        }
    }

    pub fn seat_wind(&self, seat: Seat) -> TileType {
        crate::tile::WIND_E + seat.offset_from(self.dealer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_round_starts_at_dealer_in_wait_act() {
        let round = RoundState::new(crate::tile::WIND_E, Seat::South, 0, 0, 1);
        assert_eq!(round.current_player, Seat::South);
        assert_eq!(round.phase, Phase::WaitAct);
        assert_eq!(round.seat_wind(Seat::South), crate::tile::WIND_E);
        assert_eq!(round.seat_wind(Seat::West), crate::tile::WIND_E + 1);
    }
}
