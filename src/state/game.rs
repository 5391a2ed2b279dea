//! GameState 対局 --- the top-level object the engine owns: four PlayerStates, the current
//! RoundState, the append-only MJAI event log, and the ruleset in effect.

use crate::mjai::MjaiEvent;
use crate::rules::Rules;
use crate::seat::Seat;
use crate::state::player::PlayerState;
use crate::state::round::RoundState;

pub struct GameState {
    pub rules: Rules,
    pub players: [PlayerState; 4],
    pub round: RoundState,
    pub event_log: Vec<MjaiEvent>,
    /// Kyoku index (0 = East 1), independent of `round.round_wind`/`round.dealer` bookkeeping.
    pub kyoku: u8,
}

impl GameState {
    /// Starts a brand new game (not just a new round): all scores reset to the ruleset's
    /// starting score, East 1, dealer is East.
    pub fn new(rules: Rules, seed: u64) -> Self {
        let starting_score = rules.starting_score;
        let players = [
            PlayerState::new(starting_score),
            PlayerState::new(starting_score),
            PlayerState::new(starting_score),
            PlayerState::new(starting_score),
        ];
        let round = RoundState::new(crate::tile::WIND_E, Seat::East, 0, 0, seed);
        GameState { rules, players, round, event_log: Vec::new(), kyoku: 0 }
    }

    pub fn player(&self, seat: Seat) -> &PlayerState { &self.players[seat.to_usize()] }
    pub fn player_mut(&mut self, seat: Seat) -> &mut PlayerState { &mut self.players[seat.to_usize()] }

    pub fn is_game_over(&self) -> bool {
        self.rules.tobi_ends_game && self.players.iter().any(|p| p.score < 0)
    }

    /// Advances to the next round given whether the dealer keeps the button (renchan: the dealer
    /// won, or the round was an abortive/exhaustive draw with the dealer tenpai). `renchan` holds
    /// the same dealer and bumps honba; otherwise the dealer rotates one seat, the round wind
    /// advances every 4 kyoku, and honba resets to 0.
    pub fn advance_round(&mut self, renchan: bool, seed: u64) {
        let honba = if renchan { self.round.honba + 1 } else { 0 };
        if !renchan {
            self.kyoku += 1;
        }
        let dealer = Seat::new(self.kyoku % 4);
        let round_wind = crate::tile::WIND_E + self.kyoku / 4;
        self.start_next_round(dealer, round_wind, honba, self.round.kyotaku, seed);
    }

    /// Re-initializes RoundState and event log for the next round; player scores persist.
    pub fn start_next_round(&mut self, dealer: Seat, round_wind: crate::tile::TileType, honba: u32, kyotaku: u32, seed: u64) {
        self.round = RoundState::new(round_wind, dealer, honba, kyotaku, seed);
        for p in &mut self.players {
            p.hand = Default::default();
            p.melds.clear();
            p.discards.clear();
            p.riichi_discard_index = None;
            p.riichi_declared = false;
            p.riichi_stage = false;
            p.double_riichi_eligible = false;
            p.ippatsu_eligible = false;
            p.furiten_temporary = false;
            p.furiten_permanent = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_all_players_at_ruleset_default_score() {
        let game = GameState::new(Rules::default(), 1);
        for p in &game.players {
            assert_eq!(p.score, 25_000);
        }
        assert!(!game.is_game_over());
    }

    #[test]
    fn dealer_win_repeats_the_button_and_bumps_honba() {
        let mut game = GameState::new(Rules::default(), 1);
        game.round.honba = 5;
        game.advance_round(true, 2);
        assert_eq!(game.round.dealer, Seat::East);
        assert_eq!(game.round.honba, 6);
        assert_eq!(game.kyoku, 0);
    }

    #[test]
    fn non_dealer_win_rotates_the_button_and_resets_honba() {
        let mut game = GameState::new(Rules::default(), 1);
        game.round.honba = 5;
        game.advance_round(false, 2);
        assert_eq!(game.round.dealer, Seat::South);
        assert_eq!(game.round.honba, 0);
        assert_eq!(game.kyoku, 1);
    }
}
