//! Observation 観測 --- the per-seat view of a [`GameState`]: what that seat is actually allowed
//! to see, plus the legal actions available to them right now. This is the boundary a client
//! (bot, UI, replay driver) is expected to interact through instead of touching `GameState`
//! fields directly.

use crate::engine::action::Action;
use crate::engine::legal::{legal_wait_act, legal_wait_response};
use crate::hand::Hand;
use crate::meld::Meld;
use crate::mjai::MjaiEvent;
use crate::seat::Seat;
use crate::state::{GameState, Phase};
use crate::tile::Tile;

#[derive(Clone, Debug)]
pub struct PublicPlayerView {
    pub seat: Seat,
    pub melds: Vec<Meld>,
    pub discards: Vec<Tile>,
    pub riichi_declared: bool,
    pub riichi_discard_index: Option<usize>,
    pub score: i64,
}

#[derive(Clone, Debug)]
pub struct Observation {
    pub viewer: Seat,
    /// Own concealed hand, fully visible (includes the just-drawn tile during `WaitAct`).
    pub own_hand: Hand,
    pub others: Vec<PublicPlayerView>,
    pub round_wind: crate::tile::TileType,
    pub dealer: Seat,
    pub honba: u32,
    pub kyotaku: u32,
    pub dora_indicators: Vec<Tile>,
    pub live_wall_remaining: usize,
    pub phase: Phase,
    /// The event log so far, masked so other seats' concealed tiles never leak (see
    /// [`crate::mjai::mask_for`]).
    pub event_log: Vec<MjaiEvent>,
    pub legal_actions: Vec<Action>,
}

/// Builds `seat`'s observation of `game` as it stands right now.
pub fn observe(game: &GameState, seat: Seat) -> Observation {
    let others = Seat::ALL.iter()
        .filter(|&&s| s != seat)
        .map(|&s| {
            let p = game.player(s);
            PublicPlayerView {
                seat: s,
                melds: p.melds.clone(),
                discards: p.discards.clone(),
                riichi_declared: p.riichi_declared,
                riichi_discard_index: p.riichi_discard_index,
                score: p.score,
            }
        })
        .collect();

    let legal_actions = match game.round.phase {
        Phase::WaitAct => legal_wait_act(game, seat),
        Phase::WaitResponse => legal_wait_response(game, seat),
        Phase::RoundOver => Vec::new(),
    };

    Observation {
        viewer: seat,
        own_hand: game.player(seat).hand.clone(),
        others,
        round_wind: game.round.round_wind,
        dealer: game.round.dealer,
        honba: game.round.honba,
        kyotaku: game.round.kyotaku,
        dora_indicators: game.round.wall.dora_indicators().to_vec(),
        live_wall_remaining: game.round.wall.live_remaining(),
        phase: game.round.phase,
        event_log: game.event_log.iter().map(|e| crate::mjai::mask_for(e, seat)).collect(),
        legal_actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;

    #[test]
    fn observation_never_exposes_other_seats_concealed_hand_fields() {
        let game = GameState::new(Rules::default(), 1);
        let obs = observe(&game, Seat::East);
        assert_eq!(obs.others.len(), 3);
        // PublicPlayerView has no `hand` field at all; this is enforced at compile time, but we
        // still exercise the happy path end to end.
        assert_eq!(obs.viewer, Seat::East);
    }
}
