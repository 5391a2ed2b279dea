//! Legal action enumeration --- given a [`GameState`] and a seat, which [`Action`]s that seat
//! may currently submit. Pure function of state; never mutates.

use crate::agari::{self, AgariRequest};
use crate::decomp;
use crate::engine::action::Action;
use crate::meld::Chi;
use crate::seat::Seat;
use crate::state::{GameState, Phase};
use crate::tile::Tile;
use crate::yaku::WinMethod;

/// Legal actions for `seat` while the round is in [`Phase::WaitAct`] (only meaningful when
/// `seat == game.round.current_player`).
pub fn legal_wait_act(game: &GameState, seat: Seat) -> Vec<Action> {
    let mut actions = Vec::new();
    if game.round.phase != Phase::WaitAct || game.round.current_player != seat {
        return actions;
    }
    let player = game.player(seat);
    let drawn = game.round.current_drawn_tile;

    if let Some(win) = drawn.and_then(|tile| tsumo_action(game, seat, tile)) {
        actions.push(win);
    }

    // Discards: under riichi only the just-drawn tile may go (tsumogiri), otherwise any tile
    // currently in the concealed hand, one action per distinct type.
    if player.riichi_declared {
        if let Some(tile) = drawn {
            actions.push(Action::discard(tile));
        }
    } else {
        for tile_type in 0u8..crate::tile::NUM_TILE_TYPES as u8 {
            if player.hand.count(tile_type) > 0 {
                actions.push(Action::discard(player.hand.representative_tile(tile_type, false)));
            }
        }
    }

    if player.is_concealed() {
        for tile_type in 0u8..crate::tile::NUM_TILE_TYPES as u8 {
            if player.hand.count(tile_type) == 4 {
                let t = Tile::from_type(tile_type).unwrap();
                actions.push(Action::ankan([t, t, t, t]));
            }
        }
    }
    for meld in &player.melds {
        if let crate::meld::Meld::Pon(pon) = meld {
            let tt = pon.called.tile_type();
            if player.hand.count(tt) > 0 {
                actions.push(Action::kakan(player.hand.representative_tile(tt, false)));
            }
        }
    }

    if riichi_eligible(game, seat) {
        for tile_type in 0u8..crate::tile::NUM_TILE_TYPES as u8 {
            if player.hand.count(tile_type) == 0 { continue; }
            let mut after = player.hand.clone();
            let _ = after.remove(player.hand.representative_tile(tile_type, false));
            if !decomp::tenpai_waits(&after.counts, 4 - player.melds.len()).is_empty() {
                actions.push(Action::riichi(player.hand.representative_tile(tile_type, false)));
            }
        }
    }

    if kyushu_kyuhai_eligible(game, seat) {
        actions.push(Action::kyushu_kyuhai());
    }

    actions
}

/// Legal actions for `seat` while the round is in [`Phase::WaitResponse`] and `seat` is one of
/// the seats still owed an answer.
pub fn legal_wait_response(game: &GameState, seat: Seat) -> Vec<Action> {
    let mut actions = Vec::new();
    let pending = &game.round.pending_claims;
    if game.round.phase != Phase::WaitResponse || !pending.offered_to.contains(&seat) {
        return actions;
    }
    let (discarder, tile) = match (pending.discarder, pending.tile) {
        (Some(d), Some(t)) => (d, t),
        _ => return actions,
    };

    if let Some(win) = ron_action(game, seat, discarder, tile) {
        actions.push(win);
    }

    if !pending.is_kakan {
        let player = game.player(seat);
        let count = player.hand.count(tile.tile_type());
        if count >= 2 {
            actions.push(Action::pon(tile, pon_own_tiles(player, tile)));
        }
        if count >= 3 {
            actions.push(Action::daiminkan(tile, daiminkan_own_tiles(player, tile)));
        }
        if discarder.is_kamicha_of(seat) {
            for own in chi_options(player, tile) {
                actions.push(Action::chi(tile, own));
            }
        }
    }

    actions.push(Action::pass());
    actions
}

fn tsumo_action(game: &GameState, seat: Seat, drawn: Tile) -> Option<Action> {
    let player = game.player(seat);
    let mut before = player.hand.clone();
    before.remove(drawn).ok()?;
    let req = tsumo_request(game, seat, &before, drawn);
    let verdict = agari::evaluate_win(&req, &game.rules);
    verdict.agari.then(Action::tsumo)
}

fn ron_action(game: &GameState, seat: Seat, discarder: Seat, tile: Tile) -> Option<Action> {
    let player = game.player(seat);
    if player.furiten_permanent || player.furiten_temporary {
        return None;
    }
    let req = ron_request(game, seat, discarder, &player.hand, tile);
    let verdict = agari::evaluate_win(&req, &game.rules);
    verdict.agari.then(Action::ron)
}

fn tsumo_request<'a>(game: &'a GameState, seat: Seat, before: &'a crate::hand::Hand, win_tile: Tile) -> AgariRequest<'a> {
    let player = game.player(seat);
    AgariRequest {
        hand_before_win: before,
        melds: &player.melds,
        win_tile,
        method: WinMethod::Tsumo,
        is_riichi: player.riichi_declared,
        is_double_riichi: player.double_riichi_eligible,
        is_ippatsu: player.ippatsu_eligible,
        is_haitei: game.round.wall.is_haitei(),
        is_houtei: false,
        is_rinshan: game.round.is_rinshan_draw,
        is_chankan: false,
        is_tenhou: is_tenhou(game, seat),
        is_chiihou: is_chiihou(game, seat),
        seat,
        dealer: game.round.dealer,
        round_wind: game.round.round_wind,
        discarder: seat,
        dora_indicators: game.round.wall.dora_indicators(),
        ura_indicators: game.round.wall.ura_indicators(),
        honba: game.round.honba,
        kyotaku: game.round.kyotaku,
    }
}

fn ron_request<'a>(game: &'a GameState, seat: Seat, discarder: Seat, hand: &'a crate::hand::Hand, win_tile: Tile) -> AgariRequest<'a> {
    let player = game.player(seat);
    AgariRequest {
        hand_before_win: hand,
        melds: &player.melds,
        win_tile,
        method: WinMethod::Ron,
        is_riichi: player.riichi_declared,
        is_double_riichi: player.double_riichi_eligible,
        is_ippatsu: player.ippatsu_eligible,
        is_haitei: false,
        is_houtei: game.round.wall.live_remaining() == 0,
        is_rinshan: false,
        is_chankan: game.round.pending_claims.is_kakan,
        is_tenhou: false,
        is_chiihou: false,
        seat,
        dealer: game.round.dealer,
        round_wind: game.round.round_wind,
        discarder,
        dora_indicators: game.round.wall.dora_indicators(),
        ura_indicators: game.round.wall.ura_indicators(),
        honba: game.round.honba,
        kyotaku: game.round.kyotaku,
    }
}

pub(crate) fn is_tenhou(game: &GameState, seat: Seat) -> bool {
    seat == game.round.dealer
        && game.round.is_first_uninterrupted_go_around
        && game.player(seat).discards.is_empty()
}

pub(crate) fn is_chiihou(game: &GameState, seat: Seat) -> bool {
    seat != game.round.dealer
        && game.round.is_first_uninterrupted_go_around
        && game.player(seat).discards.is_empty()
        && game.player(seat).is_concealed()
}

fn riichi_eligible(game: &GameState, seat: Seat) -> bool {
    let player = game.player(seat);
    player.is_concealed()
        && !player.riichi_declared
        && player.score >= game.rules.min_riichi_funds
        && game.round.wall.live_remaining() >= 4
}

fn kyushu_kyuhai_eligible(game: &GameState, seat: Seat) -> bool {
    if !game.round.is_first_uninterrupted_go_around || !game.player(seat).discards.is_empty() {
        return false;
    }
    const TERMINAL_OR_HONOR: [u8; 13] = [0, 8, 9, 17, 18, 26, 27, 28, 29, 30, 31, 32, 33];
    let player = game.player(seat);
    TERMINAL_OR_HONOR.iter().filter(|&&t| player.hand.count(t) > 0).count() >= 9
}

fn pon_own_tiles(player: &crate::state::PlayerState, called: Tile) -> [Tile; 2] {
    let tt = called.tile_type();
    let prefer_red = player.hand.next_copy_is_forced_red(tt);
    let first = player.hand.representative_tile(tt, prefer_red);
    [first, Tile::from_type(tt).unwrap()]
}

fn daiminkan_own_tiles(_player: &crate::state::PlayerState, called: Tile) -> [Tile; 3] {
    let tt = called.tile_type();
    let t = Tile::from_type(tt).unwrap();
    [t, t, t]
}

/// All ways to complete a chi on `called` out of `player`'s concealed hand: low (called is the
/// lowest rank of the run), middle, or high.
fn chi_options(player: &crate::state::PlayerState, called: Tile) -> Vec<[Tile; 2]> {
    let mut out = Vec::new();
    if !called.is_numeral() { return out; }
    let try_pair = |a: Option<Tile>, b: Option<Tile>| -> Option<[Tile; 2]> {
        let (a, b) = (a?, b?);
        if player.hand.has(a) && player.hand.has(b) { Some([a, b]) } else { None }
    };
    if let Some(pair) = try_pair(called.succ(), called.succ().and_then(|t| t.succ())) {
        if Chi::new(pair[0], pair[1], called, Seat::East).is_some() { out.push(pair); }
    }
    if let Some(pair) = try_pair(called.pred(), called.succ()) {
        if Chi::new(pair[0], pair[1], called, Seat::East).is_some() { out.push(pair); }
    }
    if let Some(pair) = try_pair(called.pred().and_then(|t| t.pred()), called.pred()) {
        if Chi::new(pair[0], pair[1], called, Seat::East).is_some() { out.push(pair); }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;
    use crate::tile;

    #[test]
    fn discard_is_legal_after_a_draw() {
        let mut game = GameState::new(Rules::default(), 1);
        let hand = crate::hand::Hand::from_tiles(tile::tiles_from_mpsz("123456789m1122z"));
        game.player_mut(Seat::East).hand = hand;
        let drawn: Tile = "3z".parse().unwrap();
        game.player_mut(Seat::East).hand.add(drawn);
        game.round.current_drawn_tile = Some(drawn);
        let actions = legal_wait_act(&game, Seat::East);
        assert!(actions.iter().any(|a| a.kind == crate::engine::action::ActionKind::Discard));
    }

    #[test]
    fn chi_only_offered_to_shimocha_of_discarder() {
        let mut game = GameState::new(Rules::default(), 1);
        game.round.phase = Phase::WaitResponse;
        game.round.pending_claims.discarder = Some(Seat::East);
        game.round.pending_claims.tile = Some("5s".parse().unwrap());
        game.round.pending_claims.offered_to = vec![Seat::South, Seat::West, Seat::North];
        game.player_mut(Seat::South).hand = crate::hand::Hand::from_tiles(tile::tiles_from_mpsz("46s"));
        game.player_mut(Seat::West).hand = crate::hand::Hand::from_tiles(tile::tiles_from_mpsz("46s"));

        let south_actions = legal_wait_response(&game, Seat::South);
        assert!(south_actions.iter().any(|a| a.kind == crate::engine::action::ActionKind::Chi));
        let west_actions = legal_wait_response(&game, Seat::West);
        assert!(!west_actions.iter().any(|a| a.kind == crate::engine::action::ActionKind::Chi));
    }
}
