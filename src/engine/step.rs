//! Step 進行 --- applies one submitted [`Action`] (for `WaitAct`) or one resolved claim (for
//! `WaitResponse`) to a [`GameState`], mutating it and returning the [`MjaiEvent`]s produced.
//!
//! Every mutating entry point here validates against [`legal_wait_act`]/[`legal_wait_response`]
//! first; nothing partially applies on a rejected action.

use crate::agari::{self, AgariRequest, AgariVerdict};
use crate::engine::action::{Action, ActionKind};
use crate::engine::claims::{self, ClaimOutcome};
use crate::engine::legal::{self, legal_wait_act, legal_wait_response};
use crate::error::ActionError;
use crate::meld::{Ankan, Chi, Daiminkan, Kakan, Meld, Pon};
use crate::mjai::MjaiEvent;
use crate::rules::MultiRonPolicy;
use crate::seat::Seat;
use crate::state::{GameState, Phase};
use crate::tile::Tile;
use crate::yaku::WinMethod;

/// Draws the next tile for `game.round.current_player` (live wall, or the dead wall if the
/// previous action was a kan), records it, and returns the drawn tile. `None` signals an
/// exhaustive draw (ryuukyoku), which the caller must handle by ending the round.
pub fn draw_for_current_player(game: &mut GameState) -> Option<Tile> {
    let seat = game.round.current_player;
    let tile = if game.round.is_rinshan_draw {
        game.round.wall.draw_replacement()
    } else {
        game.round.wall.draw_live()
    }?;
    game.player_mut(seat).hand.add(tile);
    game.round.current_drawn_tile = Some(tile);
    game.round.phase = Phase::WaitAct;
    game.player_mut(seat).furiten_temporary = false;
    Some(tile)
}

/// Applies `action` as `seat`'s response to `Phase::WaitAct`. `seat` must be
/// `game.round.current_player`.
pub fn apply_wait_act(game: &mut GameState, seat: Seat, action: Action) -> Result<Vec<MjaiEvent>, ActionError> {
    let legal = legal_wait_act(game, seat);
    if !legal.contains(&action) {
        return Err(ActionError::NotLegal);
    }
    match action.kind {
        ActionKind::Discard => Ok(apply_discard(game, seat, action.tile.unwrap(), false)),
        ActionKind::Riichi => Ok(apply_riichi_discard(game, seat, action.tile.unwrap())),
        ActionKind::Tsumo => {
            let drawn = game.round.current_drawn_tile.expect("tsumo is only legal right after a draw");
            Ok(apply_win(game, seat, seat, drawn, WinMethod::Tsumo))
        }
        ActionKind::Ankan => apply_ankan(game, seat, action),
        ActionKind::Kakan => apply_kakan(game, seat, action),
        ActionKind::KyushuKyuhai => Ok(apply_abortive_draw(game, "kyushu kyuhai")),
        _ => Err(ActionError::NotLegal),
    }
}

/// Applies the resolved outcome of every seat's reaction to the current `Phase::WaitResponse`.
/// `submissions` need only include seats that actually answered; anyone else is treated as pass.
pub fn apply_wait_response(game: &mut GameState, submissions: Vec<(Seat, Action)>) -> Result<Vec<MjaiEvent>, ActionError> {
    for (seat, action) in &submissions {
        let legal = legal_wait_response(game, *seat);
        if !legal.contains(action) {
            return Err(ActionError::NotLegal);
        }
    }
    let discarder = game.round.pending_claims.discarder.ok_or(ActionError::NotActionable(0))?;
    let tile = game.round.pending_claims.tile;
    let is_kakan = game.round.pending_claims.is_kakan;
    let outcome = claims::resolve(game.rules.multi_ron_policy, discarder, &submissions);
    match outcome {
        ClaimOutcome::NoClaim if is_kakan => {
            // Nobody chankan'd; the kakan's replacement draw was deferred until the claim
            // window closed.
            if let Some(t) = tile { mark_temporary_furiten_for_passed_seats(game, discarder, t, &[]); }
            let suukaikan = draw_rinshan(game, discarder);
            if suukaikan { Ok(apply_abortive_draw(game, "suukaikan")) } else { Ok(Vec::new()) }
        }
        ClaimOutcome::NoClaim => {
            if let Some(t) = tile { mark_temporary_furiten_for_passed_seats(game, discarder, t, &[]); }
            Ok(advance_turn_after_no_claim(game))
        }
        ClaimOutcome::TripleRonAbort => Ok(apply_abortive_draw(game, "triple ron")),
        ClaimOutcome::Ron(winners) => {
            let tile = tile.unwrap();
            let mut events = Vec::new();
            for winner in &winners {
                events.extend(apply_win(game, *winner, discarder, tile, WinMethod::Ron));
            }
            Ok(events)
        }
        ClaimOutcome::Meld(seat, action) => {
            if let Some(t) = tile { mark_temporary_furiten_for_passed_seats(game, discarder, t, &[seat]); }
            Ok(apply_meld_claim(game, seat, discarder, action))
        }
    }
}

/// A discard (or kakan addition) offered ron to seats who did not take it: each of those seats
/// whose wait-set includes the tile enters temporary furiten, even if Ron was never in their
/// legal-action list (e.g. hidden by yaku-shibari). Clears on that seat's next draw.
fn mark_temporary_furiten_for_passed_seats(game: &mut GameState, discarder: Seat, tile: Tile, exclude: &[Seat]) {
    for seat in discarder.others_clockwise() {
        if exclude.contains(&seat) { continue; }
        let player = game.player(seat);
        let num_sets = 4 - player.melds.len();
        if crate::decomp::tenpai_waits(&player.hand.counts, num_sets).contains(&tile.tile_type()) {
            game.player_mut(seat).furiten_temporary = true;
        }
    }
}

fn apply_discard(game: &mut GameState, seat: Seat, tile: Tile, is_riichi_declare: bool) -> Vec<MjaiEvent> {
    let tsumogiri = game.round.current_drawn_tile == Some(tile);
    game.player_mut(seat).hand.remove(tile).expect("discard already checked legal");
    game.player_mut(seat).discards.push(tile);
    game.round.current_drawn_tile = None;
    game.round.is_first_uninterrupted_go_around &= game.player(seat).discards.len() <= 1;
    mark_furiten_if_waiting_on_own_discard(game, seat, tile);

    let mut events = Vec::new();
    if is_riichi_declare {
        events.push(MjaiEvent::Reach { actor: seat });
    }
    events.push(MjaiEvent::dahai(seat, tile, tsumogiri));
    if is_riichi_declare {
        events.push(MjaiEvent::ReachAccepted { actor: seat });
    }

    let offered_to: Vec<Seat> = seat.others_clockwise().to_vec();
    game.round.pending_claims = crate::state::PendingClaims {
        discarder: Some(seat),
        tile: Some(tile),
        is_kakan: false,
        offered_to,
        answered: Vec::new(),
    };
    game.round.last_discard = Some((seat, tile));
    game.round.phase = Phase::WaitResponse;
    game.event_log.extend(events.clone());

    if is_suufon_renda(game) {
        events.extend(apply_abortive_draw(game, "suufon renda"));
    }
    events
}

/// All four seats discarded the same wind tile on their very first, uninterrupted turn.
fn is_suufon_renda(game: &GameState) -> bool {
    if !game.round.is_first_uninterrupted_go_around {
        return false;
    }
    if Seat::ALL.iter().any(|&s| game.player(s).discards.len() != 1) {
        return false;
    }
    let first = game.player(Seat::East).discards[0];
    first.is_wind() && Seat::ALL.iter().all(|&s| game.player(s).discards[0] == first)
}

fn apply_riichi_discard(game: &mut GameState, seat: Seat, tile: Tile) -> Vec<MjaiEvent> {
    let player = game.player_mut(seat);
    player.riichi_declared = true;
    player.riichi_stage = true;
    player.double_riichi_eligible = game.round.is_first_uninterrupted_go_around && player.discards.is_empty();
    player.ippatsu_eligible = true;
    player.riichi_discard_index = Some(player.discards.len());
    game.round.kyotaku += 1;
    game.player_mut(seat).score -= 1000;
    let mut events = apply_discard(game, seat, tile, true);
    if Seat::ALL.iter().all(|&s| game.player(s).riichi_declared) {
        events.extend(apply_abortive_draw(game, "suucha riichi"));
    }
    events
}

fn apply_win(game: &mut GameState, winner: Seat, discarder: Seat, tile: Tile, method: WinMethod) -> Vec<MjaiEvent> {
    let player = game.player(winner);
    let before = if method == WinMethod::Tsumo {
        let mut h = player.hand.clone();
        let _ = h.remove(tile);
        h
    } else {
        player.hand.clone()
    };
    let req = AgariRequest {
        hand_before_win: &before,
        melds: &player.melds,
        win_tile: tile,
        method,
        is_riichi: player.riichi_declared,
        is_double_riichi: player.double_riichi_eligible,
        is_ippatsu: player.ippatsu_eligible,
        is_haitei: method == WinMethod::Tsumo && game.round.wall.is_haitei(),
        is_houtei: method == WinMethod::Ron && game.round.wall.live_remaining() == 0,
        is_rinshan: method == WinMethod::Tsumo && game.round.is_rinshan_draw,
        is_chankan: method == WinMethod::Ron && game.round.pending_claims.is_kakan,
        is_tenhou: method == WinMethod::Tsumo && legal::is_tenhou(game, winner),
        is_chiihou: method == WinMethod::Tsumo && legal::is_chiihou(game, winner),
        seat: winner,
        dealer: game.round.dealer,
        round_wind: game.round.round_wind,
        discarder,
        dora_indicators: game.round.wall.dora_indicators(),
        ura_indicators: game.round.wall.ura_indicators(),
        honba: game.round.honba,
        kyotaku: game.round.kyotaku,
    };
    let verdict: AgariVerdict = agari::evaluate_win(&req, &game.rules);

    for (i, seat) in Seat::ALL.iter().enumerate() {
        game.player_mut(*seat).score += verdict.payments[i];
    }
    game.round.kyotaku = 0;
    game.round.phase = Phase::RoundOver;

    let event = MjaiEvent::hora(winner, discarder, tile, verdict.yaku, verdict.han, verdict.fu, verdict.payments);
    game.event_log.push(event.clone());
    vec![event]
}

fn apply_ankan(game: &mut GameState, seat: Seat, action: Action) -> Result<Vec<MjaiEvent>, ActionError> {
    let tiles = action.consume_tiles.clone().unwrap_or_default();
    if tiles.len() != 4 { return Err(ActionError::NotEnoughForMeld(action.tile.unwrap())); }
    let arr: [Tile; 4] = [tiles[0], tiles[1], tiles[2], tiles[3]];
    let ankan = Ankan::new(arr).ok_or(ActionError::NotEnoughForMeld(arr[0]))?;
    for t in arr {
        game.player_mut(seat).hand.remove(t)?;
    }
    game.player_mut(seat).melds.push(Meld::Ankan(ankan));
    let event = MjaiEvent::ankan(seat, &arr);
    game.event_log.push(event.clone());
    let mut events = vec![event];
    let suukaikan = draw_rinshan(game, seat);
    break_ippatsu(game);
    if suukaikan {
        events.extend(apply_abortive_draw(game, "suukaikan"));
    }
    Ok(events)
}

fn apply_kakan(game: &mut GameState, seat: Seat, action: Action) -> Result<Vec<MjaiEvent>, ActionError> {
    let added = action.tile.unwrap();
    let idx = game.player(seat).melds.iter().position(|m| matches!(m, Meld::Pon(p) if p.called.tile_type() == added.tile_type()))
        .ok_or(ActionError::NoPonForKakan(added))?;
    let pon = match game.player(seat).melds[idx] { Meld::Pon(p) => p, _ => unreachable!() };
    game.player_mut(seat).hand.remove(added)?;
    let kakan = Kakan::new(pon, added).ok_or(ActionError::NoPonForKakan(added))?;
    game.player_mut(seat).melds[idx] = Meld::Kakan(kakan);

    // Chankan: offer ron to the other three seats before the replacement draw resolves.
    let offered_to: Vec<Seat> = seat.others_clockwise().to_vec();
    game.round.pending_claims = crate::state::PendingClaims {
        discarder: Some(seat),
        tile: Some(added),
        is_kakan: true,
        offered_to,
        answered: Vec::new(),
    };
    game.round.phase = Phase::WaitResponse;
    let event = MjaiEvent::kakan(seat, added, &pon.own);
    game.event_log.push(event.clone());
    break_ippatsu(game);
    Ok(vec![event])
}

fn apply_meld_claim(game: &mut GameState, seat: Seat, discarder: Seat, action: Action) -> Vec<MjaiEvent> {
    let called = action.tile.unwrap();
    let own = action.consume_tiles.clone().unwrap_or_default();
    let meld = match action.kind {
        ActionKind::Chi => Chi::new(own[0], own[1], called, discarder).map(Meld::Chi),
        ActionKind::Pon => Pon::new(own[0], own[1], called, discarder).map(Meld::Pon),
        ActionKind::Daiminkan => Daiminkan::new([own[0], own[1], own[2]], called, discarder).map(Meld::Daiminkan),
        _ => None,
    };
    let meld = meld.expect("meld claim already checked legal");
    for t in &own {
        let _ = game.player_mut(seat).hand.remove(*t);
    }
    let is_kan = meld.is_kan();
    game.player_mut(seat).melds.push(meld.clone());
    game.round.current_player = seat;
    game.round.phase = Phase::WaitAct;
    game.round.is_first_uninterrupted_go_around = false;
    break_ippatsu(game);

    let event = match action.kind {
        ActionKind::Chi => MjaiEvent::chi(seat, discarder, called, &own),
        ActionKind::Pon => MjaiEvent::pon(seat, discarder, called, &own),
        ActionKind::Daiminkan => MjaiEvent::daiminkan(seat, discarder, called, &own),
        _ => unreachable!(),
    };
    game.event_log.push(event.clone());

    let mut events = vec![event];
    if is_kan {
        let suukaikan = draw_rinshan(game, seat);
        if suukaikan {
            events.extend(apply_abortive_draw(game, "suukaikan"));
        }
    } else {
        game.round.current_drawn_tile = None;
    }
    events
}

/// Performs a kan's replacement draw, returning `true` if this was the fourth kan of the round
/// by more than one distinct player (suukaikan abort: four kans voids the hand unless all four
/// belong to the same player, who may still complete suukantsu).
fn draw_rinshan(game: &mut GameState, seat: Seat) -> bool {
    game.round.is_rinshan_draw = true;
    game.round.current_player = seat;
    game.round.kan_declarations.push(seat);
    draw_for_current_player(game);
    game.round.is_rinshan_draw = false;
    game.round.kan_declarations.len() >= 4
        && game.round.kan_declarations.iter().collect::<std::collections::HashSet<_>>().len() > 1
}

fn advance_turn_after_no_claim(game: &mut GameState) -> Vec<MjaiEvent> {
    let next = game.round.last_discard.map(|(s, _)| s.succ()).unwrap_or(game.round.current_player);
    game.round.current_player = next;
    game.round.phase = Phase::WaitAct;
    Vec::new()
}

fn mark_furiten_if_waiting_on_own_discard(game: &mut GameState, seat: Seat, discarded: Tile) {
    let player = game.player(seat);
    let num_sets = 4 - player.melds.len();
    let waits = crate::decomp::tenpai_waits(&player.hand.counts, num_sets);
    if waits.contains(&discarded.tile_type()) {
        game.player_mut(seat).furiten_permanent = true;
    }
}

fn break_ippatsu(game: &mut GameState) {
    for seat in Seat::ALL {
        game.player_mut(seat).ippatsu_eligible = false;
    }
}

fn apply_abortive_draw(game: &mut GameState, reason: &str) -> Vec<MjaiEvent> {
    log::info!("round aborted: {reason}");
    game.round.phase = Phase::RoundOver;
    let event = MjaiEvent::Ryukyoku { reason: reason.to_string(), scores_delta: [0; 4] };
    game.event_log.push(event.clone());
    vec![event]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;
    use crate::tile;

    fn setup() -> GameState {
        GameState::new(Rules::default(), 7)
    }

    #[test]
    fn discard_moves_phase_to_wait_response_and_offers_other_three_seats() {
        let mut game = setup();
        let hand = crate::hand::Hand::from_tiles(tile::tiles_from_mpsz("1112345678999m"));
        game.player_mut(Seat::East).hand = hand;
        let events = apply_discard(&mut game, Seat::East, "9m".parse().unwrap(), false);
        assert_eq!(game.round.phase, Phase::WaitResponse);
        assert_eq!(game.round.pending_claims.offered_to, vec![Seat::South, Seat::West, Seat::North]);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn no_claim_advances_turn_to_the_next_seat() {
        let mut game = setup();
        game.player_mut(Seat::East).hand = crate::hand::Hand::from_tiles(tile::tiles_from_mpsz("123m"));
        apply_discard(&mut game, Seat::East, "1m".parse().unwrap(), false);
        apply_wait_response(&mut game, vec![]).unwrap();
        assert_eq!(game.round.current_player, Seat::South);
        assert_eq!(game.round.phase, Phase::WaitAct);
    }

    #[test]
    fn ron_ends_the_round_and_pays_out() {
        let mut game = setup();
        game.player_mut(Seat::East).hand = crate::hand::Hand::from_tiles(tile::tiles_from_mpsz("123m"));
        game.player_mut(Seat::South).hand = crate::hand::Hand::from_tiles(tile::tiles_from_mpsz("23m567m345p678s55s"));
        apply_discard(&mut game, Seat::East, "1m".parse().unwrap(), false);
        game.round.pending_claims.tile = Some("4m".parse().unwrap());
        let submissions = vec![(Seat::South, Action::ron())];
        apply_wait_response(&mut game, submissions).unwrap();
        assert_eq!(game.round.phase, Phase::RoundOver);
        assert!(game.player(Seat::South).score > 25_000);
    }
}
