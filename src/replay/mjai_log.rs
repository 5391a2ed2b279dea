//! MJAI dialect replay --- parses a newline-delimited MJAI event log and re-simulates it against
//! a [`GameState`], trusting the log's hand/meld state (see the module doc on `super`) while
//! recomputing every `hora` record's han/fu/yaku from scratch via [`agari::evaluate_win`] and
//! comparing it against what the log claims.
//!
//! Limitation: this crate's [`MjaiEvent`] schema carries kan-dora reveals (`Dora`) but no ura-dora
//! reveal record, since ura indicators are conventionally withheld until a riichi win is scored
//! rather than broadcast as their own event. A verified win on a riichi hand therefore checks
//! han/fu/yaku net of ura dora; a log that privately awarded ura dora will disagree on han, and
//! the mismatch is reported rather than silently absorbed.

use crate::agari::{self, AgariRequest};
use crate::error::ReplayError;
use crate::meld::{Ankan, Chi, Daiminkan, Kakan, Meld, Pon};
use crate::mjai::MjaiEvent;
use crate::rules::Rules;
use crate::seat::Seat;
use crate::state::GameState;
use crate::tile::{Tile, TileType, WIND_E, WIND_N, WIND_S, WIND_W};
use crate::yaku::WinMethod;

use super::VerifiedWin;

/// Parses one JSON object per line, skipping blank lines.
pub fn parse_jsonl(text: &str) -> Result<Vec<MjaiEvent>, ReplayError> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(|e| ReplayError::MalformedLog(e.to_string())))
        .collect()
}

/// Replays `log` against a fresh [`GameState`] under `rules`, returning one [`VerifiedWin`] per
/// `hora` record whose recomputed score matched the log.
pub fn replay(log: &[MjaiEvent], rules: &Rules) -> Result<Vec<VerifiedWin>, ReplayError> {
    let mut game = GameState::new(rules.clone(), 0);
    let mut dora_markers: Vec<Tile> = Vec::new();
    let mut ura_markers: Vec<Tile> = Vec::new();
    let mut verified = Vec::new();

    for (index, event) in log.iter().enumerate() {
        match event {
            MjaiEvent::StartGame { .. } | MjaiEvent::EndKyoku | MjaiEvent::EndGame => {}

            MjaiEvent::StartKyoku { bakaze, honba, kyotaku, oya, dora_marker, tehais, scores, .. } => {
                let round_wind = bakaze_to_wind(bakaze).ok_or_else(|| malformed(index, "bakaze"))?;
                game.start_next_round(*oya, round_wind, *honba, *kyotaku, index as u64);
                for (seat, tiles) in Seat::ALL.iter().zip(tehais.iter()) {
                    let parsed = parse_tiles(tiles, index)?;
                    game.player_mut(*seat).hand = crate::hand::Hand::from_tiles(parsed);
                }
                for (seat, score) in Seat::ALL.iter().zip(scores.iter()) {
                    game.player_mut(*seat).score = *score;
                }
                dora_markers = vec![parse_tile(dora_marker, index)?];
                ura_markers.clear();
            }

            MjaiEvent::Tsumo { actor, pai } => {
                let tile = parse_tile(pai, index)?;
                if game.round.is_rinshan_draw {
                    game.round.wall.draw_replacement();
                } else {
                    game.round.wall.draw_live();
                }
                game.player_mut(*actor).hand.add(tile);
                game.round.current_drawn_tile = Some(tile);
                game.round.current_player = *actor;
            }

            MjaiEvent::Dahai { actor, pai, .. } => {
                let tile = parse_tile(pai, index)?;
                game.player_mut(*actor).hand.remove(tile)
                    .map_err(|_| malformed(index, "dahai tile not in hand"))?;
                game.player_mut(*actor).discards.push(tile);
                game.round.current_drawn_tile = None;
                game.round.last_discard = Some((*actor, tile));
                game.round.is_rinshan_draw = false;
                game.round.is_first_uninterrupted_go_around &= game.player(*actor).discards.len() <= 1;
            }

            MjaiEvent::Chi { actor, target, pai, consumed } => {
                let called = parse_tile(pai, index)?;
                let own = parse_tiles(consumed, index)?;
                if own.len() != 2 { return Err(malformed(index, "chi needs 2 consumed tiles")); }
                remove_all(&mut game, *actor, &own, index)?;
                let chi = Chi::new(own[0], own[1], called, *target).ok_or_else(|| malformed(index, "chi shape"))?;
                game.player_mut(*actor).melds.push(Meld::Chi(chi));
                game.round.is_first_uninterrupted_go_around = false;
                break_ippatsu(&mut game);
            }

            MjaiEvent::Pon { actor, target, pai, consumed } => {
                let called = parse_tile(pai, index)?;
                let own = parse_tiles(consumed, index)?;
                if own.len() != 2 { return Err(malformed(index, "pon needs 2 consumed tiles")); }
                remove_all(&mut game, *actor, &own, index)?;
                let pon = Pon::new(own[0], own[1], called, *target).ok_or_else(|| malformed(index, "pon shape"))?;
                game.player_mut(*actor).melds.push(Meld::Pon(pon));
                game.round.is_first_uninterrupted_go_around = false;
                break_ippatsu(&mut game);
            }

            MjaiEvent::Daiminkan { actor, target, pai, consumed } => {
                let called = parse_tile(pai, index)?;
                let own = parse_tiles(consumed, index)?;
                if own.len() != 3 { return Err(malformed(index, "daiminkan needs 3 consumed tiles")); }
                remove_all(&mut game, *actor, &own, index)?;
                let kan = Daiminkan::new([own[0], own[1], own[2]], called, *target)
                    .ok_or_else(|| malformed(index, "daiminkan shape"))?;
                game.player_mut(*actor).melds.push(Meld::Daiminkan(kan));
                game.round.is_rinshan_draw = true;
                game.round.is_first_uninterrupted_go_around = false;
                break_ippatsu(&mut game);
            }

            MjaiEvent::Ankan { actor, consumed } => {
                let tiles = parse_tiles(consumed, index)?;
                if tiles.len() != 4 { return Err(malformed(index, "ankan needs 4 consumed tiles")); }
                remove_all(&mut game, *actor, &tiles, index)?;
                let ankan = Ankan::new([tiles[0], tiles[1], tiles[2], tiles[3]])
                    .ok_or_else(|| malformed(index, "ankan shape"))?;
                game.player_mut(*actor).melds.push(Meld::Ankan(ankan));
                game.round.is_rinshan_draw = true;
                break_ippatsu(&mut game);
            }

            MjaiEvent::Kakan { actor, pai, .. } => {
                let added = parse_tile(pai, index)?;
                let pos = game.player(*actor).melds.iter()
                    .position(|m| matches!(m, Meld::Pon(p) if p.called.tile_type() == added.tile_type()))
                    .ok_or_else(|| malformed(index, "kakan has no matching pon"))?;
                let pon = match game.player(*actor).melds[pos] { Meld::Pon(p) => p, _ => unreachable!() };
                game.player_mut(*actor).hand.remove(added)
                    .map_err(|_| malformed(index, "kakan tile not in hand"))?;
                let kakan = Kakan::new(pon, added).ok_or_else(|| malformed(index, "kakan shape"))?;
                game.player_mut(*actor).melds[pos] = Meld::Kakan(kakan);
                game.round.is_rinshan_draw = true;
                game.round.pending_claims.is_kakan = true;
                break_ippatsu(&mut game);
            }

            MjaiEvent::Reach { .. } => {}

            MjaiEvent::ReachAccepted { actor } => {
                let player = game.player_mut(*actor);
                player.riichi_declared = true;
                player.ippatsu_eligible = true;
                player.double_riichi_eligible = player.discards.len() <= 1;
                player.riichi_discard_index = Some(player.discards.len().saturating_sub(1));
                player.score -= 1000;
                game.round.kyotaku += 1;
            }

            MjaiEvent::Dora { dora_marker } => {
                dora_markers.push(parse_tile(dora_marker, index)?);
            }

            MjaiEvent::Hora { actor, target, pai, yaku, han, fu, .. } => {
                let tile = parse_tile(pai, index)?;
                let method = if actor == target { WinMethod::Tsumo } else { WinMethod::Ron };
                let player = game.player(*actor);
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
                    is_tenhou: method == WinMethod::Tsumo && crate::engine::legal::is_tenhou(&game, *actor),
                    is_chiihou: method == WinMethod::Tsumo && crate::engine::legal::is_chiihou(&game, *actor),
                    seat: *actor,
                    dealer: game.round.dealer,
                    round_wind: game.round.round_wind,
                    discarder: *target,
                    dora_indicators: &dora_markers,
                    ura_indicators: &ura_markers,
                    honba: game.round.honba,
                    kyotaku: game.round.kyotaku,
                };
                let verdict = agari::evaluate_win(&req, &game.rules);
                let (mut engine_yaku, mut log_yaku) = (verdict.yaku.clone(), yaku.clone());
                engine_yaku.sort_unstable();
                log_yaku.sort_unstable();
                if verdict.han != *han || verdict.fu != *fu || engine_yaku != log_yaku {
                    log::warn!(
                        "replay scoring mismatch at hora index {index}: engine han={} fu={} yaku={:?}, \
                         log han={han} fu={fu} yaku={yaku:?}",
                        verdict.han, verdict.fu, verdict.yaku,
                    );
                    return Err(ReplayError::ScoringMismatch {
                        index,
                        engine_han: verdict.han,
                        engine_fu: verdict.fu,
                        engine_yaku: verdict.yaku,
                        log_han: *han,
                        log_fu: *fu,
                        log_yaku: yaku.clone(),
                    });
                }
                verified.push(VerifiedWin { index, han: verdict.han, fu: verdict.fu, yaku: verdict.yaku });
                game.round.phase = crate::state::Phase::RoundOver;
            }

            MjaiEvent::Ryukyoku { .. } => {
                game.round.phase = crate::state::Phase::RoundOver;
            }
        }
    }
    Ok(verified)
}

fn remove_all(game: &mut GameState, seat: Seat, tiles: &[Tile], index: usize) -> Result<(), ReplayError> {
    for t in tiles {
        game.player_mut(seat).hand.remove(*t).map_err(|_| malformed(index, "meld tile not in hand"))?;
    }
    Ok(())
}

fn break_ippatsu(game: &mut GameState) {
    for seat in Seat::ALL {
        game.player_mut(seat).ippatsu_eligible = false;
    }
}

fn bakaze_to_wind(s: &str) -> Option<TileType> {
    match s {
        "E" => Some(WIND_E),
        "S" => Some(WIND_S),
        "W" => Some(WIND_W),
        "N" => Some(WIND_N),
        _ => None,
    }
}

fn parse_tile(s: &str, index: usize) -> Result<Tile, ReplayError> {
    Tile::parse_mjai(s).ok_or_else(|| malformed(index, s))
}

fn parse_tiles(ss: &[String], index: usize) -> Result<Vec<Tile>, ReplayError> {
    ss.iter().map(|s| parse_tile(s, index)).collect()
}

fn malformed(index: usize, what: &str) -> ReplayError {
    ReplayError::MalformedLog(format!("at event index {index}: {what}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile;

    fn start_kyoku() -> MjaiEvent {
        MjaiEvent::StartKyoku {
            bakaze: "E".into(),
            kyoku: 1,
            honba: 0,
            kyotaku: 0,
            oya: Seat::East,
            dora_marker: "3s".into(),
            tehais: [
                tile::tiles_from_mpsz("123m").iter().map(|t| t.to_mjai()).collect(),
                tile::tiles_from_mpsz("23m567m345p678s55s").iter().map(|t| t.to_mjai()).collect(),
                vec![],
                vec![],
            ],
            scores: [25_000, 25_000, 25_000, 25_000],
        }
    }

    #[test]
    fn parses_one_json_object_per_line() {
        let text = "{\"type\":\"start_game\",\"names\":[\"a\",\"b\",\"c\",\"d\"]}\n\n{\"type\":\"end_game\"}\n";
        let events = parse_jsonl(text).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn replay_reproduces_a_logged_ron_exactly() {
        let log = vec![
            start_kyoku(),
            MjaiEvent::dahai(Seat::East, "1m".parse().unwrap(), false),
            MjaiEvent::hora(Seat::South, Seat::East, "4m".parse().unwrap(), vec![crate::yaku::Yaku::Pinfu.id(), crate::yaku::Yaku::Tanyao.id()], 2, 30, [0, 2900, -2900, 0]),
        ];
        let verified = replay(&log, &Rules::default()).unwrap();
        assert_eq!(verified.len(), 1);
        assert_eq!(verified[0].han, 2);
        assert_eq!(verified[0].fu, 30);
    }

    #[test]
    fn a_scoring_mismatch_is_reported_rather_than_swallowed() {
        let log = vec![
            start_kyoku(),
            MjaiEvent::dahai(Seat::East, "1m".parse().unwrap(), false),
            MjaiEvent::hora(Seat::South, Seat::East, "4m".parse().unwrap(), vec![crate::yaku::Yaku::Pinfu.id()], 5, 30, [0, 0, 0, 0]),
        ];
        let err = replay(&log, &Rules::default()).unwrap_err();
        assert!(matches!(err, ReplayError::ScoringMismatch { log_han: 5, .. }));
    }
}
