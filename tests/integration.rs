//! End-to-end scenarios, driven from outside the crate the way a caller (bot, replay driver, UI)
//! would.

use riichi::agari::{self, AgariRequest};
use riichi::engine::{self, Action};
use riichi::hand::Hand;
use riichi::meld::{Meld, Pon};
use riichi::mjai::MjaiEvent;
use riichi::rules::Rules;
use riichi::seat::Seat;
use riichi::state::{GameState, Phase};
use riichi::tile::{self, Tile, WIND_E, WIND_S};
use riichi::yaku::{Yaku, WinMethod};

fn base_req<'a>(hand: &'a Hand, win_tile: Tile, method: WinMethod) -> AgariRequest<'a> {
    AgariRequest {
        hand_before_win: hand,
        melds: &[],
        win_tile,
        method,
        is_riichi: false,
        is_double_riichi: false,
        is_ippatsu: false,
        is_haitei: false,
        is_houtei: false,
        is_rinshan: false,
        is_chankan: false,
        is_tenhou: false,
        is_chiihou: false,
        seat: Seat::East,
        dealer: Seat::East,
        round_wind: WIND_E,
        discarder: Seat::South,
        dora_indicators: &[],
        ura_indicators: &[],
        honba: 0,
        kyotaku: 0,
    }
}

#[test]
fn agari_calc_2_han_40_fu() {
    // 123m456p789s111z, win on 2z (tanki), dealer, East round: the 111z triplet of East wind
    // scores both the round-wind and seat-wind yakuhai for a dealer in East round.
    let hand = Hand::from_tiles(tile::tiles_from_mpsz("123m456p789s111z"));
    let win_tile: Tile = "2z".parse().unwrap();
    let req = base_req(&hand, win_tile, WinMethod::Ron);
    let verdict = agari::evaluate_win(&req, &Rules::default());
    assert!(verdict.agari);
    assert_eq!(verdict.han, 2);
    assert_eq!(verdict.fu, 40);
    assert_eq!(verdict.payments[Seat::East.to_usize()], 3900);
}

#[test]
fn round_wind_yaku_is_read_from_the_request_not_hardcoded_to_east() {
    // Dealer is South; winner is East, three seats downstream of the dealer, so seat_wind is
    // North. round_wind is South (not East) --- a hardcoded East would miss this yakuhai.
    let hand = Hand::from_tiles(tile::tiles_from_mpsz("111m222m333m9p"));
    let win_tile: Tile = "9p".parse().unwrap();
    let own1 = Tile::from_type_copy(riichi::tile::WIND_S, 0).unwrap();
    let own2 = Tile::from_type_copy(riichi::tile::WIND_S, 1).unwrap();
    let called = Tile::from_type_copy(riichi::tile::WIND_S, 2).unwrap();
    let pon = Pon::new(own1, own2, called, Seat::West).unwrap();
    let melds = [Meld::Pon(pon)];

    let mut req = base_req(&hand, win_tile, WinMethod::Ron);
    req.melds = &melds;
    req.seat = Seat::East;
    req.dealer = Seat::South;
    req.round_wind = WIND_S;

    let verdict = agari::evaluate_win(&req, &Rules::default());
    assert!(verdict.agari);
    assert!(verdict.yaku.contains(&Yaku::YakuhaiRoundS.id()));
    assert!(!verdict.yaku.contains(&Yaku::YakuhaiRoundE.id()));
}

#[test]
fn temporary_furiten_without_yaku_still_blocks_ron() {
    let mut game = GameState::new(Rules::default(), 3);
    // South's only shape-valid wait is the 4m kanchan, and the completed hand carries no yaku
    // (no tanyao: 1m/9s/11s are terminal; no yakuhai, pinfu, etc). Ron is never a legal action
    // here regardless of furiten, but the pass must still set furiten --- the gap this exercises
    // is that furiten used to only get set when Ron had been hidden by an actual declined Ron,
    // never when yaku-shibari hid Ron from the legal-action list in the first place.
    game.player_mut(Seat::South).hand = Hand::from_tiles(tile::tiles_from_mpsz("123m456p789s11s35m"));

    discard(&mut game, Seat::East, "4m");
    let south_response = engine::legal::legal_wait_response(&game, Seat::South);
    assert!(!south_response.iter().any(|a| a.kind == engine::ActionKind::Ron));

    engine::apply_wait_response(&mut game, vec![]).unwrap();
    assert!(game.player(Seat::South).furiten_temporary);

    // A second copy of the same waited-on tile, discarded by a different seat later in the same
    // go-around, still can't be ronned: furiten persists until South's own next draw.
    discard(&mut game, Seat::West, "4m");
    let south_response = engine::legal::legal_wait_response(&game, Seat::South);
    assert!(!south_response.iter().any(|a| a.kind == engine::ActionKind::Ron));
    assert!(game.player(Seat::South).furiten_temporary);
}

/// Sets `seat` up as the current actor mid-draw and discards `mpsz`, leaving the round in
/// `Phase::WaitResponse` with the discard's claim window open.
fn discard(game: &mut GameState, seat: Seat, mpsz: &str) {
    let tile: Tile = mpsz.parse().unwrap();
    game.round.current_player = seat;
    game.round.phase = Phase::WaitAct;
    game.round.current_drawn_tile = Some(tile);
    game.player_mut(seat).hand.add(tile);
    engine::apply_wait_act(game, seat, Action::discard(tile)).unwrap();
}

#[test]
fn honba_accounting_non_dealer_ron() {
    let mut game = GameState::new(Rules::default(), 1);
    game.round.honba = 5;
    game.advance_round(false, 9); // non-renchan: dealer rotates, honba resets to 0
    assert_eq!(game.round.dealer, Seat::South);
    assert_eq!(game.round.honba, 0);
}

#[test]
fn honba_accounting_dealer_tsumo() {
    let mut game = GameState::new(Rules::default(), 1);
    game.round.honba = 5;
    game.advance_round(true, 9); // renchan: dealer repeats, honba bumps
    assert_eq!(game.round.dealer, Seat::East);
    assert_eq!(game.round.honba, 6);
}

#[test]
fn claim_priority_pon_beats_chi() {
    let mut game = GameState::new(Rules::default(), 5);
    game.player_mut(Seat::South).hand = Hand::from_tiles(tile::tiles_from_mpsz("57p"));
    game.player_mut(Seat::West).hand = Hand::from_tiles(tile::tiles_from_mpsz("66p"));

    discard(&mut game, Seat::East, "6p");
    assert_eq!(game.round.phase, Phase::WaitResponse);
    let tile: Tile = "6p".parse().unwrap();

    let chi = Action::chi(tile, ["5p".parse().unwrap(), "7p".parse().unwrap()]);
    let pon = Action::pon(tile, ["6p".parse().unwrap(), "6p".parse().unwrap()]);
    let events = engine::apply_wait_response(&mut game, vec![(Seat::South, chi), (Seat::West, pon)]).unwrap();

    assert!(matches!(events[0], MjaiEvent::Pon { actor: Seat::West, .. }));
    assert_eq!(game.round.current_player, Seat::West);
    assert_eq!(game.round.phase, Phase::WaitAct);
}

#[test]
fn replaying_the_same_actions_from_the_same_seed_is_byte_for_byte_identical() {
    fn run(seed: u64) -> Vec<MjaiEvent> {
        let mut game = GameState::new(Rules::default(), seed);
        discard(&mut game, Seat::East, "1m");
        game.event_log.clone()
    }
    assert_eq!(run(42), run(42));
}
