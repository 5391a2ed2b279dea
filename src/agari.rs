//! Agari facade 和了 --- the single entry point that turns (hand, melds, winning tile,
//! situation) into a final verdict, wiring the hand decomposer, yaku evaluator and score
//! calculator together (C2 → C3 → C4).

use crate::hand::Hand;
use crate::meld::Meld;
use crate::rules::Rules;
use crate::score::{self, Points};
use crate::seat::Seat;
use crate::tile::Tile;
use crate::yaku::{self, EvalContext, WinMethod, AKA_DORA_ID, DORA_ID, URA_DORA_ID};

/// Every fact about the winning hand the agari facade needs; the engine assembles this from
/// [`crate::state`] at the moment a win is claimed.
pub struct AgariRequest<'a> {
    pub hand_before_win: &'a Hand,
    pub melds: &'a [Meld],
    pub win_tile: Tile,
    pub method: WinMethod,
    pub is_riichi: bool,
    pub is_double_riichi: bool,
    pub is_ippatsu: bool,
    pub is_haitei: bool,
    pub is_houtei: bool,
    pub is_rinshan: bool,
    pub is_chankan: bool,
    pub is_tenhou: bool,
    pub is_chiihou: bool,
    pub seat: Seat,
    pub dealer: Seat,
    pub round_wind: u8,
    pub discarder: Seat,
    pub dora_indicators: &'a [Tile],
    pub ura_indicators: &'a [Tile],
    pub honba: u32,
    pub kyotaku: u32,
}

#[derive(Debug, Default)]
pub struct AgariVerdict {
    pub agari: bool,
    pub yakuman: bool,
    pub han: u32,
    pub fu: u32,
    pub yaku: Vec<u16>,
    pub payments: [Points; 4],
}

/// Runs the full C2→C3→C4 pipeline for one win claim.
pub fn evaluate_win(req: &AgariRequest, rules: &Rules) -> AgariVerdict {
    let mut hand = req.hand_before_win.clone();
    hand.add(req.win_tile);

    let ctx = EvalContext {
        win_tile: req.win_tile,
        method: req.method,
        is_riichi: req.is_riichi,
        is_double_riichi: req.is_double_riichi,
        is_ippatsu: req.is_ippatsu,
        is_haitei: req.is_haitei,
        is_houtei: req.is_houtei,
        is_rinshan: req.is_rinshan,
        is_chankan: req.is_chankan,
        is_tenhou: req.is_tenhou,
        is_chiihou: req.is_chiihou,
        seat_wind: seat_wind_type(req.seat, req.dealer),
        round_wind: req.round_wind,
        dora_types: req.dora_indicators.iter().map(|t| t.indicated_dora_type()).collect(),
        ura_dora_types: req.ura_indicators.iter().map(|t| t.indicated_dora_type()).collect(),
    };

    let result = yaku::evaluate(&hand, req.melds, &ctx);

    let non_dora_han: u32 = result.hits.iter()
        .filter(|h| !matches!(h.id, DORA_ID | AKA_DORA_ID | URA_DORA_ID))
        .map(|h| h.han as u32)
        .sum();
    let is_yakuman = result.yakuman_units > 0;
    if !is_yakuman && non_dora_han == 0 {
        // Yaku-shibari: dora alone never makes a win.
        return AgariVerdict::default();
    }

    let win_result = score::WinResult {
        han: result.han,
        fu: result.fu,
        yakuman_units: result.yakuman_units,
        method: match req.method { WinMethod::Tsumo => score::WinMethod::Tsumo, WinMethod::Ron => score::WinMethod::Ron },
        winner: req.seat,
        dealer: req.dealer,
        discarder: req.discarder,
        honba: req.honba,
        kyotaku: req.kyotaku,
    };
    let payments = score::distribute(rules, &win_result);

    AgariVerdict {
        agari: true,
        yakuman: is_yakuman,
        han: result.han,
        fu: result.fu,
        yaku: result.hits.iter().map(|h| h.id).collect(),
        payments,
    }
}

fn seat_wind_type(seat: Seat, dealer: Seat) -> u8 {
    crate::tile::WIND_E + seat.offset_from(dealer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile;

    fn base_req<'a>(hand: &'a Hand, win_tile: &'static str, method: WinMethod) -> AgariRequest<'a> {
        AgariRequest {
            hand_before_win: hand,
            melds: &[],
            win_tile: win_tile.parse().unwrap(),
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
            round_wind: crate::tile::WIND_E,
            discarder: Seat::South,
            dora_indicators: &[],
            ura_indicators: &[],
            honba: 0,
            kyotaku: 0,
        }
    }

    #[test]
    fn tanyao_pinfu_ron_produces_a_verdict() {
        let hand = Hand::from_tiles(tile::tiles_from_mpsz("23m567m345p678s55s"));
        let req = base_req(&hand, "4m", WinMethod::Ron);
        let verdict = evaluate_win(&req, &Rules::default());
        assert!(verdict.agari);
        assert!(!verdict.yakuman);
        assert_eq!(verdict.han, 2);
        assert_eq!(verdict.fu, 30);
        assert_eq!(verdict.payments[Seat::East.to_usize()], 2900);
        assert_eq!(verdict.payments[Seat::South.to_usize()], -2900);
    }

    #[test]
    fn dora_alone_is_not_a_win() {
        // 456m 456p 789s 11z 234s with no yaku, just happens to hold a dora; win tile irrelevant
        let hand = Hand::from_tiles(tile::tiles_from_mpsz("456m456p789s11z23s"));
        let mut req = base_req(&hand, "4s", WinMethod::Ron);
        let dora_indicator: Tile = "3s".parse().unwrap(); // indicates 4s
        req.dora_indicators = std::slice::from_ref(&dora_indicator);
        let verdict = evaluate_win(&req, &Rules::default());
        assert!(!verdict.agari);
    }

    #[test]
    fn kokushi_is_scored_as_yakuman() {
        let hand = Hand::from_tiles(tile::tiles_from_mpsz("19m19p19s1234567z"));
        let req = base_req(&hand, "1z", WinMethod::Ron);
        let verdict = evaluate_win(&req, &Rules::default());
        assert!(verdict.yakuman);
        assert_eq!(verdict.payments[Seat::East.to_usize()], 48000);
    }
}
