//! Score calculator 点数計算 --- turns han/fu plus situational facts into point payments.
//!
//! Grounded on the teacher's `engine/scoring.rs`: same `fu * 2^(han+2)` base-points formula,
//! same "round every individual transfer up to the next 100, nowhere else" rounding discipline,
//! same tsumo/ron payment shape. Tier thresholds and labels are this crate's own (see
//! `DESIGN.md`), not copied from the teacher.

use crate::rules::Rules;
use crate::seat::Seat;

pub type Points = i64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WinMethod {
    Tsumo,
    Ron,
}

/// One resolved win, ready to be turned into a point transfer.
#[derive(Copy, Clone, Debug)]
pub struct WinResult {
    pub han: u32,
    pub fu: u32,
    pub yakuman_units: u8,
    pub method: WinMethod,
    pub winner: Seat,
    pub dealer: Seat,
    /// The seat who discarded the winning tile; ignored for tsumo.
    pub discarder: Seat,
    pub honba: u32,
    pub kyotaku: u32,
}

/// Base points before the per-transfer ceiling. `fu` is ignored once a yakuman or a capped tier
/// applies.
pub fn base_points(rules: &Rules, han: u32, fu: u32, yakuman_units: u8) -> Points {
    if yakuman_units > 0 {
        return 8000 * yakuman_units as Points;
    }
    if rules.kiriage_mangan && is_kiriage_mangan(han, fu) {
        return 2000;
    }
    match han {
        0 => 0,
        1..=4 => {
            let raw = fu as Points * (1 << (han + 2));
            raw.min(2000)
        }
        5 => 2000,
        6 | 7 => 2000,
        8 | 9 | 10 => 3000,
        11 | 12 => 4000,
        _ => 8000, // kazoe-yakuman
    }
}

fn is_kiriage_mangan(han: u32, fu: u32) -> bool {
    (han == 4 && fu == 30) || (han == 3 && fu == 60)
}

fn ceil100(points: Points) -> Points { (points + 99) / 100 * 100 }

/// Per-seat point delta for this win (winner positive, payers negative), honba/kyotaku included.
pub fn distribute(rules: &Rules, result: &WinResult) -> [Points; 4] {
    let mut delta = [0 as Points; 4];
    let honba = result.honba as Points;
    match result.method {
        WinMethod::Tsumo => {
            let is_dealer_win = result.winner == result.dealer;
            for seat in Seat::ALL {
                if seat == result.winner { continue; }
                let k = if is_dealer_win { 2 } else if seat == result.dealer { 2 } else { 1 };
                let pts = ceil100(k * result_base(rules, result) + 100 * honba);
                delta[result.winner.to_usize()] += pts;
                delta[seat.to_usize()] -= pts;
            }
        }
        WinMethod::Ron => {
            let k = if result.winner == result.dealer { 6 } else { 4 };
            let pts = ceil100(k * result_base(rules, result) + 300 * honba);
            delta[result.winner.to_usize()] += pts;
            delta[result.discarder.to_usize()] -= pts;
        }
    }
    delta[result.winner.to_usize()] += result.kyotaku as Points * 1000;
    delta
}

fn result_base(rules: &Rules, result: &WinResult) -> Points {
    base_points(rules, result.han, result.fu, result.yakuman_units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;

    #[test]
    fn base_points_formula_matches_fu_han() {
        let rules = Rules::default();
        // 4han 30fu: 30 * 2^6 = 1920
        assert_eq!(base_points(&rules, 4, 30, 0), 1920);
        // 5han: capped mangan regardless of fu
        assert_eq!(base_points(&rules, 5, 30, 0), 2000);
    }

    #[test]
    fn yakuman_ignores_fu() {
        let rules = Rules::default();
        assert_eq!(base_points(&rules, 0, 0, 1), 8000);
        assert_eq!(base_points(&rules, 0, 0, 2), 16000);
    }

    #[test]
    fn dealer_ron_pays_six_times_base() {
        let rules = Rules::default();
        let result = WinResult {
            han: 4, fu: 30, yakuman_units: 0,
            method: WinMethod::Ron,
            winner: Seat::East, dealer: Seat::East, discarder: Seat::South,
            honba: 0, kyotaku: 0,
        };
        let delta = distribute(&rules, &result);
        assert_eq!(delta[Seat::East.to_usize()], 11700);
        assert_eq!(delta[Seat::South.to_usize()], -11700);
    }

    #[test]
    fn non_dealer_tsumo_splits_two_one_one_plus_honba() {
        let rules = Rules::default();
        let result = WinResult {
            han: 3, fu: 30, yakuman_units: 0,
            method: WinMethod::Tsumo,
            winner: Seat::South, dealer: Seat::East, discarder: Seat::South,
            honba: 1, kyotaku: 0,
        };
        let delta = distribute(&rules, &result);
        // base = 30 * 2^5 = 960 -> dealer pays ceil100(960*2+100)=2100, others ceil100(960+100)=1100 each
        assert_eq!(delta[Seat::East.to_usize()], -2100);
        assert_eq!(delta[Seat::West.to_usize()], -1100);
        assert_eq!(delta[Seat::North.to_usize()], -1100);
        assert_eq!(delta[Seat::South.to_usize()], 2100 + 1100 + 1100);
    }

    #[test]
    fn kiriage_mangan_rounds_up_when_enabled() {
        let mut rules = Rules::default();
        rules.kiriage_mangan = true;
        assert_eq!(base_points(&rules, 4, 30, 0), 2000);
        let mut rules_off = Rules::default();
        rules_off.kiriage_mangan = false;
        assert_eq!(base_points(&rules_off, 4, 30, 0), 1920);
    }
}
