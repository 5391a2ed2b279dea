//! Hand decomposer --- enumerates every way to read the concealed portion of a winning hand as
//! (head pair) + N sets, plus the two irregular shapes (chiitoitsu, kokushi musou).
//!
//! Works purely on 34-length count vectors; the 136-id tile list is only consulted at the
//! boundary (see [`crate::hand::Hand`]) because tile identity does not matter to the shape
//! search, only tile *type* does.

use crate::tile::NUM_TILE_TYPES;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConcealedSet {
    /// Three consecutive tiles in one suit, starting at this tile type.
    Sequence(u8),
    /// Three identical tiles of this tile type.
    Triplet(u8),
}

impl ConcealedSet {
    pub fn tile_types(&self) -> [u8; 3] {
        match self {
            ConcealedSet::Sequence(t) => [*t, *t + 1, *t + 2],
            ConcealedSet::Triplet(t) => [*t, *t, *t],
        }
    }
}

/// One valid standard decomposition of the closed portion of a hand: a pair plus exactly
/// `sets.len()` sets (melds fill in the remainder up to 4 total sets).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decomposition {
    pub pair: u8,
    pub sets: Vec<ConcealedSet>,
}

/// Enumerates every standard decomposition of `counts` into one pair and exactly
/// `num_concealed_sets` sets. `counts` must already exclude any tiles tied up in melds.
pub fn decompose_standard(counts: &[u8; NUM_TILE_TYPES], num_concealed_sets: usize) -> Vec<Decomposition> {
    let mut results = Vec::new();
    let total: u32 = counts.iter().map(|&c| c as u32).sum();
    if total != 2 + 3 * num_concealed_sets as u32 {
        return results;
    }
    for pair_type in 0u8..NUM_TILE_TYPES as u8 {
        if counts[pair_type as usize] < 2 { continue; }
        let mut residual = *counts;
        residual[pair_type as usize] -= 2;
        let mut sets = Vec::with_capacity(num_concealed_sets);
        find_sets(&mut residual, 0, num_concealed_sets, &mut sets, &mut |found| {
            results.push(Decomposition { pair: pair_type, sets: found.to_vec() });
        });
    }
    results
}

fn find_sets(
    counts: &mut [u8; NUM_TILE_TYPES],
    start: u8,
    remaining: usize,
    current: &mut Vec<ConcealedSet>,
    on_success: &mut impl FnMut(&[ConcealedSet]),
) {
    if remaining == 0 {
        if counts.iter().all(|&c| c == 0) {
            on_success(current);
        }
        return;
    }
    let idx = match (start..NUM_TILE_TYPES as u8).find(|&i| counts[i as usize] > 0) {
        Some(i) => i,
        None => return,
    };

    if counts[idx as usize] >= 3 {
        counts[idx as usize] -= 3;
        current.push(ConcealedSet::Triplet(idx));
        find_sets(counts, idx, remaining - 1, current, on_success);
        current.pop();
        counts[idx as usize] += 3;
    }

    let is_suited = idx < 27;
    let rank_in_suit = idx % 9;
    if is_suited && rank_in_suit <= 6 {
        let (i0, i1, i2) = (idx as usize, idx as usize + 1, idx as usize + 2);
        if counts[i0] > 0 && counts[i1] > 0 && counts[i2] > 0 {
            counts[i0] -= 1;
            counts[i1] -= 1;
            counts[i2] -= 1;
            current.push(ConcealedSet::Sequence(idx));
            find_sets(counts, idx, remaining - 1, current, on_success);
            current.pop();
            counts[i0] += 1;
            counts[i1] += 1;
            counts[i2] += 1;
        }
    }
}

/// Chiitoitsu (七対子): exactly 7 distinct pairs. Only valid for a fully concealed 14-tile hand.
pub fn is_chiitoitsu(counts: &[u8; NUM_TILE_TYPES]) -> bool {
    let pairs = counts.iter().filter(|&&c| c == 2).count();
    let others_zero = counts.iter().all(|&c| c == 0 || c == 2);
    pairs == 7 && others_zero
}

/// Kokushi musou (国士無双): one of each of the 13 terminal-or-honor types, plus one duplicate.
/// Returns `Some(pair_type)` (the doubled type) if the hand qualifies, purely for informational
/// display; returns `None` for a non-kokushi hand.
pub fn kokushi_pair_type(counts: &[u8; NUM_TILE_TYPES]) -> Option<u8> {
    const TERMINAL_OR_HONOR: [u8; 13] = [0, 8, 9, 17, 18, 26, 27, 28, 29, 30, 31, 32, 33];
    let mut pair_type = None;
    for t in 0u8..NUM_TILE_TYPES as u8 {
        let is_terminal_or_honor = TERMINAL_OR_HONOR.contains(&t);
        let c = counts[t as usize];
        if !is_terminal_or_honor {
            if c != 0 { return None; }
        } else {
            match c {
                0 => return None,
                1 => {}
                2 => {
                    if pair_type.is_some() { return None; }
                    pair_type = Some(t);
                }
                _ => return None,
            }
        }
    }
    pair_type
}

pub fn is_kokushi(counts: &[u8; NUM_TILE_TYPES]) -> bool { kokushi_pair_type(counts).is_some() }

/// Whether `counts` (14 tiles: 2 + 3*num_concealed_sets, after melds are accounted for) forms a
/// complete hand under any shape (standard, chiitoitsu, kokushi). Used by tsumo/ron detection.
pub fn is_agari(counts: &[u8; NUM_TILE_TYPES], num_concealed_sets: usize) -> bool {
    if num_concealed_sets == 4 && (is_chiitoitsu(counts) || is_kokushi(counts)) { return true; }
    !decompose_standard(counts, num_concealed_sets).is_empty()
}

/// The set of tile types that would complete a 13-tile-equivalent `counts` (i.e.
/// `2 + 3*num_concealed_sets - 1` tiles) into a winning hand, trying every candidate addition.
/// Used for tenpai checks, riichi eligibility, and furiten wait-set computation.
pub fn tenpai_waits(counts: &[u8; NUM_TILE_TYPES], num_concealed_sets: usize) -> Vec<u8> {
    let mut waits = Vec::new();
    for t in 0u8..NUM_TILE_TYPES as u8 {
        if counts[t as usize] >= 4 { continue; }
        let mut candidate = *counts;
        candidate[t as usize] += 1;
        if is_agari(&candidate, num_concealed_sets) { waits.push(t); }
    }
    waits
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn counts_from_mpsz(s: &str) -> [u8; NUM_TILE_TYPES] {
        let tiles = crate::tile::tiles_from_mpsz(s);
        let mut c = [0u8; NUM_TILE_TYPES];
        for t in tiles { c[t.tile_type() as usize] += 1; }
        c
    }

    #[test]
    fn ambiguous_shape_has_two_interpretations() {
        // 111222333m reads as either 3 triplets or 3 sequences; 456p + 99s fill out the rest.
        let counts = counts_from_mpsz("111222333m456p99s");
        let decomps = decompose_standard(&counts, 4);
        assert_eq!(decomps.len(), 2);
    }

    #[test]
    fn simple_standard_hand_has_one_decomposition() {
        let counts = counts_from_mpsz("123m456p789s22s111z");
        let decomps = decompose_standard(&counts, 4);
        assert_eq!(decomps.len(), 1);
    }

    #[test]
    fn chiitoitsu_detection() {
        let counts = counts_from_mpsz("1122334455667z");
        assert!(!is_chiitoitsu(&counts)); // 13 tiles, not a complete hand
        let counts = counts_from_mpsz("11223344556677z");
        assert!(is_chiitoitsu(&counts));
    }

    #[test]
    fn kokushi_detection() {
        let counts = counts_from_mpsz("19m19p19s1234567z1z");
        assert!(is_kokushi(&counts));
        let counts = counts_from_mpsz("19m19p19s1234567z2m");
        assert!(!is_kokushi(&counts));
    }

    #[test]
    fn non_waiting_hand_has_no_decomposition() {
        let counts = counts_from_mpsz("1113579m123p123s1z");
        let decomps = decompose_standard(&counts, 4);
        assert!(decomps.is_empty());
    }

    #[test]
    fn ryanmen_shape_waits_on_both_sides() {
        // 13 tiles: 234m567m345p78s + pair 55s, waiting on 6s or 9s
        let counts = counts_from_mpsz("234m567m345p78s55s");
        let mut waits = tenpai_waits(&counts, 4);
        waits.sort_unstable();
        assert_eq!(waits, vec![23, 26]); // 7s,8s held -> waits 6s(idx23) and 9s(idx26)
    }

    #[test]
    fn complete_hand_has_no_waits_since_its_already_full() {
        let counts = counts_from_mpsz("123m456p789s22s111z");
        assert!(is_agari(&counts, 4));
    }
}
