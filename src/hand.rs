//! Hand 手牌 --- the concealed tiles held by one player, as a count vector over the 34 tile
//! types (plus which physical copy, if any, is the red five of each numeral-5 type).
//!
//! Count vectors (not raw tile-id lists) are the canonical form used by the decomposer and the
//! yaku evaluator; conversion from/to the 136-id list happens only at the boundary (drawing,
//! discarding, melding), which keeps the combinatorial search free of tile-identity bookkeeping.

use std::fmt::Write as _;

use crate::meld::{Ankan, Chi, Daiminkan, Kakan, Meld, Pon};
use crate::seat::Seat;
use crate::tile::{self, Tile, NUM_TILE_TYPES, RED_FIVE_TYPES};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    pub counts: [u8; NUM_TILE_TYPES],
    /// Whether the copy of the 5m/5p/5s (index 0/1/2) currently held is the red one.
    pub reds: [bool; 3],
}

impl Hand {
    pub fn from_tiles<I: IntoIterator<Item = Tile>>(tiles: I) -> Self {
        let mut hand = Hand::default();
        for t in tiles {
            hand.add(t);
        }
        hand
    }

    pub fn total(&self) -> u32 { self.counts.iter().map(|&c| c as u32).sum() }

    pub fn count(&self, tile_type: u8) -> u8 { self.counts[tile_type as usize] }

    pub fn add(&mut self, tile: Tile) {
        self.counts[tile.tile_type() as usize] += 1;
        if let Some(i) = red_slot(tile) {
            if tile.is_red() { self.reds[i] = true; }
        }
    }

    /// Removes one copy of `tile`'s type; if `tile` was the red five, clears the red flag.
    pub fn remove(&mut self, tile: Tile) -> Result<(), crate::error::ActionError> {
        let idx = tile.tile_type() as usize;
        if self.counts[idx] == 0 {
            return Err(crate::error::ActionError::TileNotInHand(tile));
        }
        self.counts[idx] -= 1;
        if let Some(i) = red_slot(tile) {
            if tile.is_red() { self.reds[i] = false; }
        }
        Ok(())
    }

    pub fn has(&self, tile: Tile) -> bool { self.counts[tile.tile_type() as usize] > 0 }

    /// Number of red fives currently held.
    pub fn red_five_count(&self) -> u32 { self.reds.iter().filter(|&&r| r).count() as u32 }

    /// Whether holding one more of `tile_type` would require using the red five (i.e. this is
    /// rank-5 of a suit, the red copy isn't held yet, and at most one normal copy remains to add
    /// before the red copy becomes the only option left in a fresh 4-copy deck).
    pub fn next_copy_is_forced_red(&self, tile_type: u8) -> bool {
        if let Some(i) = RED_FIVE_TYPES.iter().position(|&t| t == tile_type) {
            !self.reds[i] && self.counts[tile_type as usize] >= 3
        } else {
            false
        }
    }

    /// Picks a concrete [`Tile`] identity for `tile_type` to add/remove, preferring the red five
    /// if present (for removal) or forcing red only when required (for addition via `draw_red`).
    pub fn representative_tile(&self, tile_type: u8, prefer_red: bool) -> Tile {
        if prefer_red {
            if let Some(i) = RED_FIVE_TYPES.iter().position(|&t| t == tile_type) {
                if self.reds[i] {
                    return Tile::red_five(i as u8).unwrap();
                }
            }
        }
        Tile::from_type(tile_type).unwrap()
    }

    pub fn to_mpsz(&self) -> String {
        let mut s = String::new();
        for suit in 0u8..3 {
            let mut any = false;
            for rank in 1u8..=9 {
                let tile_type = suit * 9 + rank - 1;
                let mut n = self.counts[tile_type as usize];
                if rank == 5 && self.reds[suit as usize] {
                    write!(s, "0").unwrap();
                    n -= 1;
                    any = true;
                }
                for _ in 0..n {
                    write!(s, "{}", rank).unwrap();
                    any = true;
                }
            }
            if any { s.push(['m', 'p', 's'][suit as usize]); }
        }
        let mut any_honor = false;
        for rank in 1u8..=7 {
            let tile_type = 27 + rank - 1;
            for _ in 0..self.counts[tile_type as usize] {
                write!(s, "{}", rank).unwrap();
                any_honor = true;
            }
        }
        if any_honor { s.push('z'); }
        s
    }
}

fn red_slot(tile: Tile) -> Option<usize> {
    RED_FIVE_TYPES.iter().position(|&t| t == tile.tile_type())
}

/// Parses the full MPSZ notation for a hand plus trailing meld groups, e.g.
/// `"123m456p789s2z(p1z0)"`. The leading (non-parenthesized) run is the closed hand; each
/// `(...)` group is one meld, prefixed by its kind letter: `c` chi, `p` pon, `d` daiminkan,
/// `a` ankan, `k` kakan.
///
/// The source seat of a called meld is not recoverable from MPSZ alone (the notation does not
/// encode it), so parsed melds default to [`Seat::East`] as the source; round-tripping compares
/// tile identity, not source seat.
pub fn parse_hand_with_melds(s: &str) -> Option<(Hand, Vec<Meld>)> {
    let (hand_part, rest) = match s.find('(') {
        Some(pos) => (&s[..pos], &s[pos..]),
        None => (s, ""),
    };
    let hand = Hand::from_tiles(tile::tiles_from_mpsz(hand_part));

    let mut melds = Vec::new();
    let mut remaining = rest;
    while !remaining.is_empty() {
        let close = remaining.find(')')?;
        let group = &remaining[1..close]; // strip leading '('
        remaining = &remaining[close + 1..];
        let kind = group.chars().next()?;
        let tiles = tile::tiles_from_mpsz(&group[1..]);
        melds.push(meld_from_kind_and_tiles(kind, &tiles)?);
    }
    Some((hand, melds))
}

fn meld_from_kind_and_tiles(kind: char, tiles: &[Tile]) -> Option<Meld> {
    match kind {
        'c' => {
            if tiles.len() != 3 { return None; }
            let mut sorted = tiles.to_vec();
            sorted.sort_by_key(|t| t.rank());
            Chi::new(sorted[0], sorted[1], sorted[2], Seat::East).map(Meld::Chi)
        }
        'p' => {
            if tiles.len() != 3 { return None; }
            Pon::new(tiles[0], tiles[1], tiles[2], Seat::East).map(Meld::Pon)
        }
        'd' => {
            if tiles.len() != 4 { return None; }
            Daiminkan::new([tiles[0], tiles[1], tiles[2]], tiles[3], Seat::East).map(Meld::Daiminkan)
        }
        'a' => {
            if tiles.len() != 4 { return None; }
            Ankan::new([tiles[0], tiles[1], tiles[2], tiles[3]]).map(Meld::Ankan)
        }
        'k' => {
            if tiles.len() != 4 { return None; }
            let pon = Pon::new(tiles[0], tiles[1], tiles[2], Seat::East)?;
            Kakan::new(pon, tiles[3]).map(Meld::Kakan)
        }
        _ => None,
    }
}

pub fn format_hand_with_melds(hand: &Hand, melds: &[Meld]) -> String {
    let mut s = hand.to_mpsz();
    for meld in melds {
        let kind = match meld {
            Meld::Chi(_) => 'c',
            Meld::Pon(_) => 'p',
            Meld::Daiminkan(_) => 'd',
            Meld::Ankan(_) => 'a',
            Meld::Kakan(_) => 'k',
        };
        let meld_hand = Hand::from_tiles(meld.tiles());
        write!(s, "({}{})", kind, meld_hand.to_mpsz()).unwrap();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn closed_hand_roundtrip() {
        for mpsz in ["123m456p789s2z", "11122233344z", "0m0p0s123456m"] {
            let hand = Hand::from_tiles(tile::tiles_from_mpsz(mpsz));
            let back = Hand::from_tiles(tile::tiles_from_mpsz(&hand.to_mpsz()));
            assert_eq!(hand, back);
        }
    }

    #[test]
    fn hand_with_meld_roundtrip() {
        let s = "123m456p789s2z(p111z)";
        let (hand, melds) = parse_hand_with_melds(s).unwrap();
        assert_eq!(melds.len(), 1);
        let reformatted = format_hand_with_melds(&hand, &melds);
        let (hand2, melds2) = parse_hand_with_melds(&reformatted).unwrap();
        assert_eq!(hand, hand2);
        assert_eq!(melds[0].tiles().len(), melds2[0].tiles().len());
    }
}
