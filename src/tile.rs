//! Tile 牌
//!
//! See [`Tile`]. Unlike a 0..=36 "one red id per suit" encoding, this crate keeps the full
//! 136-tile identity: every physical tile (including every copy of every red 5) has its own id,
//! because melds and the wall need to track *which physical copy* is where.
//!
//! ## Ref
//! - <https://ja.wikipedia.org/wiki/%E9%BA%BB%E9%9B%80%E7%89%8C>
//! - <https://en.wikipedia.org/wiki/Mahjong_tiles>

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One physical tile, identified by its position in the canonical 136-tile deck.
///
/// Encoding: `id / 4` is the *tile type* (0..=33); `id % 4` is the copy index (0..=3).
///
/// | Type range | Shorthand    | Suit (EN)  |
/// |------------|--------------|------------|
/// | 0  ..=  8  | 1m  ..=  9m  | characters |
/// | 9  ..= 17  | 1p  ..=  9p  | dots       |
/// | 18 ..= 26  | 1s  ..=  9s  | bamboos    |
/// | 27 ..= 33  | E,S,W,N,P,F,C| honors     |
///
/// The first copy (copy index 0) of every 5 (types 4, 13, 22) is the red five: ids 16, 52, 88.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tile(u8);

/// A tile type: one of the 34 kinds a hand is counted over (ignores red-ness and copy index).
pub type TileType = u8;

pub const NUM_TILE_TYPES: usize = 34;
pub const NUM_TILES: usize = 136;

/// Canonical tile-type indices of the red fives.
pub const RED_FIVE_TYPES: [TileType; 3] = [4, 13, 22];
/// Canonical tile ids of the three red fives in a standard 136-tile set.
pub const RED_FIVE_IDS: [u8; 3] = [16, 52, 88];

pub const WIND_E: TileType = 27;
pub const WIND_S: TileType = 28;
pub const WIND_W: TileType = 29;
pub const WIND_N: TileType = 30;
pub const DRAGON_HAKU: TileType = 31;
pub const DRAGON_HATSU: TileType = 32;
pub const DRAGON_CHUN: TileType = 33;

impl Tile {
    pub const fn from_id(id: u8) -> Option<Self> {
        if (id as usize) < NUM_TILES { Some(Self(id)) } else { None }
    }

    /// Constructs the tile with the given type and copy index (0..=3).
    pub const fn from_type_copy(tile_type: TileType, copy: u8) -> Option<Self> {
        if (tile_type as usize) >= NUM_TILE_TYPES || copy > 3 { return None; }
        Self::from_id(tile_type * 4 + copy)
    }

    /// Constructs the non-red representative of a tile type (copy index 1, never red).
    pub const fn from_type(tile_type: TileType) -> Option<Self> {
        Self::from_type_copy(tile_type, 1)
    }

    /// Constructs the red-five tile of the given suit (0=m, 1=p, 2=s).
    pub const fn red_five(suit: u8) -> Option<Self> {
        if suit > 2 { return None; }
        Self::from_id(RED_FIVE_IDS[suit as usize])
    }

    pub const fn id(self) -> u8 { self.0 }
    pub const fn tile_type(self) -> TileType { self.0 / 4 }
    pub const fn copy_index(self) -> u8 { self.0 % 4 }

    pub const fn is_red(self) -> bool {
        self.0 == RED_FIVE_IDS[0] || self.0 == RED_FIVE_IDS[1] || self.0 == RED_FIVE_IDS[2]
    }

    pub const fn is_man(self) -> bool { self.tile_type() <= 8 }
    pub const fn is_pin(self) -> bool { self.tile_type() >= 9 && self.tile_type() <= 17 }
    pub const fn is_sou(self) -> bool { self.tile_type() >= 18 && self.tile_type() <= 26 }
    pub const fn is_honor(self) -> bool { self.tile_type() >= 27 }
    pub const fn is_numeral(self) -> bool { !self.is_honor() }
    pub const fn is_wind(self) -> bool { self.tile_type() >= WIND_E && self.tile_type() <= WIND_N }
    pub const fn is_dragon(self) -> bool { self.tile_type() >= DRAGON_HAKU && self.tile_type() <= DRAGON_CHUN }

    /// "Suit" index for numerals: 0=m, 1=p, 2=s. Undefined (but harmless) for honors.
    pub const fn suit(self) -> u8 { self.tile_type() / 9 }
    /// Rank 1..=9 for numerals, 1..=7 for honors (E..C).
    pub const fn rank(self) -> u8 { self.tile_type() % 9 + 1 }

    pub const fn is_terminal_rank(self) -> bool {
        self.is_numeral() && (self.rank() == 1 || self.rank() == 9)
    }
    /// Terminal-or-honor (幺九牌): pure terminal or any honor.
    pub const fn is_terminal(self) -> bool {
        self.is_terminal_rank() || self.is_honor()
    }
    pub const fn is_simple(self) -> bool { !self.is_terminal() }

    /// The tile ranked one higher in the same suit, if it exists (numerals only).
    pub const fn succ(self) -> Option<Self> {
        if self.is_numeral() && self.rank() <= 8 {
            Self::from_type(self.tile_type() + 1)
        } else { None }
    }
    /// The tile ranked two higher in the same suit, if it exists (numerals only).
    pub const fn succ2(self) -> Option<Self> {
        if self.is_numeral() && self.rank() <= 7 {
            Self::from_type(self.tile_type() + 2)
        } else { None }
    }
    /// The tile ranked one lower in the same suit, if it exists (numerals only).
    pub const fn pred(self) -> Option<Self> {
        if self.is_numeral() && self.rank() >= 2 {
            Self::from_type(self.tile_type() - 1)
        } else { None }
    }

    /// Given this tile as a dora indicator, returns the indicated dora tile type.
    /// Numerals cycle 9->1 within suit; winds cycle N->E, E->S->W->N; dragons cycle
    /// haku->hatsu->chun->haku.
    pub const fn indicated_dora_type(self) -> TileType {
        let t = self.tile_type();
        match t {
            0..=8 => if t == 8 { 0 } else { t + 1 },
            9..=17 => if t == 17 { 9 } else { t + 1 },
            18..=26 => if t == 26 { 18 } else { t + 1 },
            27..=30 => if t == 30 { 27 } else { t + 1 }, // E,S,W,N cycle
            31..=33 => if t == 33 { 31 } else { t + 1 }, // haku,hatsu,chun cycle
            _ => unreachable!(),
        }
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Tile {
    /// Orders by (type, red-before-normal) so that e.g. 0m < 5m (red precedes the rest of its
    /// rank) while still grouping all copies of the same type together.
    fn cmp(&self, other: &Self) -> Ordering {
        self.tile_type().cmp(&other.tile_type())
            .then_with(|| other.is_red().cmp(&self.is_red()))
            .then_with(|| self.copy_index().cmp(&other.copy_index()))
    }
}

// --- Text conversions -------------------------------------------------------------------------

const SUIT_CHARS: [char; 4] = ['m', 'p', 's', 'z'];
const HONOR_MJAI: [&str; 7] = ["E", "S", "W", "N", "P", "F", "C"];

fn suit_from_char(c: char) -> Option<u8> {
    match c {
        'm' => Some(0),
        'p' => Some(1),
        's' => Some(2),
        'z' => Some(3),
        _ => None,
    }
}

impl Tile {
    /// The MPSZ rank digit for this tile's type (0 reserved for "this copy is red").
    fn mpsz_rank_digit(self) -> u8 {
        if self.is_honor() { self.rank() } else { self.rank() }
    }

    /// Renders as MPSZ shorthand, e.g. "5m", or "0m" if this copy is the red five.
    pub fn to_mpsz(self) -> String {
        let digit = if self.is_red() { 0 } else { self.mpsz_rank_digit() };
        format!("{}{}", digit, SUIT_CHARS[self.suit_index()])
    }

    fn suit_index(self) -> usize {
        if self.is_honor() { 3 } else { self.suit() as usize }
    }

    /// Renders as an MJAI tile string, e.g. "5m", "5mr" (red), or "E"/"P"/"F"/"C" for honors.
    pub fn to_mjai(self) -> String {
        if self.is_honor() {
            HONOR_MJAI[(self.tile_type() - 27) as usize].to_string()
        } else if self.is_red() {
            format!("{}{}r", self.rank(), SUIT_CHARS[self.suit() as usize])
        } else {
            format!("{}{}", self.rank(), SUIT_CHARS[self.suit() as usize])
        }
    }

    /// Parses a single MJAI tile string into a canonical (non-identity-specific) tile: the
    /// returned copy index is always 1 for non-red tiles, matching [`Tile::from_type`].
    pub fn parse_mjai(s: &str) -> Option<Self> {
        if let Some(pos) = HONOR_MJAI.iter().position(|h| *h == s) {
            return Self::from_type(27 + pos as u8);
        }
        let bytes = s.as_bytes();
        if bytes.len() < 2 { return None; }
        let rank = (bytes[0] as char).to_digit(10)? as u8;
        let suit = suit_from_char(bytes[1] as char)?;
        if suit == 3 { return None; }
        let red = s.ends_with('r');
        if red {
            if rank != 5 { return None; }
            return Self::red_five(suit);
        }
        let tile_type = suit * 9 + (rank - 1);
        Self::from_type(tile_type)
    }
}

impl FromStr for Tile {
    type Err = ();
    /// Parses a single MPSZ tile string, e.g. "5m" or "0m" (red).
    fn from_str(s: &str) -> Result<Self, ()> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 { return Err(()); }
        let digit = chars[0].to_digit(10).ok_or(())? as u8;
        let suit = suit_from_char(chars[1]).ok_or(())?;
        if suit == 3 {
            if digit == 0 { return Err(()); }
            return Self::from_type(27 + digit - 1).ok_or(());
        }
        if digit == 0 {
            return Self::red_five(suit).ok_or(());
        }
        Self::from_type(suit * 9 + digit - 1).ok_or(())
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_mpsz())
    }
}

/// Parses an MPSZ hand shorthand ("123m456p789s2z", "0m" for red 5) into a list of distinct
/// tile identities, disambiguating duplicate type symbols by sequential copy assignment.
/// `"0x"` is forced to the red id; a later plain `"5x"` in the same run skips over the red copy.
pub fn tiles_from_mpsz(s: &str) -> Vec<Tile> {
    let mut out = Vec::new();
    let mut pending_digits: Vec<u8> = Vec::new();
    let mut next_copy = [0u8; NUM_TILE_TYPES];
    for c in s.chars() {
        if let Some(d) = c.to_digit(10) {
            pending_digits.push(d as u8);
        } else if let Some(suit) = suit_from_char(c) {
            for &digit in &pending_digits {
                if let Some(tile) = assign_copy(&mut next_copy, digit, suit) {
                    out.push(tile);
                }
            }
            pending_digits.clear();
        } else if c == '(' || c == ')' {
            // meld groups are handled by the caller (see `crate::meld`); ignore delimiters here
        }
        // other characters (meld-kind letters) are silently skipped by this pure-hand parser
    }
    out
}

fn assign_copy(next_copy: &mut [u8; NUM_TILE_TYPES], digit: u8, suit: u8) -> Option<Tile> {
    if suit == 3 {
        if digit == 0 { return None; }
        let tile_type = (27 + digit - 1) as usize;
        let copy = next_copy[tile_type];
        if copy > 3 { return None; }
        next_copy[tile_type] += 1;
        Tile::from_type_copy(tile_type as u8, copy)
    } else if digit == 0 {
        let tile_type = (suit * 9 + 4) as usize; // rank 5
        next_copy[tile_type] = next_copy[tile_type].max(1);
        Tile::red_five(suit)
    } else {
        let tile_type = (suit * 9 + digit - 1) as usize;
        let mut copy = next_copy[tile_type];
        // the red five occupies copy 0 of rank 5; skip it for plain "5x"
        if digit == 5 && copy == 0 { copy = 1; }
        if copy > 3 { return None; }
        next_copy[tile_type] = copy + 1;
        Tile::from_type_copy(tile_type as u8, copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn total_on_all_ids_and_roundtrips_mpsz() {
        for id in 0..NUM_TILES as u8 {
            let tile = Tile::from_id(id).unwrap();
            let s = tile.to_mpsz();
            let back: Tile = s.parse().unwrap();
            assert_eq!(back.tile_type(), tile.tile_type());
            assert_eq!(back.is_red(), tile.is_red());
        }
    }

    #[test]
    fn roundtrips_mjai() {
        for id in 0..NUM_TILES as u8 {
            let tile = Tile::from_id(id).unwrap();
            let s = tile.to_mjai();
            let back = Tile::parse_mjai(&s).unwrap();
            assert_eq!(back.tile_type(), tile.tile_type());
            assert_eq!(back.is_red(), tile.is_red());
        }
    }

    #[test]
    fn red_five_ids_match_spec() {
        assert_eq!(RED_FIVE_IDS, [16, 52, 88]);
        for &id in &RED_FIVE_IDS {
            assert!(Tile::from_id(id).unwrap().is_red());
        }
    }

    #[test]
    fn dora_indicator_cycles() {
        let ind: Tile = "9m".parse().unwrap();
        assert_eq!(ind.indicated_dora_type(), Tile::from_str("1m").unwrap().tile_type());
        let ind: Tile = "4z".parse().unwrap(); // N
        assert_eq!(ind.indicated_dora_type(), Tile::from_str("1z").unwrap().tile_type()); // E
        let ind: Tile = "7z".parse().unwrap(); // chun
        assert_eq!(ind.indicated_dora_type(), Tile::from_str("5z").unwrap().tile_type()); // haku
    }

    #[test]
    fn tiles_from_mpsz_disambiguates_red_five() {
        let tiles = tiles_from_mpsz("055m");
        assert_eq!(tiles.len(), 3);
        assert!(tiles[0].is_red());
        assert!(!tiles[1].is_red());
        assert!(!tiles[2].is_red());
    }

    #[test]
    fn tiles_from_mpsz_example() {
        let tiles = tiles_from_mpsz("123m456p789s2z");
        assert_eq!(tiles.len(), 10);
    }
}
