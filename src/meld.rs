//! Meld 副露 --- called sets: Chi, Pon, Daiminkan, Kakan, Ankan.
//!
//! ## Ref
//! - <https://riichi.wiki/Naki>

use std::fmt::{Display, Formatter};

use crate::seat::Seat;
use crate::tile::Tile;

/// A sequence of 3 consecutive same-suit tiles, called from the immediate left neighbour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Chi {
    /// The two tiles contributed from the caller's own closed hand, ascending.
    pub own: [Tile; 2],
    /// The tile claimed from the discarder.
    pub called: Tile,
    /// Always the caller's kamicha (left neighbour); kept for symmetry with the other variants.
    pub source: Seat,
}

/// Three identical (ignoring red) tiles, one contributed by any other seat's discard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pon {
    pub own: [Tile; 2],
    pub called: Tile,
    pub source: Seat,
}

/// Four identical tiles called directly from a discard (大明槓).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Daiminkan {
    pub own: [Tile; 3],
    pub called: Tile,
    pub source: Seat,
}

/// Four identical tiles formed entirely from the closed hand, on one's own turn (暗槓).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ankan {
    pub tiles: [Tile; 4],
}

/// An existing [`Pon`] upgraded with the fourth identical tile drawn later (加槓).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Kakan {
    pub pon: Pon,
    pub added: Tile,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Meld {
    Chi(Chi),
    Pon(Pon),
    Daiminkan(Daiminkan),
    Ankan(Ankan),
    Kakan(Kakan),
}

impl Meld {
    /// Whether the meld is called from another seat's discard (true for everything but Ankan).
    pub fn is_opened(&self) -> bool { !matches!(self, Meld::Ankan(_)) }

    pub fn is_kan(&self) -> bool {
        matches!(self, Meld::Daiminkan(_) | Meld::Ankan(_) | Meld::Kakan(_))
    }

    /// The seat that supplied the called tile, if any (`None` only for Ankan).
    pub fn source(&self) -> Option<Seat> {
        match self {
            Meld::Chi(c) => Some(c.source),
            Meld::Pon(p) => Some(p.source),
            Meld::Daiminkan(d) => Some(d.source),
            Meld::Kakan(k) => Some(k.pon.source),
            Meld::Ankan(_) => None,
        }
    }

    /// All tiles that make up the meld (3, or 4 for any kan kind).
    pub fn tiles(&self) -> Vec<Tile> {
        match self {
            Meld::Chi(c) => vec![c.own[0], c.own[1], c.called],
            Meld::Pon(p) => vec![p.own[0], p.own[1], p.called],
            Meld::Daiminkan(d) => vec![d.own[0], d.own[1], d.own[2], d.called],
            Meld::Ankan(a) => a.tiles.to_vec(),
            Meld::Kakan(k) => vec![k.pon.own[0], k.pon.own[1], k.pon.called, k.added],
        }
    }

    /// Tiles that must be removed from the caller's *closed* hand to form this meld.
    pub fn tiles_from_hand(&self) -> Vec<Tile> {
        match self {
            Meld::Chi(c) => vec![c.own[0], c.own[1]],
            Meld::Pon(p) => vec![p.own[0], p.own[1]],
            Meld::Daiminkan(d) => vec![d.own[0], d.own[1], d.own[2]],
            Meld::Ankan(a) => a.tiles.to_vec(),
            Meld::Kakan(k) => vec![k.added],
        }
    }

    /// The representative (non-red, canonical copy) tile type of this meld's kind, used for
    /// yaku predicates that only care about "what tile" not "which copy".
    pub fn tile_type(&self) -> u8 {
        match self {
            Meld::Chi(c) => c.own[0].tile_type().min(c.called.tile_type()),
            Meld::Pon(p) => p.called.tile_type(),
            Meld::Daiminkan(d) => d.called.tile_type(),
            Meld::Ankan(a) => a.tiles[0].tile_type(),
            Meld::Kakan(k) => k.pon.called.tile_type(),
        }
    }

    pub fn contains_red(&self) -> bool {
        self.tiles().iter().any(|t| t.is_red())
    }
}

impl Chi {
    /// `own0 < own1` in suit order; `called` fills the remaining rank of the run.
    pub fn new(own0: Tile, own1: Tile, called: Tile, source: Seat) -> Option<Self> {
        let mut ranks = [own0.rank(), own1.rank(), called.rank()];
        ranks.sort_unstable();
        let same_suit = own0.suit() == own1.suit() && own1.suit() == called.suit()
            && own0.is_numeral() && own1.is_numeral() && called.is_numeral();
        if !same_suit || ranks[1] != ranks[0] + 1 || ranks[2] != ranks[1] + 1 { return None; }
        let (mut o0, mut o1) = (own0, own1);
        if o0.rank() > o1.rank() { std::mem::swap(&mut o0, &mut o1); }
        Some(Chi { own: [o0, o1], called, source })
    }
}

impl Pon {
    pub fn new(own0: Tile, own1: Tile, called: Tile, source: Seat) -> Option<Self> {
        if own0.tile_type() != called.tile_type() || own1.tile_type() != called.tile_type() {
            return None;
        }
        Some(Pon { own: [own0, own1], called, source })
    }
}

impl Daiminkan {
    pub fn new(own: [Tile; 3], called: Tile, source: Seat) -> Option<Self> {
        if own.iter().any(|t| t.tile_type() != called.tile_type()) { return None; }
        Some(Daiminkan { own, called, source })
    }
}

impl Ankan {
    pub fn new(tiles: [Tile; 4]) -> Option<Self> {
        let t0 = tiles[0].tile_type();
        if tiles.iter().any(|t| t.tile_type() != t0) { return None; }
        Some(Ankan { tiles })
    }
}

impl Kakan {
    pub fn new(pon: Pon, added: Tile) -> Option<Self> {
        if added.tile_type() != pon.called.tile_type() { return None; }
        Some(Kakan { pon, added })
    }
}

impl Display for Meld {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Meld::Chi(c) => write!(f, "c{}{}{}", c.own[0], c.own[1], c.called),
            Meld::Pon(p) => write!(f, "p{}{}{}", p.own[0], p.own[1], p.called),
            Meld::Daiminkan(d) => write!(f, "d{}{}{}{}", d.own[0], d.own[1], d.own[2], d.called),
            Meld::Ankan(a) => write!(f, "a{}{}{}{}", a.tiles[0], a.tiles[1], a.tiles[2], a.tiles[3]),
            Meld::Kakan(k) => write!(f, "k{}{}{}{}", k.pon.own[0], k.pon.own[1], k.pon.called, k.added),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Tile { s.parse().unwrap() }

    #[test]
    fn chi_requires_consecutive_same_suit() {
        assert!(Chi::new(t("4s"), t("6s"), t("5s"), Seat::East).is_some());
        assert!(Chi::new(t("4s"), t("6s"), t("5p"), Seat::East).is_none());
        assert!(Chi::new(t("4s"), t("7s"), t("5s"), Seat::East).is_none());
    }

    #[test]
    fn pon_requires_identical_type() {
        assert!(Pon::new(t("5p"), t("0p"), t("0p"), Seat::West).is_some());
        assert!(Pon::new(t("5p"), t("6p"), t("5p"), Seat::West).is_none());
    }

    #[test]
    fn ankan_is_not_opened() {
        let ankan = Ankan::new([t("1m"), t("1m"), t("1m"), t("1m")]).unwrap();
        assert!(!Meld::Ankan(ankan).is_opened());
    }
}
