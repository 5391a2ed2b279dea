//! Seat 席 --- the four player positions around the table, and the four winds.

use std::fmt::{Display, Formatter};

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// One of the four seats at the table (0=E, 1=S, 2=W, 3=N relative to the current round's deal).
/// Also used to represent a wind value (round wind or seat wind) since both are the same
/// underlying 0..=3 cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    #[default]
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::East, Seat::South, Seat::West, Seat::North];

    pub fn new(n: u8) -> Self {
        Seat::try_from(n % 4).unwrap()
    }

    pub fn to_u8(self) -> u8 { u8::from(self) }
    pub fn to_usize(self) -> usize { self.to_u8() as usize }

    /// The next seat clockwise (play order).
    pub fn succ(self) -> Self { Seat::new(self.to_u8() + 1) }

    /// Seat offset `self - other` (mod 4): 0 = self, 1 = immediate downstream (kamicha's target
    /// is 3, i.e. the player to `self`'s left is offset 3 relative to `self`).
    pub fn offset_from(self, other: Self) -> u8 { (self.to_u8() + 4 - other.to_u8()) % 4 }

    /// Is `self` the immediate left neighbour (kamicha) of `other`, i.e. the only seat `other`
    /// may legally Chi from?
    pub fn is_kamicha_of(self, other: Self) -> bool { self.succ() == other }

    /// The four seats other than `self`, starting from `self`'s immediate downstream (shimocha)
    /// and proceeding clockwise. This is the natural claim-priority scan order.
    pub fn others_clockwise(self) -> [Seat; 3] {
        [self.succ(), self.succ().succ(), self.succ().succ().succ()]
    }

    pub fn as_wind_char(self) -> char {
        match self {
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
            Seat::North => 'N',
        }
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_wind_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succ_cycles() {
        assert_eq!(Seat::East.succ(), Seat::South);
        assert_eq!(Seat::North.succ(), Seat::East);
    }

    #[test]
    fn kamicha_relation() {
        // West's kamicha (left neighbour, whose discards West may chi) is South.
        assert!(Seat::South.is_kamicha_of(Seat::West));
        assert!(!Seat::North.is_kamicha_of(Seat::West));
    }

    #[test]
    fn others_clockwise_order() {
        assert_eq!(Seat::East.others_clockwise(), [Seat::South, Seat::West, Seat::North]);
    }
}
