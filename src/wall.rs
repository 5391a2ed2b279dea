//! Wall 牌山 --- the shuffled 136-tile deck, split into the live wall (ordinary draws) and the
//! 14-tile dead wall (kan replacement draws, dora/ura indicators).
//!
//! Determinism: the whole wall is produced by one deterministic shuffle from a `u64` seed via
//! [`rand::rngs::StdRng`], so the same seed reproduces the same wall, the same dora reveals and
//! the same commitment digest every time (see §6 "Secure wall commitment").

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use sha2::{Digest, Sha256};

use crate::tile::{Tile, NUM_TILES};

const DEAD_WALL_SIZE: usize = 14;
const REPLACEMENT_SLOTS: usize = 4;
const DORA_SLOTS: usize = 5;
const URA_SLOTS: usize = 5;
const SALT_LEN: usize = 16;
const SALT_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub struct Wall {
    live: Vec<Tile>,
    live_cursor: usize,
    replacement: [Tile; REPLACEMENT_SLOTS],
    replacement_cursor: usize,
    dora_indicators_all: [Tile; DORA_SLOTS],
    ura_indicators_all: [Tile; URA_SLOTS],
    dora_revealed: usize,
    pub digest: String,
    pub salt: String,
}

impl Wall {
    /// Shuffles a fresh 136-tile wall deterministically from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck: Vec<Tile> = (0..NUM_TILES as u8).map(|id| Tile::from_id(id).unwrap()).collect();
        deck.shuffle(&mut rng);

        let salt: String = (0..SALT_LEN)
            .map(|_| SALT_ALPHABET[rng.gen_range(0..SALT_ALPHABET.len())] as char)
            .collect();
        let digest = commitment_digest(&deck, &salt);

        let dead_start = deck.len() - DEAD_WALL_SIZE;
        let live = deck[..dead_start].to_vec();
        let dead = &deck[dead_start..];
        let mut replacement = [Tile::default(); REPLACEMENT_SLOTS];
        replacement.copy_from_slice(&dead[..REPLACEMENT_SLOTS]);
        let mut dora_indicators_all = [Tile::default(); DORA_SLOTS];
        dora_indicators_all.copy_from_slice(&dead[REPLACEMENT_SLOTS..REPLACEMENT_SLOTS + DORA_SLOTS]);
        let mut ura_indicators_all = [Tile::default(); URA_SLOTS];
        ura_indicators_all.copy_from_slice(&dead[REPLACEMENT_SLOTS + DORA_SLOTS..]);

        log::debug!("wall shuffled: seed={seed} digest={digest}");

        Wall {
            live,
            live_cursor: 0,
            replacement,
            replacement_cursor: 0,
            dora_indicators_all,
            ura_indicators_all,
            dora_revealed: 1,
            digest,
            salt,
        }
    }

    pub fn live_remaining(&self) -> usize { self.live.len() - self.live_cursor }

    /// Draws the next live tile. `None` once the live wall is exhausted (ryukyoku).
    pub fn draw_live(&mut self) -> Option<Tile> {
        let tile = self.live.get(self.live_cursor).copied()?;
        self.live_cursor += 1;
        Some(tile)
    }

    /// Whether the tile just drawn by [`Self::draw_live`] was the last live tile (haitei).
    pub fn is_haitei(&self) -> bool { self.live_remaining() == 0 }

    /// Draws a kan-replacement tile from the dead wall and reveals the next dora indicator.
    /// `None` once all 4 replacement slots (i.e. 4 kans) are used.
    pub fn draw_replacement(&mut self) -> Option<Tile> {
        let tile = self.replacement.get(self.replacement_cursor).copied()?;
        self.replacement_cursor += 1;
        if self.dora_revealed < DORA_SLOTS { self.dora_revealed += 1; }
        Some(tile)
    }

    pub fn dora_indicators(&self) -> &[Tile] { &self.dora_indicators_all[..self.dora_revealed] }

    /// Ura indicators, revealed at the same cadence as dora; only meaningful for a riichi win.
    pub fn ura_indicators(&self) -> &[Tile] { &self.ura_indicators_all[..self.dora_revealed] }

    pub fn kan_count(&self) -> usize { self.replacement_cursor }
}

fn commitment_digest(deck: &[Tile], salt: &str) -> String {
    let csv = deck.iter().map(|t| t.id().to_string()).collect::<Vec<_>>().join(",");
    let mut hasher = Sha256::new();
    hasher.update(csv.as_bytes());
    hasher.update(salt.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_identical_wall_and_digest() {
        let a = Wall::new(42);
        let b = Wall::new(42);
        assert_eq!(a.digest, b.digest);
        assert_eq!(a.salt, b.salt);
        assert_eq!(a.live, b.live);
    }

    #[test]
    fn different_seed_almost_certainly_differs() {
        let a = Wall::new(1);
        let b = Wall::new(2);
        assert_ne!(a.live, b.live);
    }

    #[test]
    fn draining_live_wall_hits_haitei_then_exhausts() {
        let mut wall = Wall::new(7);
        let total = wall.live_remaining();
        for _ in 0..total - 1 {
            assert!(wall.draw_live().is_some());
            assert!(!wall.is_haitei());
        }
        assert!(wall.draw_live().is_some());
        assert!(wall.is_haitei());
        assert!(wall.draw_live().is_none());
    }

    #[test]
    fn kan_draws_reveal_additional_dora_up_to_five() {
        let mut wall = Wall::new(3);
        assert_eq!(wall.dora_indicators().len(), 1);
        for expected in 2..=5 {
            assert!(wall.draw_replacement().is_some());
            assert_eq!(wall.dora_indicators().len(), expected);
        }
        assert!(wall.draw_replacement().is_none());
    }

    #[test]
    fn digest_changes_with_salt_or_order() {
        let wall = Wall::new(9);
        let recomputed_same = commitment_digest(&wall.live.iter().chain(wall.replacement.iter())
            .chain(wall.dora_indicators_all.iter()).chain(wall.ura_indicators_all.iter())
            .copied().collect::<Vec<_>>(), &wall.salt);
        assert_eq!(recomputed_same, wall.digest);
    }
}
