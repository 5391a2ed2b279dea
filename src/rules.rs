//! Ruleset 規則 --- the configurable knobs of a game, bundled so a [`crate::state::GameState`]
//! can be constructed once and consulted everywhere without threading individual bools through
//! every function signature.
//!
//! Grounded on the teacher's `rules.rs` in spirit (one struct, one documented field per knob,
//! a `Default` matching common public-lobby rules) but without its `derivative`/`semver`
//! machinery: this crate does not promise a persisted-ruleset SemVer contract, so a hand-written
//! `Default` impl is enough.

/// How many rounds a game runs before "all-last".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HanchanLength {
    /// East-only: game ends after East 4.
    Half,
    /// East-South: game ends after South 4.
    Full,
}

/// What happens when more than one player can ron the same discard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MultiRonPolicy {
    /// Only the player closest (clockwise) to the discarder wins; the round ends as normal.
    HeadBump,
    /// Up to two simultaneous rons are paid out (atama-hane does not apply).
    DoubleRon,
    /// Up to three simultaneous rons are paid out.
    TripleRon,
    /// Three simultaneous rons voids the hand (sanchahou, an abortive draw) instead of paying out.
    TripleRonVoidsHand,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    pub hanchan_length: HanchanLength,
    pub multi_ron_policy: MultiRonPolicy,
    /// Rounds 4han30fu/3han60fu ron up to a flat mangan (2000 base) instead of the raw formula.
    pub kiriage_mangan: bool,
    pub starting_score: i64,
    /// Minimum score required to declare riichi (must cover the 1000-point stick).
    pub min_riichi_funds: i64,
    /// A player below zero points ends the game immediately ("tobi").
    pub tobi_ends_game: bool,
    /// Number of dora indicators revealed at round start (before any kan).
    pub initial_dora_indicators: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            hanchan_length: HanchanLength::Full,
            multi_ron_policy: MultiRonPolicy::HeadBump,
            kiriage_mangan: false,
            starting_score: 25_000,
            min_riichi_funds: 1_000,
            tobi_ends_game: true,
            initial_dora_indicators: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_common_public_lobby_rules() {
        let rules = Rules::default();
        assert_eq!(rules.hanchan_length, HanchanLength::Full);
        assert_eq!(rules.starting_score, 25_000);
        assert!(!rules.kiriage_mangan);
    }
}
