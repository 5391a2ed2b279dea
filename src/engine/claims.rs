//! Claim resolution 副露優先順位 --- once every offered seat has answered a discard (or kakan)
//! with a submitted reaction, decide which of them actually happen.
//!
//! Priority: Ron > Pon/Daiminkan > Chi > Pass. Ron is special in that *more than one* seat may
//! ron the same tile; how many of them actually win is governed by [`MultiRonPolicy`].

use crate::engine::action::{Action, ActionKind};
use crate::rules::MultiRonPolicy;
use crate::seat::Seat;

/// The outcome of resolving a full set of reactions to one discard/kakan.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum ClaimOutcome {
    #[default]
    NoClaim,
    /// One or more seats ron the discard. Ordered by claim priority (nearest-clockwise first).
    Ron(Vec<Seat>),
    /// Three simultaneous ron claims under [`MultiRonPolicy::TripleRonVoidsHand`]: the round
    /// aborts instead of paying anyone out.
    TripleRonAbort,
    Meld(Seat, Action),
}

/// `submissions` is every seat that was offered a reaction, paired with what they submitted
/// (defaulting to [`Action::pass`] if a seat didn't answer at all).
pub fn resolve(policy: MultiRonPolicy, discarder: Seat, submissions: &[(Seat, Action)]) -> ClaimOutcome {
    let mut rons: Vec<Seat> = discarder.others_clockwise().into_iter()
        .filter(|seat| submissions.iter().any(|(s, a)| s == seat && a.kind == ActionKind::Ron))
        .collect();

    if !rons.is_empty() {
        return match policy {
            MultiRonPolicy::HeadBump => ClaimOutcome::Ron(vec![rons[0]]),
            MultiRonPolicy::DoubleRon => {
                rons.truncate(2);
                ClaimOutcome::Ron(rons)
            }
            MultiRonPolicy::TripleRon => ClaimOutcome::Ron(rons),
            MultiRonPolicy::TripleRonVoidsHand => {
                if rons.len() >= 3 { ClaimOutcome::TripleRonAbort } else { ClaimOutcome::Ron(rons) }
            }
        };
    }

    if let Some((seat, action)) = submissions.iter()
        .find(|(_, a)| matches!(a.kind, ActionKind::Pon | ActionKind::Daiminkan))
    {
        return ClaimOutcome::Meld(*seat, action.clone());
    }

    if let Some((seat, action)) = submissions.iter().find(|(_, a)| a.kind == ActionKind::Chi) {
        return ClaimOutcome::Meld(*seat, action.clone());
    }

    ClaimOutcome::NoClaim
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    fn t(s: &str) -> Tile { s.parse().unwrap() }

    #[test]
    fn pon_beats_chi() {
        let submissions = vec![
            (Seat::South, Action::chi(t("5s"), [t("4s"), t("6s")])),
            (Seat::West, Action::pon(t("5s"), [t("5s"), t("5s")])),
        ];
        let outcome = resolve(MultiRonPolicy::HeadBump, Seat::East, &submissions);
        assert_eq!(outcome, ClaimOutcome::Meld(Seat::West, Action::pon(t("5s"), [t("5s"), t("5s")])));
    }

    #[test]
    fn ron_beats_everything_and_head_bump_keeps_only_the_nearest() {
        let submissions = vec![
            (Seat::South, Action::ron()),
            (Seat::North, Action::ron()),
            (Seat::West, Action::pon(t("5s"), [t("5s"), t("5s")])),
        ];
        let outcome = resolve(MultiRonPolicy::HeadBump, Seat::East, &submissions);
        assert_eq!(outcome, ClaimOutcome::Ron(vec![Seat::South]));
    }

    #[test]
    fn triple_ron_voids_hand_when_configured() {
        let submissions = vec![
            (Seat::South, Action::ron()),
            (Seat::West, Action::ron()),
            (Seat::North, Action::ron()),
        ];
        let outcome = resolve(MultiRonPolicy::TripleRonVoidsHand, Seat::East, &submissions);
        assert_eq!(outcome, ClaimOutcome::TripleRonAbort);
    }
}
