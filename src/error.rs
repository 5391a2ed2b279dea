//! Error taxonomy for the engine, the agari calculator, and the replay driver.
//!
//! Mirrors the three failure categories a caller actually needs to distinguish: a rejected
//! action never touches state, a malformed payload never touches state, and an internal
//! invariant violation is a bug in this crate, not in the caller.

use thiserror::Error;

use crate::meld::Meld;
use crate::tile::Tile;

/// A submitted [`crate::engine::Action`] was illegal or malformed for the current observation.
/// No state mutation occurs when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("seat {0} has no pending action to take")]
    NotActionable(u8),

    #[error("tile {0} is not in the closed hand")]
    TileNotInHand(Tile),

    #[error("discard of {0} does not match the tile just drawn ({1:?}); only tsumogiri or a hand tile is legal")]
    BadDiscard(Tile, Option<Tile>),

    #[error("cannot discard from the closed hand while riichi is active (only the drawn tile may be discarded)")]
    DiscardUnderRiichi,

    #[error("not enough of tile {0} in hand to form the requested meld")]
    NotEnoughForMeld(Tile),

    #[error("chi may only be called on the discard of the immediate left neighbour")]
    ChiWrongSource,

    #[error("no matching pon to upgrade into kakan for tile {0}")]
    NoPonForKakan(Tile),

    #[error("riichi requires a concealed, tenpai hand")]
    RiichiNotTenpai,

    #[error("riichi requires at least {0} points, seat has {1}")]
    RiichiInsufficientFunds(i64, i64),

    #[error("riichi requires at least 4 live wall tiles remaining")]
    RiichiWallTooShort,

    #[error("kyuushu kyuuhai is only legal on the first uninterrupted draw")]
    NineKindsNotFirstTurn,

    #[error("kyuushu kyuuhai requires at least 9 distinct terminal/honor kinds, found {0}")]
    NineKindsNotEnoughKinds(u8),

    #[error("cannot ron: seat is in furiten")]
    Furiten,

    #[error("the claimed tile does not complete a winning hand")]
    NotAWin,

    #[error("action is not present in the legal action set")]
    NotLegal,
}

/// Failures specific to replaying an external log through the engine.
#[derive(Error, Debug, Clone)]
pub enum ReplayError {
    #[error("log event at index {index} could not be applied to the engine: {source}")]
    Inconsistent {
        index: usize,
        #[source]
        source: ActionError,
    },

    #[error(
        "scoring mismatch at hora index {index}: engine computed han={engine_han} fu={engine_fu} \
         yaku={engine_yaku:?}, log expected han={log_han} fu={log_fu} yaku={log_yaku:?}"
    )]
    ScoringMismatch {
        index: usize,
        engine_han: u32,
        engine_fu: u32,
        engine_yaku: Vec<u16>,
        log_han: u32,
        log_fu: u32,
        log_yaku: Vec<u16>,
    },

    #[error("log references an unsupported dialect construct: {0}")]
    UnsupportedConstruct(String),

    #[error("malformed log record: {0}")]
    MalformedLog(String),
}

/// Internal invariant violations. These indicate an engine bug, not caller misuse; the round
/// aborts with this diagnostic rather than continuing in an inconsistent state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("live wall underflow: attempted to draw with {0} tiles remaining")]
    WallUnderflow(usize),

    #[error("dead wall underflow: attempted a kan replacement draw with none remaining")]
    DeadWallUnderflow,

    #[error("meld {0} has invalid arity for its kind")]
    BadMeldArity(Meld),

    #[error("hand count {0} out of bounds [13, 14]")]
    HandCountOutOfBounds(usize),

    #[error("tile multiset invariant violated: {0}")]
    MultisetInvariant(String),
}
