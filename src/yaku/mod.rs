//! Yaku evaluation 役判定 --- turning a [`crate::decomp::Decomposition`] plus the surrounding
//! game context into the set of satisfied yaku, and the fu (符) of that reading.

mod known;
mod eval;

pub use known::{Yaku, DORA_ID, AKA_DORA_ID, URA_DORA_ID, YAKUMAN_MIN, YAKUMAN_MAX};
pub use eval::{evaluate, EvalContext, WaitKind, WinMethod, YakuHit, YakuResult};
