//! Replay driver 牌譜再生 --- streams an external log (MJAI or MjSoul dialect) through the
//! engine, re-deriving each win's han/fu/yaku via [`crate::agari::evaluate_win`] and asserting
//! it against what the log claims.
//!
//! "Trust log" policy (see spec §7, "Inconsistent replay"): when a log record cannot be produced
//! by the ordinary `engine::step` path (e.g. it names a discard the reconstructed hand doesn't
//! currently hold, a common symptom of an upstream parser quirk), the replay driver **coerces**
//! hand state to match the log rather than rejecting it outright. A non-replay caller driving
//! the engine directly never gets this leniency.

pub mod mjai_log;
pub mod mjsoul_log;

/// Resolves the spec's open question on MjSoul's two competing Ankan type codes (2 and 3): both
/// are observed in the wild with no documented rule distinguishing them, so this crate picks one
/// fixed interpretation rather than guessing per-record. See `DESIGN.md`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MjsoulAnkanCode {
    /// Treat type-2 records as Ankan.
    Type2,
    /// Treat type-3 records as Ankan.
    Type3,
}

impl Default for MjsoulAnkanCode {
    fn default() -> Self { MjsoulAnkanCode::Type3 }
}

#[derive(Clone, Debug)]
pub struct ReplayConfig {
    pub ankan_type_code: MjsoulAnkanCode,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig { ankan_type_code: MjsoulAnkanCode::default() }
    }
}

/// One verified win, as reconciled between the log and the engine's own recomputation.
#[derive(Clone, Debug)]
pub struct VerifiedWin {
    pub index: usize,
    pub han: u32,
    pub fu: u32,
    pub yaku: Vec<u16>,
}
