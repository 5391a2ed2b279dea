//! Engine 進行エンジン --- the WaitAct/WaitResponse state machine: legal-action enumeration,
//! claim-priority resolution, and state mutation, wired together behind one narrow surface.
//!
//! A caller drives a round by alternating:
//! 1. [`observation::observe`] the current seat (or every offered seat, in `WaitResponse`),
//! 2. submit one of the returned legal [`Action`]s via [`step::apply_wait_act`] or
//!    [`step::apply_wait_response`],
//! 3. repeat until [`crate::state::Phase::RoundOver`].

pub mod action;
pub mod claims;
pub mod legal;
pub mod observation;
pub mod step;

pub use action::{Action, ActionKind};
pub use observation::{observe, Observation};
pub use step::{apply_wait_act, apply_wait_response, draw_for_current_player};
