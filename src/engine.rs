//! Symbolic analysis engine.
//!
//! This module holds the building blocks every service is assembled from and
//! the dispatcher that assembles them. None of it performs I/O; the only
//! side effect is reading from the injected [`RandomSource`].
//!
//! ## How the parts work together
//!
//! ```text
//! AnalysisRequest ── dispatch (dispatch.rs)
//!                      │
//!        ┌─────────────┼──────────────┬──────────────┬─────────────┐
//!        v             v              v              v             v
//!      dream       numerology       coffee         tarot        lottery
//!        │             │              │              │             │
//!   extract_symbols  compute_       complete        (fixed     game_spec
//!   (extract.rs)     numerology     (complete.rs)    spread)   + complete
//!        │           (numerology.rs)  │                            │
//!   TriggerInfo::scan  │              │                            │
//!   (trigger.rs)       │              │                            │
//!        │             │              │                            │
//!   symbols_to_numbers │              │                            │
//!   (mapper.rs)        │              │                            │
//!        └─────────────┴──────┬───────┴────────────────────────────┘
//!                             v
//!              compose_interpretation (compose.rs)
//!                             │
//!                             v
//!                       AnalysisResult
//! ```
//!
//! ## Responsibilities by module
//!
//! - `random.rs`: the [`RandomSource`] seam plus a `rand`-backed and a scripted
//!   implementation.
//! - `extract.rs`: keyword scan of free text against the symbol dictionary.
//! - `trigger.rs`: coarse motif flags used to pick a dream template.
//! - `mapper.rs`: symbols to six candidate numbers.
//! - `numerology.rs`: life-path / expression / personality and their numbers.
//! - `complete.rs`: fills a partial candidate list up to a target count.
//! - `compose.rs`: interpretation text.
//! - `dispatch.rs`: one function per service and the default result.
//!
//! ## Debugging
//!
//! Every stage emits `tracing` events at `debug`/`trace` level under the
//! `kismet` target. The binary reads its filter from `KISMET_LOG`.

#[path = "engine/complete.rs"]
mod complete;
#[path = "engine/compose.rs"]
mod compose;
#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/extract.rs"]
mod extract;
#[path = "engine/mapper.rs"]
mod mapper;
#[path = "engine/numerology.rs"]
mod numerology;
#[path = "engine/random.rs"]
mod random;
#[path = "engine/trigger.rs"]
mod trigger;

pub use complete::complete;
pub use compose::{Composition, compose_interpretation};
pub(crate) use dispatch::{default_result, dispatch};
pub use extract::extract_symbols;
pub use mapper::symbols_to_numbers;
pub use numerology::{NumerologyProfile, compute_numerology, numerology_numbers};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use trigger::{MotifMask, TriggerInfo};
