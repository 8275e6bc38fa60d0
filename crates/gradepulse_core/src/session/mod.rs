//! In-memory session state.
//!
//! # Responsibility
//! - Hold the single mutable snapshot (courses, history, goal inputs).
//! - Orchestrate edits and expose pure derived readers over the snapshot.
//!
//! # Invariants
//! - One writer at a time; readers recompute from the latest snapshot.
//! - Nothing here survives the process: there is no persistence layer.

pub mod gradebook;
pub mod seed;
