//! Pure GPA computation engine.
//!
//! # Responsibility
//! - Derive semester and cumulative statistics from record snapshots.
//! - Solve the inverse merge for the goal-seeking "required SGPA" figure.
//!
//! # Invariants
//! - Every function is total over its domain: no panics, no mutation.
//! - Degenerate denominators yield defined fallbacks (`0` or `None`),
//!   never division faults.

pub mod goal;
pub mod stats;
