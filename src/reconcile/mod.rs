//! Token reconciliation for Corrigo.
//!
//! This module turns the flagged-token list produced by the spell-check
//! service into a corrected sentence plus a structured report of what
//! changed. It is a pure, synchronous transformation with no I/O.

pub mod reconciler;
pub mod types;

// Re-export commonly used types
pub use reconciler::*;
pub use types::*;
