//! # Corrigo
//!
//! A thin, synchronous client for a spell-check HTTP API and a web-search
//! HTTP API, plus a reusable token reconciler that applies ranked spelling
//! suggestions to produce a corrected sentence.
//!
//! ## Features
//!
//! - Pure, side-effect-free reconciliation of flagged tokens into corrected text
//! - Structured report of every applied correction
//! - Diagnostics for skipped tokens (missing occurrence, no suggestions)
//! - Blocking HTTP clients with typed errors instead of sentinel values
//! - Site-filtered search with an optional, separately invoked browser launch

pub mod api;
pub mod browser;
pub mod cli;
pub mod error;
pub mod reconcile;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
