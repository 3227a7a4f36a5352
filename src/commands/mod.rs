//! Command handlers.
//!
//! The tool has a single top-level flow, implemented in `check`.

pub mod check;
