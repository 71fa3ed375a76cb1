//! Prelude module for accounts_dates crate.
//!
//! Re-exports the derive macros used across the crate.

pub use derive_more::Display;
