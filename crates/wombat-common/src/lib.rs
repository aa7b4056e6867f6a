//! Common utilities for Wombat.
//!
//! This crate provides shared infrastructure used by the parser and the
//! CLI:
//! - **Warning System** - deduplicated, coloured terminal output for
//!   recoverable problems such as malformed markup

pub mod warning;
