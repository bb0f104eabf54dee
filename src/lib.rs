//! Phrasepack - translation bundle compiler
//!
//! Phrasepack scans a multi-package source tree for locale-keyed phrase
//! files, merges them into one `package -> side -> locale -> scope` tree,
//! validates the enabled locale set and writes one compiled bundle per
//! package and locale for runtime loading.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: The aggregation pipeline (discovery, loading, merge, compile)
//! - `error`: Pipeline error types
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
