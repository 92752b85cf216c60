//! Library crate root re-exporting the check, CLI, and config modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod check;
pub mod cli;
pub mod config;
