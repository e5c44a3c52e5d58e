//! # CLI Layer
//!
//! This module is **one possible UI client** for prodcat, not the application itself.
//!
//! It is the only place that:
//! - Parses arguments (clap)
//! - Installs the log subscriber
//! - Reads stdin (delete confirmation) and writes stdout/stderr
//! - Turns `CmdResult`s into terminal output
//!
//! ## Structure
//!
//! - `setup`: clap definitions and the mapping from flags to form fields
//! - `commands`: `run()` plus one `handle_*` per subcommand
//! - `render`: table/detail layout and colored printing

pub mod commands;
pub mod render;
pub mod setup;

pub use commands::run;
