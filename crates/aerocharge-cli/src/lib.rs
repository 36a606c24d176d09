//! Aerocharge CLI library.
//!
//! Terminal styling and the text/JSON renderers shared by the
//! `aerocharge-cli` subcommands.

pub mod output;
pub mod terminal;
