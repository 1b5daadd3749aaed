//! # CLI Layer
//!
//! The only part of wxstation that touches the terminal: it parses flags,
//! asks the questions a [`Session`](wxstation::session::Session) hands it,
//! prints messages and the final report, and turns errors into exit codes.

mod commands;
mod logging;
mod print;
mod setup;

pub use commands::run;
