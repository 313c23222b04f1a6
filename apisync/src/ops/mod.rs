//! Core operations behind the commands.
//!
//! Operations return report data and leave rendering to the caller.

mod check;

pub use check::check;
