//! # CLI Behavior
//!
//! This is **one possible UI client** for packrat, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes, and output formatting.
//!
//! For the overall architecture, see the library docs in `lib.rs`.
//!
//! ### Naked Execution (`packrat`)
//!
//! Running `packrat` with no arguments opens the menu. With a profile from
//! `--profile` or the config file the profile's menu opens directly;
//! otherwise a picker lists the four profiles first.
//!
//! ### Unsorted Binary Search
//!
//! A binary search before any name sort does not fail silently: the session
//! asks whether to sort by name, runs the profile's name sort on `y`, then
//! retries the search.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and subcommand handlers
//! - `render`: Output formatting (tables, colors, messages)
//! - `session`: The interactive menu loop
//! - `setup`: Argument parsing via clap, help text

mod commands;
mod render;
mod session;
pub mod setup;

pub use commands::run;
