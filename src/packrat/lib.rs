//! # Packrat Architecture
//!
//! Packrat is a small inventory engine for teaching data structures. It keeps
//! records in an array-backed store and, for comparison, in a singly linked
//! list, and it counts every key comparison its sorts and searches make.
//!
//! The CLI is one client of the library; the library never does I/O.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Argument parsing, the menu session, terminal output      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the stores, enforces the active profile             │
//! │  - Normalizes records, keeps comparison counters            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per action, timed, returns CmdResult        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) over algorithms/                    │
//! │  - RecordStore trait: BoundedStore, LinkedStore             │
//! │  - Instrumented sorts and searches on plain slices          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Comparison Counts
//!
//! Counts are return values, never shared state: searches return a
//! [`algorithms::Lookup`], sorts return their count, and the API copies the
//! latest ones into [`commands::Counters`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per action
//! - [`store`]: Storage trait and the two stores
//! - [`algorithms`]: Insertion/bubble/selection sort, linear/binary search
//! - [`profile`]: Capability sets (novice, master, comparison, tower)
//! - [`model`]: `Record` and key utilities
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod algorithms;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod profile;
pub mod store;
