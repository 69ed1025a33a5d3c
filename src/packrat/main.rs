//! # Packrat CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/packrat/cli/)                               │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + subcommands (commands.rs)               │
//! │  - Menu loop (session.rs), terminal output (render.rs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (src/packrat/lib.rs)                               │
//! │  - InventoryApi over the stores and algorithms              │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store errors (full, not found, unsorted) are shown inside the session and
//! never end the process. Only errors escaping `run()` (config files, I/O)
//! print `Error: ...` and exit with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
