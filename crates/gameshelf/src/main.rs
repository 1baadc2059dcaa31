//! # Gameshelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/gameshelfapp/`: UI-agnostic library (catalog, collection store, commands, API)
//! - `crates/gameshelf/`: this CLI, depends on the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/gameshelf/src/cli/)                      │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch, prompts, logging (commands.rs)                 │
//! │  - Text / JSON output (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/gameshelfapp/src/api.rs)                 │
//! │  - Parses selectors, dispatches to command modules          │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests over the in-memory backend, integration tests over a temp dir.
//! - **CLI**: argument parsing and rendering are unit tested in `src/cli/`; the end-to-end
//!   tests in `tests/` run the real binary with `--data` pointing at a temp dir.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
