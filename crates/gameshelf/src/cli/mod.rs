//! # CLI Behavior
//!
//! This is **one possible UI client** for gameshelf, not the application itself.
//!
//! ## Naked Execution (`gameshelf`)
//!
//! Running `gameshelf` with no arguments defaults to `gameshelf list`. Looking at the
//! collection is most of the usage, so it is the path of least resistance.
//!
//! ## Selecting Items
//!
//! Commands that act on items take display indexes (`1`, `2-4`), a uniqueId
//! (`"1-Nintendo Switch"`, quotes optional) or part of a name (`zelda`). Indexes are the
//! ones `gameshelf list` prints and never shift when a listing is filtered.
//!
//! ## Destructive Commands
//!
//! `remove` and `clear` show what they are about to drop and ask. `--yes` skips the
//! question; when stdin is not a terminal, `--yes` is mandatory.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch, confirmation, logging setup
//! - `render`: output formatting
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
