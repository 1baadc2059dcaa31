//! Styles for the gameshelf CLI.
//!
//! Rendering code refers to styles by what the text *is* (an index, a price, a platform),
//! never by color. Swapping a palette only touches this file.
//!
//! `console` drops the escape codes on its own when stdout is not a terminal, so piped
//! output and tests see plain text.

use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static NAME: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static PLATFORM: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static PRICE: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
pub static OWNED: Lazy<Style> = Lazy::new(|| Style::new().green().bold());
pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
