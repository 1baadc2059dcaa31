//! Turns `CmdResult` values into terminal text.
//!
//! Every function here returns a `String` and prints nothing, so output is testable from
//! canned results. `commands.rs` does the printing.

use super::styles;
use chrono::{DateTime, Utc};
use gameshelfapp::catalog::PlatformSummary;
use gameshelfapp::commands::{CatalogRow, CmdMessage, CmdResult, MessageLevel};
use gameshelfapp::error::Result;
use gameshelfapp::index::DisplayItem;
use gameshelfapp::model::CollectionStats;
use std::fmt::Write;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 36;
const PLATFORM_WIDTH: usize = 16;
const MONEY_WIDTH: usize = 10;

pub fn render_json(result: &CmdResult) -> Result<String> {
    let mut out = serde_json::to_string_pretty(result)?;
    out.push('\n');
    Ok(out)
}

pub fn render_text(result: &CmdResult) -> String {
    let mut out = String::new();
    if !result.listed_items.is_empty() {
        out.push_str(&render_items(&result.listed_items));
    }
    if !result.catalog_games.is_empty() {
        out.push_str(&render_catalog_rows(&result.catalog_games));
    }
    if !result.platforms.is_empty() {
        out.push_str(&render_platforms(&result.platforms));
    }
    if !result.genres.is_empty() {
        out.push_str(&render_genres(&result.genres));
    }
    if let Some(stats) = &result.stats {
        out.push_str(&render_stats(stats));
    }
    out.push_str(&render_messages(&result.messages));
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*styles::INFO,
            MessageLevel::Success => &*styles::SUCCESS,
            MessageLevel::Warning => &*styles::WARNING,
            MessageLevel::Error => &*styles::ERROR,
        };
        let _ = writeln!(out, "{}", style.apply_to(&message.content));
    }
    out
}

pub fn render_items(items: &[DisplayItem]) -> String {
    let mut out = String::new();
    for d in items {
        let item = &d.item;
        let idx = format!("{:>3}. ", d.index);
        let _ = writeln!(
            out,
            "{}{} {} {:>4} {} {}  {}",
            styles::INDEX.apply_to(idx),
            styles::NAME.apply_to(fit(&item.name, NAME_WIDTH)),
            styles::PLATFORM.apply_to(fit(&item.platform, PLATFORM_WIDTH)),
            format!("x{}", item.quantity),
            money(item.price),
            styles::PRICE.apply_to(money(item.line_total())),
            styles::MUTED.apply_to(time_ago(item.date_added)),
        );
    }
    out
}

pub fn render_catalog_rows(rows: &[CatalogRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let marker = if row.in_collection { "✓" } else { " " };
        let storage = row.storage.as_deref().unwrap_or("");
        let _ = writeln!(
            out,
            "{} {:>4}  {} {} {} {}",
            styles::OWNED.apply_to(marker),
            row.game_id,
            styles::NAME.apply_to(fit(&row.name, NAME_WIDTH)),
            styles::PLATFORM.apply_to(fit(&row.platform, PLATFORM_WIDTH)),
            styles::PRICE.apply_to(money(row.price)),
            styles::MUTED.apply_to(storage),
        );
    }
    out
}

pub fn render_platforms(platforms: &[PlatformSummary]) -> String {
    let mut out = String::new();
    for p in platforms {
        let _ = writeln!(
            out,
            "{} {:>3} game(s)  {}",
            styles::PLATFORM.apply_to(fit(&p.name, PLATFORM_WIDTH)),
            p.game_count,
            styles::PRICE.apply_to(money(p.price)),
        );
    }
    out
}

pub fn render_genres(genres: &[String]) -> String {
    genres.iter().map(|g| format!("{}\n", g)).collect()
}

pub fn render_stats(stats: &CollectionStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", styles::HEADING.apply_to("Collection"));
    let _ = writeln!(out, "  Games:      {}", stats.total_games);
    let _ = writeln!(out, "  Copies:     {}", stats.total_items);
    let _ = writeln!(
        out,
        "  Value:      {}",
        styles::PRICE.apply_to(format!("${:.2}", stats.total_value))
    );
    let _ = writeln!(
        out,
        "  Platforms:  {} {}",
        stats.platform_count,
        styles::MUTED.apply_to(list_or_dash(&stats.platforms))
    );
    let _ = writeln!(
        out,
        "  Genres:     {} {}",
        stats.genre_count,
        styles::MUTED.apply_to(list_or_dash(&stats.genres))
    );
    out
}

fn list_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        format!("({})", values.join(", "))
    }
}

fn money(value: f64) -> String {
    format!("{:>width$}", format!("${:.2}", value), width = MONEY_WIDTH)
}

fn time_ago(date: DateTime<Utc>) -> String {
    let elapsed = Utc::now()
        .signed_duration_since(date)
        .to_std()
        .unwrap_or_default();
    Formatter::new().convert(elapsed)
}

/// Pads or truncates to an exact display width, with an ellipsis when cut.
fn fit(text: &str, width: usize) -> String {
    let mut out = if text.width() > width {
        let mut cut = String::new();
        let mut used = 0;
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w + 1 > width {
                break;
            }
            cut.push(c);
            used += w;
        }
        cut.push('…');
        cut
    } else {
        text.to_string()
    };
    let padding = width.saturating_sub(out.width());
    out.push_str(&" ".repeat(padding));
    out
}
