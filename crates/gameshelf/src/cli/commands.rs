//! # CLI Layer
//!
//! This module is **one possible UI client** for gameshelf, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, prompts)
//! - Decides where log output goes
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: convert shell arguments into typed commands via clap
//! 2. **Logging**: `env_logger`, `warn` by default, `debug` with `-v`, `RUST_LOG` overrides
//! 3. **Context Setup**: build the filesystem-backed API via `gameshelfapp::init`
//! 4. **Dispatch**: route commands to the API
//! 5. **Confirmation**: destructive commands preview, then ask (or require `--yes`)
//! 6. **Output**: text via `render.rs`, or JSON with `--output json`

use super::render;
use super::setup::{CatalogCommands, Cli, Commands, OutputFormat};
use clap::Parser;
use gameshelfapp::catalog::CatalogFilter;
use gameshelfapp::commands::{CmdResult, ItemFilter};
use gameshelfapp::config::ShelfConfig;
use gameshelfapp::error::{Result, ShelfError};
use gameshelfapp::init::{initialize, ShelfContext};
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Needs no context, so it works even when the data dir config is broken
    if let Some(Commands::Config { template: true }) = &cli.command {
        print!("{}", ShelfConfig::template());
        return Ok(());
    }

    let data_override = cli.data.as_ref().map(PathBuf::from);
    let mut ctx = initialize(data_override)?;
    log::debug!(
        "Collection file: {}",
        ctx.api.paths().collection_file.display()
    );

    let result = match cli.command {
        None => ctx.api.list_items(ItemFilter::default())?,
        Some(Commands::List { platform, search }) => {
            ctx.api.list_items(ItemFilter { platform, search })?
        }
        Some(Commands::Add { game_id, platform }) => {
            ctx.api.add_game(&game_id, platform.as_deref())?
        }
        Some(Commands::Remove { selectors, yes }) => handle_remove(&mut ctx, &selectors, yes)?,
        Some(Commands::Qty { selector, quantity }) => {
            ctx.api.set_quantity(&[selector], quantity)?
        }
        Some(Commands::Inc { selector }) => ctx.api.increment(&selector)?,
        Some(Commands::Dec { selector }) => ctx.api.decrement(&selector)?,
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes)?,
        Some(Commands::Stats) => ctx.api.stats()?,
        Some(Commands::Catalog { action }) => match action {
            CatalogCommands::Platforms => ctx.api.catalog_platforms()?,
            CatalogCommands::Games {
                platform,
                search,
                genre,
            } => ctx.api.catalog_games(&CatalogFilter {
                platform,
                search,
                genre,
            })?,
            CatalogCommands::Genres => ctx.api.catalog_genres()?,
        },
        Some(Commands::Config { .. }) => return handle_config(&ctx, cli.output),
    };

    emit(&result, cli.output)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn emit(result: &CmdResult, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => print!("{}", render::render_text(result)),
        OutputFormat::Json => print!("{}", render::render_json(result)?),
    }
    Ok(())
}

fn handle_remove(ctx: &mut ShelfContext, selectors: &[String], yes: bool) -> Result<CmdResult> {
    let targets = ctx.api.preview_remove(selectors)?;
    if !yes {
        let mut prompt = String::from("About to remove:\n");
        for target in &targets {
            prompt.push_str(&format!(
                "  {}. {} ({}) x{}\n",
                target.index, target.item.name, target.item.platform, target.item.quantity
            ));
        }
        prompt.push_str(&format!("Remove {} item(s)?", targets.len()));
        if !confirm(&prompt)? {
            return Ok(aborted());
        }
    }
    ctx.api.remove_items(selectors)
}

fn handle_clear(ctx: &mut ShelfContext, yes: bool) -> Result<CmdResult> {
    let preview = ctx.api.preview_clear();
    if !yes && preview.items > 0 {
        let prompt = format!(
            "Clear all {} item(s) ({} copies) from your collection?",
            preview.items, preview.copies
        );
        if !confirm(&prompt)? {
            return Ok(aborted());
        }
    }
    ctx.api.clear()
}

fn aborted() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(gameshelfapp::commands::CmdMessage::info("Aborted, nothing changed"));
    result
}

/// Asks on the terminal. Without a terminal there is nobody to ask, so `--yes` is required.
fn confirm(prompt: &str) -> Result<bool> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        log::debug!("stdin is not a terminal, not prompting");
        return Err(ShelfError::Api(
            "Refusing to change the collection without confirmation; pass --yes".to_string(),
        ));
    }

    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn handle_config(ctx: &ShelfContext, output: OutputFormat) -> Result<()> {
    let paths = ctx.api.paths();
    match output {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "config": ctx.config,
                "dataDir": paths.data_dir,
                "collectionFile": paths.collection_file,
                "configFiles": paths.config_files,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            let text = toml::to_string(&ctx.config)
                .map_err(|e| ShelfError::Config(e.to_string()))?;
            println!("# data dir:        {}", paths.data_dir.display());
            println!("# collection file: {}", paths.collection_file.display());
            for file in &paths.config_files {
                let state = if file.exists() { "" } else { " (not present)" };
                println!("# config file:     {}{}", file.display(), state);
            }
            println!();
            print!("{}", text);
        }
    }
    Ok(())
}
