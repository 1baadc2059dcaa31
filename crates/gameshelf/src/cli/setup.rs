use clap::{Parser, Subcommand, ValueEnum};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "gameshelf",
    bin_name = "gameshelf",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Browse the game shop catalog and keep track of your collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the collection and its config
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, help_heading = "Options")]
    pub output: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List your collection
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only items on this platform
        #[arg(short, long)]
        platform: Option<String>,

        /// Only items whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a catalog game to your collection
    #[command(display_order = 2)]
    Add {
        /// Catalog id of the game
        game_id: String,

        /// Platform to add it for (required when the game is on several)
        #[arg(short, long)]
        platform: Option<String>,
    },

    /// Remove items from your collection
    #[command(alias = "rm", display_order = 3)]
    Remove {
        /// Items to remove (e.g. 1 2-4 "1-Nintendo Switch" zelda)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Set the quantity of an item (0 removes it)
    #[command(display_order = 4)]
    Qty {
        /// The item (index, uniqueId or name)
        selector: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Add one copy of an item
    #[command(display_order = 5)]
    Inc {
        #[arg(required = true, num_args = 1..)]
        selector: Vec<String>,
    },

    /// Remove one copy of an item (never below 1)
    #[command(display_order = 6)]
    Dec {
        #[arg(required = true, num_args = 1..)]
        selector: Vec<String>,
    },

    /// Empty the collection
    #[command(display_order = 7)]
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Collection totals
    #[command(display_order = 8)]
    Stats,

    /// Browse the shop catalog
    #[command(display_order = 9)]
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },

    /// Show the effective configuration
    #[command(display_order = 10)]
    Config {
        /// Print a commented sample gameshelf.toml instead
        #[arg(long)]
        template: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Platforms with game counts and prices
    Platforms,

    /// Games, one row per platform
    Games {
        #[arg(short, long)]
        platform: Option<String>,

        /// Name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long)]
        genre: Option<String>,
    },

    /// Genres in the catalog
    Genres,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["gameshelf"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn parses_aliases_and_globals() {
        let cli =
            Cli::try_parse_from(["gameshelf", "rm", "1", "2-3", "--yes", "--output", "json"])
                .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Some(Commands::Remove { selectors, yes }) => {
                assert_eq!(selectors, vec!["1", "2-3"]);
                assert!(yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn qty_accepts_negative_numbers() {
        let cli = Cli::try_parse_from(["gameshelf", "qty", "1", "-2"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Qty { quantity: -2, .. })
        ));
    }

    #[test]
    fn catalog_games_filters() {
        let cli = Cli::try_parse_from([
            "gameshelf",
            "catalog",
            "games",
            "--platform",
            "PC",
            "--genre",
            "RPG",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Catalog {
                action: CatalogCommands::Games { platform, genre, search },
            }) => {
                assert_eq!(platform.as_deref(), Some("PC"));
                assert_eq!(genre.as_deref(), Some("RPG"));
                assert_eq!(search, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
