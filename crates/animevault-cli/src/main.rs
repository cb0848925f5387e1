use anime_vault_core::SortKey;
use anime_vault_models::WatchStatus;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{add, clear, edit, list, remove, search, stats, toggle};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "animevault")]
#[command(about = "AnimeVault - Track the anime you watch, finish, and plan to watch")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new entry to the vault
    #[command(long_about = "Add a new entry to the vault. Title and status are required; genres are comma-separated; a missing poster URL gets a generated placeholder.")]
    Add {
        /// Title of the entry (must be unique, case-insensitive)
        title: String,

        /// Watch status
        #[arg(long, value_enum)]
        status: StatusArg,

        /// Poster image URL
        #[arg(long)]
        poster: Option<String>,

        /// Comma-separated genres, e.g. "Action, Adventure"
        #[arg(long)]
        genres: Option<String>,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },

    /// List vault entries
    #[command(long_about = "List vault entries, optionally filtered by status and sorted by title or date added (newest first).")]
    List {
        /// Only show entries with this status
        #[arg(long, value_enum, default_value = "all")]
        status: FilterArg,

        /// Sort order
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },

    /// Edit an existing entry
    #[command(long_about = "Edit an existing entry by id. Only the provided fields change; id and date added are immutable. A blank --poster keeps the current poster.")]
    Edit {
        /// Id of the entry to edit
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New watch status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        /// New poster image URL
        #[arg(long)]
        poster: Option<String>,

        /// New comma-separated genres
        #[arg(long)]
        genres: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an entry from the vault
    Delete {
        /// Id of the entry to delete
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },

    /// Toggle an entry between read and unread
    #[command(long_about = "Toggle an entry between read and unread. Marking read sets status to completed; marking unread sets status to ongoing.")]
    Toggle {
        /// Id of the entry to toggle
        id: String,
    },

    /// Remove every entry from the vault
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },

    /// Show collection statistics
    Stats,

    /// Search the anime database
    #[command(long_about = "Search the anime database (Jikan / MyAnimeList) by text and show candidate results with score, episode count, and synopsis.")]
    Search {
        /// Search text
        query: String,

        /// Maximum number of results (defaults to the configured limit)
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Search and import one result into the vault
    #[command(long_about = "Search the anime database and import one result into the vault with status plan-to-watch. Without --pick, an interactive picker is shown.")]
    Import {
        /// Search text
        query: String,

        /// 1-based index of the result to import
        #[arg(long)]
        pick: Option<usize>,

        /// Maximum number of results (defaults to the configured limit)
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    Ongoing,
    Completed,
    PlanToWatch,
}

impl From<StatusArg> for WatchStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Ongoing => WatchStatus::Ongoing,
            StatusArg::Completed => WatchStatus::Completed,
            StatusArg::PlanToWatch => WatchStatus::PlanToWatch,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Ongoing,
    Completed,
    PlanToWatch,
}

impl From<FilterArg> for Option<WatchStatus> {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => None,
            FilterArg::Ongoing => Some(WatchStatus::Ongoing),
            FilterArg::Completed => Some(WatchStatus::Completed),
            FilterArg::PlanToWatch => Some(WatchStatus::PlanToWatch),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Title,
    Date,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Title => SortKey::Title,
            SortArg::Date => SortKey::DateAdded,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Add {
            title,
            status,
            poster,
            genres,
            description,
        } => add::run_add(title, status.into(), poster, genres, description, &output).await,
        Commands::List { status, sort } => {
            list::run_list(status.into(), sort.map(Into::into), &output).await
        }
        Commands::Edit {
            id,
            title,
            status,
            poster,
            genres,
            description,
        } => {
            edit::run_edit(
                id,
                title,
                status.map(Into::into),
                poster,
                genres,
                description,
                &output,
            )
            .await
        }
        Commands::Delete { id, yes } => remove::run_delete(id, yes, &output).await,
        Commands::Toggle { id } => toggle::run_toggle(id, &output).await,
        Commands::Clear { yes } => clear::run_clear(yes, &output).await,
        Commands::Stats => stats::run_stats(&output).await,
        Commands::Search { query, limit } => search::run_search(query, limit, &output).await,
        Commands::Import { query, pick, limit } => {
            search::run_import(query, pick, limit, &output).await
        }
    }
}
