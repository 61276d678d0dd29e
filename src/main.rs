//! ai-playbook: browse practical AI use cases for students and faculty

use ai_playbook::catalog::RoleId;
use ai_playbook::config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::favorites::{ExportFormat, FavoriteAction};
use commands::list::ListOptions;
use commands::utils;

#[derive(Parser)]
#[command(name = "ai-playbook")]
#[command(about = "Practical ways to use AI, for students and faculty", long_about = None)]
#[command(version)]
struct Cli {
    /// Store file for view state and favorites
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List use cases for the current role, tool and search
    List {
        /// Role to show for this run: student or faculty
        #[arg(long, short)]
        role: Option<RoleId>,

        /// Tool to show for this run, or "all"
        #[arg(long, short)]
        tool: Option<String>,

        /// Search text for this run
        #[arg(long, short)]
        query: Option<String>,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// List favorites for the role instead
        #[arg(long)]
        favorites: bool,
    },

    /// Show details for one use case
    Show {
        /// Use case title (case-insensitive)
        title: String,

        #[command(flatten)]
        target: Target,
    },

    /// Copy a use case's prompt to the clipboard
    Copy {
        /// Use case title (case-insensitive)
        title: String,

        #[command(flatten)]
        target: Target,
    },

    /// Switch the audience role
    Role {
        /// student or faculty
        role: RoleId,
    },

    /// Filter by tool ("all" to clear)
    Tool {
        /// chatgpt, copilot, firefly, gemini, zoom, or all
        tool: String,
    },

    /// Set the search text (omit to clear)
    Search {
        /// Words to search titles, prompts and tags for
        query: Vec<String>,
    },

    /// Manage favorites
    #[command(subcommand)]
    Fav(FavCommands),

    /// Show the persisted view state
    State,

    /// Restore default view state and remove all favorites
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum FavCommands {
    /// Add a use case to favorites
    Add {
        title: String,
        #[command(flatten)]
        target: Target,
    },

    /// Remove a use case from favorites
    Remove {
        title: String,
        #[command(flatten)]
        target: Target,
    },

    /// Favorite or unfavorite a use case
    Toggle {
        title: String,
        #[command(flatten)]
        target: Target,
    },

    /// List favorites for the current role
    List {
        /// Include every role
        #[arg(long)]
        all: bool,
    },

    /// Export favorites to a readable format
    Export {
        /// Output format: md or json (default: md)
        #[arg(long, short, default_value = "md")]
        format: String,

        /// Output file (prints to stdout if omitted)
        #[arg(long, short)]
        output: Option<String>,

        /// Include every role
        #[arg(long)]
        all: bool,
    },

    /// Remove all favorites
    Clear,
}

/// Narrows a title to a single record
#[derive(clap::Args)]
struct Target {
    /// Tool the use case belongs to
    #[arg(long, short)]
    tool: Option<String>,

    /// Role the use case belongs to (defaults to the current role)
    #[arg(long, short)]
    role: Option<RoleId>,
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(config::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config::log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut playbook = utils::open_playbook(cli.store)?;

    match cli.command {
        Commands::List {
            role,
            tool,
            query,
            limit,
            favorites,
        } => {
            let options = ListOptions {
                role,
                tool: tool.as_deref().map(utils::parse_tool_filter).transpose()?,
                query,
                limit,
                favorites,
            };
            println!("{}", commands::list::execute(&playbook, &options));
        }

        Commands::Show { title, target } => {
            let record = resolve(&title, &target, playbook.filter().role)?;
            println!(
                "{}",
                commands::show::format_details(record, playbook.is_favorite(record))
            );
        }

        Commands::Copy { title, target } => {
            let record = resolve(&title, &target, playbook.filter().role)?;
            commands::copy::execute(record);
        }

        Commands::Role { role } => {
            playbook.set_role(role);
            println!("{}", commands::list::execute(&playbook, &ListOptions::default()));
        }

        Commands::Tool { tool } => {
            let tool = utils::parse_tool_filter(&tool)?;
            playbook.set_tool(tool);
            println!("{}", commands::list::execute(&playbook, &ListOptions::default()));
        }

        Commands::Search { query } => {
            playbook.set_query(query.join(" "));
            println!("{}", commands::list::execute(&playbook, &ListOptions::default()));
        }

        Commands::Fav(fav) => run_fav(&mut playbook, fav)?,

        Commands::State => {
            println!("{}", commands::state::format_state(&playbook, playbook.store().path()));
        }

        Commands::Reset { yes } => {
            commands::state::reset(&mut playbook, yes)?;
        }
    }

    Ok(())
}

fn run_fav<S: ai_playbook::store::KeyValueStore>(
    playbook: &mut ai_playbook::engine::Playbook<S>,
    command: FavCommands,
) -> Result<()> {
    let current_role = playbook.filter().role;

    let (title, target, action) = match command {
        FavCommands::Add { title, target } => (title, target, FavoriteAction::Add),
        FavCommands::Remove { title, target } => (title, target, FavoriteAction::Remove),
        FavCommands::Toggle { title, target } => (title, target, FavoriteAction::Toggle),
        FavCommands::List { all } => {
            let roles = if all {
                RoleId::ALL.to_vec()
            } else {
                vec![current_role]
            };
            let sections: Vec<String> = roles
                .into_iter()
                .map(|role| {
                    let options = ListOptions {
                        role: Some(role),
                        favorites: true,
                        ..Default::default()
                    };
                    commands::list::execute(&*playbook, &options)
                })
                .collect();
            println!("{}", sections.join("\n\n"));
            return Ok(());
        }
        FavCommands::Export {
            format,
            output,
            all,
        } => {
            let format =
                ExportFormat::from_str(&format).context("Invalid format. Use 'md' or 'json'")?;
            let role = if all { None } else { Some(current_role) };
            return commands::favorites::export(playbook, role, format, output.as_deref());
        }
        FavCommands::Clear => {
            let count = playbook.favorites().len();
            playbook.clear_favorites();
            println!("{} {} favorite(s)", "Removed".yellow(), count);
            return Ok(());
        }
    };

    let record = resolve(&title, &target, current_role)?;
    println!("{}", commands::favorites::apply(playbook, record, action));
    Ok(())
}

fn resolve(
    title: &str,
    target: &Target,
    current_role: RoleId,
) -> Result<&'static ai_playbook::catalog::UseCase> {
    utils::resolve_record(title, target.tool.as_deref(), target.role, current_role)
}
