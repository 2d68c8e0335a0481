use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use commands::{create, episodes};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "showconf")]
#[command(about = "Build show configuration documents from TMDB metadata")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a full show configuration document
    #[command(long_about = "Fetch show, season, and episode metadata from TMDB in every requested language and merge it with the timing data recorded in a previous configuration file. Every (season, episode) pair fetched must have a timing entry in the previous config; a miss aborts the run.")]
    Create {
        /// TMDB API key. See https://www.themoviedb.org/documentation/api for
        /// instructions on acquiring one.
        #[arg(short = 'k', long)]
        api_key: String,

        /// TV show ID in TMDB. This is available from the URL when viewing a
        /// TV show on https://www.themoviedb.org.
        #[arg(short = 't', long)]
        tv_id: String,

        /// Comma-separated language list to include. Can be either a
        /// two-letter code or a language-country code. Repeatable.
        #[arg(short = 'l', long = "languages", default_value = "en")]
        languages: Vec<String>,

        /// Maximum number of concurrent API requests
        #[arg(short = 'r', long, default_value_t = 1)]
        rate_limit: usize,

        /// A previous config to copy information not found on TMDB from,
        /// such as timing data
        #[arg(short = 'e', long)]
        existing_config: PathBuf,

        /// Output file. If omitted, print to stdout instead.
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Pretty print JSON output. Otherwise, output will be minified.
        #[arg(short = 'p', long, default_value_t = true, action = ArgAction::Set)]
        pretty_print: bool,
    },
    /// List every episode of a show in a single language
    #[command(long_about = "Fetch every season of a show from TMDB in the API's default language and print a flat list of episodes (name, overview, season, episode). No previous config and no merge step.")]
    Episodes {
        /// TMDB API key
        #[arg(short = 'k', long)]
        api_key: String,

        /// TV show ID in TMDB
        #[arg(short = 't', long)]
        tv_id: String,

        /// Output file. If omitted, print to stdout instead.
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Pretty print JSON output. Otherwise, output will be minified.
        #[arg(short = 'p', long, default_value_t = false, action = ArgAction::Set)]
        pretty_print: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    match cli.command {
        Commands::Create {
            api_key,
            tv_id,
            languages,
            rate_limit,
            existing_config,
            output,
            pretty_print,
        } => {
            create::run_create(
                api_key,
                tv_id,
                languages,
                rate_limit,
                existing_config,
                output,
                pretty_print,
            )
            .await
        }
        Commands::Episodes {
            api_key,
            tv_id,
            output,
            pretty_print,
        } => episodes::run_episodes(api_key, tv_id, output, pretty_print).await,
    }
}
