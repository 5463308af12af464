//! Letter Words - CLI
//!
//! Prints the dictionary words buildable from a set of letters, or serves the
//! same lookup over HTTP.

use anyhow::{Context, Result};
use clap::{Args, Command, FromArgMatches, Parser, Subcommand};
use letter_words::{
    commands::{run_serve, solve_letters},
    log::init_tracing,
    output::print_summary,
    server::{DEFAULT_ADDR, DEFAULT_WRITE_TIMEOUT, ServerConfig},
    wordlists::load_from_file,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "letter_words",
    about = "Find every dictionary word that can be built from a set of letters",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters to build words from (same as `solve <LETTERS>`)
    letters: Option<String>,

    /// Dictionary file, one word per line
    #[arg(
        short,
        long,
        global = true,
        env = "LETTER_WORDS_DICT",
        default_value = "german.txt"
    )]
    dict: PathBuf,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve lookups over HTTP at GET /<letters> (default)
    Serve(ServeArgs),

    /// Print the words buildable from the given letters
    Solve {
        /// Letters to build words from
        letters: String,

        /// Print match statistics to stderr
        #[arg(short, long)]
        summary: bool,
    },
}

#[derive(Args, Debug, PartialEq, Eq)]
struct ServeArgs {
    /// Address the server listens on
    #[arg(short, long, env = "LETTER_WORDS_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// Seconds a lookup may take before the server answers 503
    #[arg(
        long,
        env = "LETTER_WORDS_WRITE_TIMEOUT",
        default_value_t = DEFAULT_WRITE_TIMEOUT.as_secs()
    )]
    write_timeout: u64,
}

impl ServeArgs {
    /// Server arguments as if `serve` had been given without options
    ///
    /// Environment variables still apply.
    fn from_defaults() -> Result<Self> {
        let matches = Self::augment_args(Command::new("serve")).try_get_matches_from(["serve"])?;
        Ok(Self::from_arg_matches(&matches)?)
    }
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            addr: args.addr,
            write_timeout: Duration::from_secs(args.write_timeout),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Without a dictionary there is nothing to serve or solve
    let dictionary = load_from_file(&cli.dict)
        .with_context(|| format!("cannot start without dictionary {}", cli.dict.display()))?;

    // Bare letters solve, no arguments at all serve
    let command = match (cli.command, cli.letters) {
        (Some(command), _) => command,
        (None, Some(letters)) => Commands::Solve {
            letters,
            summary: false,
        },
        (None, None) => Commands::Serve(ServeArgs::from_defaults()?),
    };

    match command {
        Commands::Serve(args) => run_serve(&ServerConfig::from(args), dictionary),
        Commands::Solve { letters, summary } => {
            let result = solve_letters(&letters, &dictionary);

            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&result.output)
                .context("failed to write results")?;
            stdout.flush().context("failed to write results")?;

            if summary {
                print_summary(&result.summary);
            }
            Ok(())
        }
    }
}
