//! rosterdb Shell Binary
//!
//! Interactive record manager over stdin/stdout.

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rosterdb::shell::Shell;
use rosterdb::{persist, Config, DuplicatePolicy};
use tracing_subscriber::{fmt, EnvFilter};

/// rosterdb shell
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(about = "In-memory student record manager")]
#[command(version)]
struct Args {
    /// Data file used by `save` and `load` without a path
    #[arg(short, long, default_value = "students.txt")]
    data_file: PathBuf,

    /// What `add` does with an identifier that already exists
    #[arg(short, long, value_enum, default_value_t = Policy::Upsert)]
    policy: Policy,

    /// Load the data file before reading commands
    #[arg(short, long)]
    load: bool,

    /// fsync the data file after every save
    #[arg(long)]
    sync: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Replace the existing record
    Upsert,
    /// Keep the old record in the listing, index the new one
    Shadow,
}

impl From<Policy> for DuplicatePolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Upsert => DuplicatePolicy::Upsert,
            Policy::Shadow => DuplicatePolicy::Shadow,
        }
    }
}

fn main() {
    // Logs go to stderr so they never interleave with shell output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rosterdb=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("rosterdb v{}", rosterdb::VERSION);
    tracing::info!("Data file: {}", args.data_file.display());

    let config = Config::builder()
        .data_file(args.data_file.clone())
        .duplicate_policy(args.policy.into())
        .sync_on_save(args.sync)
        .build();

    let mut shell = Shell::new(config);

    if args.load {
        let path = shell.config().data_file.clone();
        // A missing file is reported, not fatal
        if let Err(e) = persist::load_from_path(shell.store_mut(), &path) {
            tracing::error!("Failed to load {}: {}", path.display(), e);
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = shell.run(stdin.lock(), &mut stdout) {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}
