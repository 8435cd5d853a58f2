//! CLI argument definitions using clap
//!
//! Commands:
//! - callsearch serve --seed <path> [--host <host>] [--port <port>]
//! - callsearch search --seed <path> [predicate flags]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// callsearch - conjunctive multi-predicate search over a sorted call index
#[derive(Parser, Debug)]
#[command(name = "callsearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the HTTP search endpoint over a seeded in-memory index
    Serve {
        /// Path to a JSON seed file (array of call documents)
        #[arg(long)]
        seed: Option<PathBuf>,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },

    /// Run one search against a seeded index and print the results
    Search {
        /// Path to a JSON seed file (array of call documents)
        #[arg(long)]
        seed: PathBuf,

        /// Lower time bound (epoch milliseconds or RFC 3339)
        #[arg(long)]
        timestamp_from: Option<String>,

        /// Upper time bound (epoch milliseconds or RFC 3339)
        #[arg(long)]
        timestamp_to: Option<String>,

        /// Sentiment subject role: caller or agent
        #[arg(long)]
        sentiment_who: Option<String>,

        /// Sentiment metric kind: average or trend
        #[arg(long)]
        sentiment_what: Option<String>,

        /// Sentiment direction: positive or negative
        #[arg(long)]
        sentiment_direction: Option<String>,

        /// Comma-separated entity tag list (all must match)
        #[arg(long)]
        entity: Option<String>,

        /// Language code
        #[arg(long)]
        language: Option<String>,

        /// Free-text substring matched against call bodies
        #[arg(long)]
        job_name: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
