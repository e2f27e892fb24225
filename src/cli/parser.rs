use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for helpmeter.
/// CLI tool to collect "was this helpful?" votes and render chart statistics.
#[derive(Parser)]
#[command(
    name = "helpmeter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Collect pro/contra feedback votes on posts and render aggregated chart statistics from SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a pro or contra vote on a post
    Vote {
        /// Post being voted on
        post_id: i64,

        #[arg(long = "pro", help = "Record a positive (helpful) vote")]
        pro: bool,

        #[arg(long = "contra", help = "Record a negative (not helpful) vote")]
        contra: bool,

        #[arg(long = "user", help = "Opaque voter token (enables duplicate detection)")]
        user: Option<String>,

        /// Vote timestamp (YYYY-MM-DD HH:MM[:SS]); defaults to now
        #[arg(long = "time", help = "Vote timestamp (defaults to now)")]
        time: Option<String>,
    },

    /// Register post metadata (title, permalink, publish date)
    Register {
        /// Host post id
        post_id: i64,

        /// Post title
        title: String,

        #[arg(long = "url", help = "Post permalink")]
        url: Option<String>,

        /// Publish date (YYYY-MM-DD); defaults to today
        #[arg(long = "published", help = "Publish date (YYYY-MM-DD)")]
        published: Option<String>,

        #[arg(long = "hidden", help = "Suppress the voting widget for this post")]
        hidden: bool,
    },

    /// List registered posts with their vote totals
    Posts,

    /// Show pro/contra counts for one post or all posts
    Counts {
        /// Post id (omit with --all)
        post_id: Option<i64>,

        #[arg(long = "all", help = "Counts over all posts")]
        all: bool,

        #[arg(long = "percent", help = "Show percentages instead of raw counts")]
        percent: bool,
    },

    /// List the years that have votes, newest first
    Years,

    /// Print a Chart.js payload for a period
    Stats {
        /// Period: today, yesterday, week, month, year or total
        #[arg(long, short, help = "today | yesterday | week | month | year | total")]
        period: Option<String>,

        #[arg(long, help = "Year (defaults to the reference date's year)")]
        year: Option<i32>,

        #[arg(long, help = "Month 1-12 (defaults to the reference date's month)")]
        month: Option<u32>,

        /// Custom range; overrides --period
        #[arg(
            long,
            value_name = "RANGE",
            help = "Custom range: YYYY, YYYY-MM, YYYY-MM-DD or FROM:TO"
        )]
        range: Option<String>,

        /// Reference date standing in for "today" (YYYY-MM-DD)
        #[arg(long = "now", value_name = "DATE", help = "Override the reference date")]
        now: Option<String>,
    },

    /// Most (or least) helpful posts as a JSON feed
    Top {
        #[arg(long = "least", help = "Rank by contra - pro instead")]
        least: bool,

        #[arg(long = "limit", help = "Entries to show (default: configured widget amount)")]
        limit: Option<usize>,
    },

    /// Recently submitted pro (or contra) votes as a JSON feed
    Recent {
        #[arg(long = "contra", help = "Show recent contra votes instead of pro")]
        contra: bool,

        #[arg(long = "limit", help = "Entries to show (default: configured widget amount)")]
        limit: Option<usize>,
    },

    /// Print the HTML voting widget fragment for a post
    Widget {
        /// Post the widget belongs to
        post_id: i64,

        #[arg(long = "user", help = "Voter token used for the already-voted check")]
        user: Option<String>,
    },

    /// Export vote rows
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup into a .zip archive")]
        compress: bool,
    },
}
