use clap::{Parser, Subcommand};

/// Copy and paste YAML key paths
#[derive(Parser)]
#[command(author, about, long_about=None, disable_version_flag(true))]
pub struct Args {
    /// force color mode (defaults to check tty)
    #[arg(long)]
    pub color: bool,

    /// force no-color mode (defaults to check tty)
    #[arg(long)]
    pub no_color: bool,

    /// display version and quit
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    /// prepend time to each log line
    #[arg(long)]
    pub log_time: bool,

    /// Turn general verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configure component wise logging
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub log: Option<Vec<String>>,

    /// quiet path errors
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub action: Option<Actions>,
}

#[derive(Subcommand)]
pub enum Actions {
    Copy {
        /// Print the key path at a cursor position

        /// YAML file to read (defaults to stdin)
        #[clap(name = "FILE")]
        file: Option<String>,

        /// Cursor position as LINE:COL (1-based)
        #[arg(long, value_name = "LINE:COL", conflicts_with = "offset")]
        at: Option<String>,

        /// Cursor position as a char offset (0-based)
        #[arg(long, value_name = "N")]
        offset: Option<usize>,
    },
    Paste {
        /// Insert the structure a key path needs to exist

        /// The dotted key path to paste
        #[clap(name = "PATH")]
        path: String,

        /// YAML file to read (defaults to stdin)
        #[clap(name = "FILE")]
        file: Option<String>,

        /// Cursor position as LINE:COL (1-based)
        #[arg(long, value_name = "LINE:COL", conflicts_with = "offset")]
        at: Option<String>,

        /// Cursor position as a char offset (0-based)
        #[arg(long, value_name = "N")]
        offset: Option<usize>,

        /// Indent new levels with this many spaces
        #[arg(long, value_name = "N", conflicts_with = "tabs")]
        indent: Option<usize>,

        /// Indent new levels with tabs
        #[arg(long)]
        tabs: bool,
    },
    Locate {
        /// Print the position of an existing key path

        /// The dotted key path to locate
        #[clap(name = "PATH")]
        path: String,

        /// YAML file to read (defaults to stdin)
        #[clap(name = "FILE")]
        file: Option<String>,
    },
}
