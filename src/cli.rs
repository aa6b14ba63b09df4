use clap::{Parser as CliParser, Subcommand};

#[derive(CliParser)]
#[command(author, version, about, long_about=None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print the resulting values as a JSON array
    #[arg(long, conflicts_with = "tree")]
    pub json: bool,
    /// Render the resulting chain as a tree
    #[arg(long)]
    pub tree: bool,
    /// The initial values of the list, separated by commas
    #[arg(short = 'l', long = "list", value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Vec<i64>,
    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Subcommand)]
pub enum Action {
    /// Add a value at the end of the list
    Append {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Add a value at the beginning of the list
    Prepend {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Insert a value at the given 0-based index
    Insert {
        #[arg(allow_negative_numbers = true)]
        index: i64,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Show the value at the given 0-based index
    Get {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Remove every occurrence of a value
    Delete {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Remove the value at the given 0-based index
    DeleteIndex {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Tell whether a value is in the list
    Exists {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Show the position of a value
    Find {
        /// Show every position instead of the first one
        #[arg(short, long)]
        all: bool,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Show the middle value of the list
    Middle,
}
