//! Available subcommands.

use clap::Subcommand;

/// Model lifecycle commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List models known to the runtime plus pulls recorded in the job logs
    List {
        /// Only show models whose name contains this text (case-sensitive)
        #[arg(short, long, default_value = "")]
        filter: String,
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Models per page
        #[arg(long = "page-size", default_value_t = 20)]
        page_size: usize,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pull a model into the runtime, streaming progress to the job log
    Pull {
        /// Model name, e.g. "llama2" or "qwen2.5:7b"
        name: String,
    },

    /// Remove a model from the runtime and delete its job logs
    #[command(alias = "remove")]
    Rm {
        /// Model name as shown by `list`
        name: String,
    },

    /// Show the runtime's description of a model
    Show {
        /// Model name as shown by `list`
        name: String,
    },

    /// Print the job log of the last pull of a model
    Log {
        /// Model name as passed to `pull`
        name: String,
    },
}
