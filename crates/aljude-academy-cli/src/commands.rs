use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the crate version.
    Version,
    /// Rebuild the catalog from authored content and check every invariant.
    Validate,
    /// Entity counts for the compiled-in catalog.
    Stats,
    /// Enumerate every pre-renderable route.
    Routes {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Substring search across the catalog tree.
    Search { query: String },
    /// Look up one entity and print its page payload.
    Show {
        #[command(subcommand)]
        command: ShowCommand,
    },
    /// Score a complete answer set for one sub-capability assessment.
    Score {
        #[arg(long)]
        capability: String,
        #[arg(long)]
        sub: String,
        /// Repeatable, `qN=<not|partial|full>`.
        #[arg(long = "answer")]
        answers: Vec<String>,
    },
    /// OpenAPI document operations.
    Openapi {
        #[command(subcommand)]
        command: OpenapiCommand,
    },
}

#[derive(Subcommand)]
pub(crate) enum ShowCommand {
    Category { slug: String },
    Capability { slug: String },
    SubCapability { capability: String, sub: String },
}

#[derive(Subcommand)]
pub(crate) enum OpenapiCommand {
    Generate {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
