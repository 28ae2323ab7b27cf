//! # SOC Index CLI (`soc`)
//!
//! Queries the SOC 2020 occupational classification loaded from the JSON
//! tables named in the config file.
//!
//! ## Usage
//!
//! ```bash
//! soc --config ./soc.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `soc sources` | Show the data tables and their row counts |
//! | `soc lookup "<title>"` | Look up a job title |
//! | `soc major-group <code>` | Major group of a code |
//! | `soc unique-major-groups <code>...` | Distinct major groups of several codes |
//! | `soc node <code>` | Show one group of the hierarchy |
//! | `soc leaf-text` | Aggregated description of every Unit group |
//! | `soc rephrase <code>` | Aggregated description of one Unit group |
//! | `soc annotate` | Add descriptions to a classification payload |
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use soc_index::catalog::Catalog;
use soc_index::{config, lookup, node, rephrase, sources};

/// SOC Index CLI: job-title and code lookups over the SOC 2020
/// occupational classification.
#[derive(Parser)]
#[command(
    name = "soc",
    about = "SOC Index: lookups over the SOC 2020 occupational classification",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Looked up in the working directory, then the home directory.
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the configured data tables and whether they load.
    Sources,

    /// Look up a job title.
    ///
    /// Matching is case-insensitive. With `--similarity`, every index title
    /// containing the query is also reported.
    Lookup {
        title: String,
        /// Also collect substring matches.
        #[arg(long)]
        similarity: bool,
        /// Print the full result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the major group of a code as JSON.
    MajorGroup { code: String },

    /// Print the distinct major groups of several codes as JSON.
    UniqueMajorGroups {
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Show one group: level, parent, children, and (for Unit groups) tasks,
    /// qualifications, and job titles.
    Node { code: String },

    /// Print aggregated Unit-group descriptions as JSON lines.
    LeafText {
        /// Only print this code.
        #[arg(long)]
        code: Option<String>,
    },

    /// Print the aggregated description of a Unit group as JSON.
    Rephrase { code: String },

    /// Annotate a classification payload with group descriptions.
    ///
    /// Reads JSON from `--input`, or stdin when omitted.
    Annotate {
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    // `sources` reports on the tables without building anything from them.
    if let Commands::Sources = cli.command {
        return sources::list_sources(&cfg);
    }

    let catalog = Catalog::load(&cfg)?;

    match cli.command {
        Commands::Sources => unreachable!(),
        Commands::Lookup {
            title,
            similarity,
            json,
        } => {
            lookup::run_lookup(&catalog, &cfg, &title, similarity, json)?;
        }
        Commands::MajorGroup { code } => {
            lookup::run_major_group(&catalog, &code)?;
        }
        Commands::UniqueMajorGroups { codes } => {
            lookup::run_unique_major_groups(&catalog, &codes)?;
        }
        Commands::Node { code } => {
            node::run_node(&catalog, &code)?;
        }
        Commands::LeafText { code } => {
            node::run_leaf_text(&catalog, code.as_deref())?;
        }
        Commands::Rephrase { code } => {
            rephrase::run_rephrase(&catalog, &code)?;
        }
        Commands::Annotate { input } => {
            rephrase::run_annotate(&catalog, input.as_deref())?;
        }
    }

    Ok(())
}
