//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and turns the parsed strings into validated core types.

use clap::{Parser, Subcommand};
use kubectl_fzf_core::config::{DEFAULT_FZF, DEFAULT_KUBECTL};
use kubectl_fzf_core::error::Result;
use kubectl_fzf_core::kubectl::ResourceReference;
use kubectl_fzf_core::output::OutputFormat;
use kubectl_fzf_core::preview::PreviewFormat;

/// kubectl commands with fzf.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use kubectl_fzf_cli::cli_args::Args;
///
/// let args = Args::parse_from(["kubectl-fzf", "get", "pods", "-n", "default"]);
/// assert_eq!(args.namespace.as_deref(), Some("default"));
/// ```
#[derive(Parser, Debug)]
#[command(name = "kubectl-fzf", about = "kubectl commands with fzf")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Start fzf with this query.
    #[arg(long, short = 'q', global = true)]
    pub query: Option<String>,

    /// Kubernetes namespace.
    #[arg(long, short = 'n', global = true)]
    pub namespace: Option<String>,

    /// kubectl binary to run.
    #[arg(long, global = true, default_value = DEFAULT_KUBECTL)]
    pub kubectl: String,

    /// fzf binary to run.
    #[arg(long, global = true, default_value = DEFAULT_FZF)]
    pub fzf: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// kubectl get resources with fzf
    Get {
        /// The kind of resource, e.g. `pods`, `pods,svc` or `all`.
        resource: String,

        /// The format of preview: describe or yaml.
        #[arg(long, short = 'p', default_value = "describe")]
        preview_format: String,

        /// The output format: name, describe, yaml or json.
        #[arg(long, short = 'o', default_value = "name")]
        output: String,
    },

    /// kubectl describe resources with fzf
    Describe {
        /// The kind of resource, e.g. `pods`, `pods,svc` or `all`.
        resource: String,
    },
}

/// Everything a run needs, validated before any process is started.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub resource: ResourceReference,
    pub preview_format: PreviewFormat,
    pub output_format: OutputFormat,
    pub query: Option<String>,
}

impl Args {
    /// Validates the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty resource or an unknown preview or
    /// output format.
    pub fn invocation(&self) -> Result<Invocation> {
        let (resource, preview_format, output_format) = match &self.command {
            Commands::Get {
                resource,
                preview_format,
                output,
            } => (
                resource,
                preview_format.parse::<PreviewFormat>()?,
                output.parse::<OutputFormat>()?,
            ),
            Commands::Describe { resource } => {
                (resource, PreviewFormat::Describe, OutputFormat::Describe)
            }
        };

        Ok(Invocation {
            resource: ResourceReference::new(resource.as_str(), self.namespace.clone())?,
            preview_format,
            output_format,
            query: self.query.clone().filter(|query| !query.is_empty()),
        })
    }
}
