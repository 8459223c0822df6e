//! kubectl-fzf CLI Library
//!
//! This crate provides the command-line interface for kubectl-fzf. It parses
//! arguments, validates them into core types, and runs the list, select and
//! output flow from [`kubectl_fzf_core::workflow`].
//!
//! # Examples
//!
//! The CLI binary (`kubectl-fzf`) can be used in several ways:
//!
//! ```bash
//! # Pick pods and print their names
//! kubectl-fzf get pods
//!
//! # Pick services in a namespace, preview as YAML, print as JSON
//! kubectl-fzf get svc -n kube-system -p yaml -o json
//!
//! # Pick across several kinds at once
//! kubectl-fzf get pods,svc -q web
//!
//! # Pick deployments and describe them
//! kubectl-fzf describe deploy
//! ```

use std::io::Write;

use kubectl_fzf_core::config::Environment;
use kubectl_fzf_core::error::Result;
use kubectl_fzf_core::execution::Runner;
use kubectl_fzf_core::workflow::Finder;
use log::debug;

use crate::cli_args::Args;

pub mod cli_args;

/// Validates `args` and runs the flow, writing results to `writer`.
///
/// # Errors
///
/// Returns configuration errors before any process is started, and any
/// failure from kubectl, fzf or writing afterwards.
pub fn execute<R: Runner, W: Write + ?Sized>(
    args: &Args,
    runner: R,
    environment: &Environment,
    writer: &mut W,
) -> Result<()> {
    let invocation = args.invocation()?;
    debug!("Invocation: {:?}", invocation);

    let finder = Finder::new(
        runner,
        invocation.resource,
        invocation.preview_format,
        invocation.output_format,
        invocation.query.as_deref(),
        environment,
    )?;

    finder.run(writer)
}
