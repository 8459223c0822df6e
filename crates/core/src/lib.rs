//! kubectl-fzf Core Library
//!
//! This crate provides the core functionality for kubectl-fzf, a thin
//! interactive wrapper that lists Kubernetes resources with kubectl, lets the
//! user pick some of them in fzf, and prints the picked resources in a chosen
//! format.
//!
//! # Key Features
//!
//! - **Argument Building**: Ordered kubectl argument lists with namespace and options
//! - **Preview Commands**: `describe` or `yaml` previews for the highlighted row
//! - **fzf Options**: Built-in defaults with environment variable overrides
//! - **Selection**: Runs fzf, extracts identifiers and tells cancellation from failure
//! - **Output**: Names, `describe`, YAML or JSON for the selected resources
//!
//! All subprocesses are started through the [`execution::Runner`] trait.
//!
//! # Examples
//!
//! Browsing pods in the `default` namespace and printing the chosen names:
//!
//! ```no_run
//! use kubectl_fzf_core::config::Environment;
//! use kubectl_fzf_core::execution::SystemRunner;
//! use kubectl_fzf_core::kubectl::ResourceReference;
//! use kubectl_fzf_core::output::OutputFormat;
//! use kubectl_fzf_core::preview::PreviewFormat;
//! use kubectl_fzf_core::workflow::Finder;
//!
//! let resource = ResourceReference::new("pods", Some("default".to_string()))?;
//! let finder = Finder::new(
//!     SystemRunner::default(),
//!     resource,
//!     PreviewFormat::Describe,
//!     OutputFormat::Name,
//!     None,
//!     &Environment::from_process(),
//! )?;
//! finder.run(&mut std::io::stdout())?;
//! # Ok::<(), kubectl_fzf_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod interpolation;
pub mod kubectl;
pub mod output;
pub mod preview;
pub mod selection;
pub mod workflow;

#[cfg(test)]
mod testing;
