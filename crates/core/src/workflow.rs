//! The list, select, and output flow behind each subcommand.

use std::io::Write;

use log::{debug, info};

use crate::config::Environment;
use crate::error::Result;
use crate::execution::Runner;
use crate::interpolation::resolve_fzf_option;
use crate::kubectl::{self, ResourceReference};
use crate::output::{OutputDispatcher, OutputFormat};
use crate::preview::{self, PreviewFormat, ROW_PLACEHOLDER};
use crate::selection::{ensure_rows, InteractiveSelector, Selection};

/// A fully validated invocation, ready to run.
///
/// All configuration problems are reported by [`Finder::new`], before any
/// process is started.
#[derive(Debug)]
pub struct Finder<R: Runner> {
    runner: R,
    resource: ResourceReference,
    output_format: OutputFormat,
    fzf_option: String,
}

impl<R: Runner> Finder<R> {
    /// # Errors
    ///
    /// Returns an error if the preview command cannot be rendered or the fzf
    /// option override references unknown variables.
    pub fn new(
        runner: R,
        resource: ResourceReference,
        preview_format: PreviewFormat,
        output_format: OutputFormat,
        query: Option<&str>,
        environment: &Environment,
    ) -> Result<Self> {
        let preview_command = preview::render(
            preview_format,
            runner.kubectl_program(),
            resource.target(),
            ROW_PLACEHOLDER,
            resource.namespace(),
        )?;
        debug!("Preview command: {}", preview_command);

        let fzf_option = resolve_fzf_option(
            environment,
            &preview_command,
            resource.has_multiple_resources(),
            query,
        )?;

        Ok(Self {
            runner,
            resource,
            output_format,
            fzf_option,
        })
    }

    pub fn fzf_option(&self) -> &str {
        &self.fzf_option
    }

    /// Lists the resources, lets the user choose, and writes the result.
    ///
    /// Cancelling the selection returns `Ok(())` without writing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if kubectl or fzf fail, the listing is empty, or
    /// writing to `writer` fails.
    pub fn run<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        let listing = kubectl::list(&self.runner, &self.resource.list_arguments())?;
        let listing = String::from_utf8_lossy(&listing);
        ensure_rows(&listing, &self.resource)?;

        let selector = InteractiveSelector::new(&self.runner, &self.fzf_option);
        let identifiers = match selector.run(&listing)? {
            Selection::Cancelled => return Ok(()),
            Selection::Selected(identifiers) => identifiers,
        };

        if identifiers.is_empty() {
            info!("Nothing was selected");
            return Ok(());
        }

        OutputDispatcher::new(&self.runner, &self.resource).emit(
            writer,
            &identifiers,
            self.output_format,
        )
    }
}
