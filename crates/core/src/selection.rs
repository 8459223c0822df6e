//! Interactive selection of listed resources through fzf.

use log::{debug, info};

use crate::error::{Error, ProcessError, Result};
use crate::execution::Runner;
use crate::kubectl::{ResourceReference, Scope};

/// Outcome of an fzf run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Identifiers of the chosen rows, in the order fzf printed them
    Selected(Vec<String>),
    /// The user backed out; not an error
    Cancelled,
}

/// Runs fzf over the listed rows with a resolved option string.
pub struct InteractiveSelector<'a, R: Runner + ?Sized> {
    runner: &'a R,
    options: &'a str,
}

impl<'a, R: Runner + ?Sized> InteractiveSelector<'a, R> {
    pub fn new(runner: &'a R, options: &'a str) -> Self {
        Self { runner, options }
    }

    /// Blocks until the user picks rows or cancels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelectionFailed`] if fzf cannot be started or exits
    /// with any status other than success or interruption (130).
    pub fn run(&self, rows: &str) -> Result<Selection> {
        let command = format!("fzf {}", self.options);

        let output = self
            .runner
            .run_fzf(rows, self.options)
            .map_err(|e| Error::selection_failed(command.clone(), ProcessError::Spawn(e), &[]))?;

        if output.is_interrupted() {
            info!("Selection cancelled by the user");
            return Ok(Selection::Cancelled);
        }

        if !output.is_success() {
            return Err(Error::selection_failed(
                command,
                ProcessError::from_code(output.code),
                &output.output,
            ));
        }

        let identifiers = extract_identifiers(&String::from_utf8_lossy(&output.output));
        debug!("Selected: {:?}", identifiers);
        Ok(Selection::Selected(identifiers))
    }
}

/// Takes the first whitespace-separated field of every selected line.
///
/// # Examples
///
/// ```
/// use kubectl_fzf_core::selection::extract_identifiers;
///
/// assert_eq!(extract_identifiers("pod1  2/2  Running  2d\n"), vec!["pod1"]);
/// ```
pub fn extract_identifiers(output: &str) -> Vec<String> {
    output
        .trim()
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(ToString::to_string)
        .collect()
}

/// Fails when a listing holds nothing to choose from.
///
/// A single-kind listing always starts with a header, so one line means no
/// resources, which usually points at a namespace that does not exist.
///
/// # Errors
///
/// Returns [`Error::NoResourcesFound`] when there are no data rows.
pub fn ensure_rows(listing: &str, resource: &ResourceReference) -> Result<()> {
    let lines = listing.trim().lines().count();
    let minimum = match resource.scope() {
        Scope::Single => 2,
        Scope::Multiple => 1,
    };

    if lines < minimum {
        return Err(Error::NoResourcesFound {
            namespace: resource.namespace().map(ToString::to_string),
        });
    }

    Ok(())
}
