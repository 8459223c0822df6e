//! kubectl argument assembly and invocation.

use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info};

use crate::error::{Error, ProcessError, Result};
use crate::execution::{CommandOutput, Runner};

/// Resource name kubectl expands to every common kind.
const ALL_RESOURCES: &str = "all";

/// Whether a resource argument names one kind or several.
///
/// Listings of several kinds print `kind/name` rows without a shared header,
/// so those rows already identify the resource on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Single,
    Multiple,
}

impl Scope {
    fn of(resource: &str) -> Self {
        if resource == ALL_RESOURCES || resource.contains(',') {
            Scope::Multiple
        } else {
            Scope::Single
        }
    }
}

/// The kind of resource to browse and the namespace to browse it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    resource: String,
    namespace: Option<String>,
    scope: Scope,
}

impl ResourceReference {
    /// # Errors
    ///
    /// Returns [`Error::EmptyResource`] if `resource` is empty.
    pub fn new(resource: impl Into<String>, namespace: Option<String>) -> Result<Self> {
        let resource = resource.into();
        if resource.is_empty() {
            return Err(Error::EmptyResource);
        }

        let scope = Scope::of(&resource);
        Ok(Self {
            resource,
            namespace: namespace.filter(|namespace| !namespace.is_empty()),
            scope,
        })
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn has_multiple_resources(&self) -> bool {
        self.scope == Scope::Multiple
    }

    /// The resource token for commands that act on selected rows.
    ///
    /// Empty for multiple kinds, since the rows carry `kind/name` already.
    pub fn target(&self) -> &str {
        match self.scope {
            Scope::Single => &self.resource,
            Scope::Multiple => "",
        }
    }

    /// Arguments for listing the candidates.
    pub fn list_arguments(&self) -> Vec<String> {
        let mut options = IndexMap::new();
        if self.has_multiple_resources() {
            options.insert("--no-headers".to_string(), "true".to_string());
        }
        build_arguments("get", &self.resource, &[], self.namespace(), &options)
    }

    /// Arguments for `operation` on the selected `names`.
    pub fn arguments(
        &self,
        operation: &str,
        names: &[String],
        options: &IndexMap<String, String>,
    ) -> Vec<String> {
        build_arguments(operation, self.target(), names, self.namespace(), options)
    }
}

/// Builds the ordered argument list for kubectl.
///
/// Order is: operation, resource (skipped when empty), names, `-n=<namespace>`
/// (skipped when absent or empty), then `key=value` options.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use kubectl_fzf_core::kubectl::build_arguments;
///
/// let mut options = IndexMap::new();
/// options.insert("-o".to_string(), "yaml".to_string());
///
/// let arguments = build_arguments("get", "pods", &["pod1".to_string()], Some("default"), &options);
/// assert_eq!(arguments, vec!["get", "pods", "pod1", "-n=default", "-o=yaml"]);
/// ```
pub fn build_arguments(
    operation: &str,
    resource: &str,
    names: &[String],
    namespace: Option<&str>,
    options: &IndexMap<String, String>,
) -> Vec<String> {
    let mut arguments = vec![operation.to_string()];

    if !resource.is_empty() {
        arguments.push(resource.to_string());
    }

    arguments.extend(names.iter().cloned());

    if let Some(namespace) = namespace.filter(|namespace| !namespace.is_empty()) {
        arguments.push(format!("-n={namespace}"));
    }

    for (key, value) in options {
        arguments.push(format!("{key}={value}"));
    }

    arguments
}

/// Renders an argument list the way it would be typed in a shell.
pub fn command_line(program: &str, arguments: &[String]) -> String {
    std::iter::once(program)
        .chain(arguments.iter().map(String::as_str))
        .join(" ")
}

/// Runs kubectl and returns its stdout followed by its stderr.
///
/// # Errors
///
/// Returns [`Error::ExternalCommandFailed`] if kubectl cannot be started or
/// exits unsuccessfully. The captured output is kept, since it usually
/// carries kubectl's own explanation.
pub fn run<R: Runner + ?Sized>(runner: &R, arguments: &[String]) -> Result<Vec<u8>> {
    invoke(runner, arguments).map(|output| output.combined())
}

/// Runs a kubectl listing and returns only its stdout.
///
/// kubectl reports an empty namespace on stderr while still exiting 0, so
/// that text must never be taken for a row.
///
/// # Errors
///
/// Same as [`run`].
pub fn list<R: Runner + ?Sized>(runner: &R, arguments: &[String]) -> Result<Vec<u8>> {
    let output = invoke(runner, arguments)?;
    if !output.diagnostics.is_empty() {
        info!(
            "kubectl: {}",
            String::from_utf8_lossy(&output.diagnostics).trim_end()
        );
    }
    Ok(output.output)
}

fn invoke<R: Runner + ?Sized>(runner: &R, arguments: &[String]) -> Result<CommandOutput> {
    let command = command_line(runner.kubectl_program(), arguments);
    debug!("Executing `{}`", command);

    match runner.run_kubectl(arguments) {
        Ok(output) if output.is_success() => Ok(output),
        Ok(output) => Err(Error::external_command_failed(
            command,
            ProcessError::from_code(output.code),
            &output.combined(),
        )),
        Err(e) => Err(Error::external_command_failed(
            command,
            ProcessError::Spawn(e),
            &[],
        )),
    }
}
