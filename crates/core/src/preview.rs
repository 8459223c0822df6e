//! The preview command fzf runs for the highlighted row.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use leon::Template;

use crate::error::{Error, Result};

/// fzf replaces this token with the first field of the highlighted row.
pub const ROW_PLACEHOLDER: &str = "{1}";

const DESCRIBE_TEMPLATE: &str = "{cli} describe {target}{options}";
const YAML_TEMPLATE: &str = "{cli} get {target} -o yaml{options}";

/// How the highlighted resource is rendered in the preview pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewFormat {
    #[default]
    Describe,
    Yaml,
}

impl PreviewFormat {
    fn template(self) -> &'static str {
        match self {
            PreviewFormat::Describe => DESCRIBE_TEMPLATE,
            PreviewFormat::Yaml => YAML_TEMPLATE,
        }
    }
}

impl FromStr for PreviewFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "describe" => Ok(PreviewFormat::Describe),
            "yaml" => Ok(PreviewFormat::Yaml),
            other => Err(Error::InvalidPreviewFormat(other.to_string())),
        }
    }
}

impl Display for PreviewFormat {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            PreviewFormat::Describe => "describe",
            PreviewFormat::Yaml => "yaml",
        })
    }
}

/// Renders the preview command for `resource`, run with the `cli` binary.
///
/// An empty `resource` is left out, for rows that already read `kind/name`.
///
/// # Examples
///
/// ```
/// use kubectl_fzf_core::preview::{render, PreviewFormat, ROW_PLACEHOLDER};
///
/// let command = render(PreviewFormat::Describe, "kubectl", "pods", ROW_PLACEHOLDER, Some("default"))?;
/// assert_eq!(command, "kubectl describe pods {1} -n default");
///
/// let command = render(PreviewFormat::Yaml, "kubectl", "svc", ROW_PLACEHOLDER, None)?;
/// assert_eq!(command, "kubectl get svc {1} -o yaml");
/// # Ok::<(), kubectl_fzf_core::error::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if the built-in template fails to parse or render.
pub fn render(
    format: PreviewFormat,
    cli: &str,
    resource: &str,
    placeholder: &str,
    namespace: Option<&str>,
) -> Result<String> {
    let template = Template::parse(format.template())?;

    let target = [resource, placeholder]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let options = match namespace.filter(|namespace| !namespace.is_empty()) {
        Some(namespace) => format!(" -n {namespace}"),
        None => String::new(),
    };

    let context: HashMap<String, String> = HashMap::from([
        ("cli".to_string(), cli.to_string()),
        ("target".to_string(), target),
        ("options".to_string(), options),
    ]);

    Ok(template.render(&context)?)
}
