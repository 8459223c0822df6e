//! Writing the selected resources in the requested format.

use std::fmt::{Display, Formatter};
use std::io::Write;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::execution::Runner;
use crate::kubectl::{self, ResourceReference};

/// What gets written for the selected resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Just the identifiers, one per line
    #[default]
    Name,
    Describe,
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "name" => Ok(OutputFormat::Name),
            "describe" => Ok(OutputFormat::Describe),
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::InvalidOutputFormat(other.to_string())),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            OutputFormat::Name => "name",
            OutputFormat::Describe => "describe",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        })
    }
}

/// Issues the follow-up kubectl call for a selection and writes the result.
pub struct OutputDispatcher<'a, R: Runner + ?Sized> {
    runner: &'a R,
    resource: &'a ResourceReference,
}

impl<'a, R: Runner + ?Sized> OutputDispatcher<'a, R> {
    pub fn new(runner: &'a R, resource: &'a ResourceReference) -> Self {
        Self { runner, resource }
    }

    /// # Errors
    ///
    /// Returns [`Error::ExternalCommandFailed`] if kubectl fails, or
    /// [`Error::Stdio`] if writing fails.
    pub fn emit<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        identifiers: &[String],
        format: OutputFormat,
    ) -> Result<()> {
        let bytes = match format {
            OutputFormat::Name => {
                let mut names = identifiers.join("\n");
                names.push('\n');
                names.into_bytes()
            }
            OutputFormat::Describe => {
                let arguments = self.resource.arguments("describe", identifiers, &IndexMap::new());
                kubectl::run(self.runner, &arguments)?
            }
            OutputFormat::Yaml | OutputFormat::Json => {
                let options = IndexMap::from([("-o".to_string(), format.to_string())]);
                let arguments = self.resource.arguments("get", identifiers, &options);
                kubectl::run(self.runner, &arguments)?
            }
        };

        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::CommandOutput;
    use crate::testing::FakeRunner;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_from_str() {
        assert_eq!("name".parse::<OutputFormat>().unwrap(), OutputFormat::Name);
        assert_eq!("describe".parse::<OutputFormat>().unwrap(), OutputFormat::Describe);
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "wide".parse::<OutputFormat>(),
            Err(Error::InvalidOutputFormat(value)) if value == "wide"
        ));
    }

    #[test]
    fn test_emit_name_without_subprocess() {
        let runner = FakeRunner::default();
        let resource = ResourceReference::new("pods", None).unwrap();
        let mut out = Vec::new();

        OutputDispatcher::new(&runner, &resource)
            .emit(&mut out, &strings(&["pod1"]), OutputFormat::Name)
            .unwrap();

        assert_eq!(out, b"pod1\n");
        assert!(runner.kubectl_calls().is_empty());
    }

    #[test]
    fn test_emit_names_joined() {
        let runner = FakeRunner::default();
        let resource = ResourceReference::new("pods,svc", None).unwrap();
        let mut out = Vec::new();

        OutputDispatcher::new(&runner, &resource)
            .emit(&mut out, &strings(&["pod/web", "service/web"]), OutputFormat::Name)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "pod/web\nservice/web\n");
    }

    #[test]
    fn test_emit_describe() {
        let runner = FakeRunner::default().with_kubectl(CommandOutput::success("Name: pod1\n"));
        let resource = ResourceReference::new("pods", Some("default".to_string())).unwrap();
        let mut out = Vec::new();

        OutputDispatcher::new(&runner, &resource)
            .emit(&mut out, &strings(&["pod1"]), OutputFormat::Describe)
            .unwrap();

        assert_eq!(out, b"Name: pod1\n");
        assert_eq!(
            runner.kubectl_calls(),
            vec![strings(&["describe", "pods", "pod1", "-n=default"])]
        );
    }

    #[test]
    fn test_emit_yaml_and_json() {
        for (format, flag) in [(OutputFormat::Yaml, "-o=yaml"), (OutputFormat::Json, "-o=json")] {
            let runner = FakeRunner::default().with_kubectl(CommandOutput::success("document"));
            let resource = ResourceReference::new("svc", None).unwrap();
            let mut out = Vec::new();

            OutputDispatcher::new(&runner, &resource)
                .emit(&mut out, &strings(&["svc1"]), format)
                .unwrap();

            assert_eq!(out, b"document");
            assert_eq!(runner.kubectl_calls(), vec![strings(&["get", "svc", "svc1", flag])]);
        }
    }

    #[test]
    fn test_emit_multiple_resources_omits_resource() {
        let runner = FakeRunner::default().with_kubectl(CommandOutput::success("described"));
        let resource = ResourceReference::new("all", None).unwrap();
        let mut out = Vec::new();

        OutputDispatcher::new(&runner, &resource)
            .emit(&mut out, &strings(&["pod/web", "service/web"]), OutputFormat::Describe)
            .unwrap();

        assert_eq!(
            runner.kubectl_calls(),
            vec![strings(&["describe", "pod/web", "service/web"])]
        );
    }

    #[test]
    fn test_emit_failure_writes_nothing() {
        let runner = FakeRunner::default().with_kubectl(CommandOutput::failure(1, "NotFound"));
        let resource = ResourceReference::new("pods", None).unwrap();
        let mut out = Vec::new();

        let error = OutputDispatcher::new(&runner, &resource)
            .emit(&mut out, &strings(&["gone"]), OutputFormat::Json)
            .unwrap_err();

        assert!(matches!(error, Error::ExternalCommandFailed { ref output, .. } if output == "NotFound"));
        assert!(out.is_empty());
    }
}
