use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why an external process did not produce a usable result.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to start the process: {}", .0)]
    Spawn(#[from] std::io::Error),

    #[error("exit status: {}", .0)]
    Exit(i32),

    #[error("the process was terminated without an exit status")]
    Terminated,
}

impl ProcessError {
    /// Maps a non-success exit code (or the lack of one) to an error.
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(code) => Self::Exit(code),
            None => Self::Terminated,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("1st argument must be the kind of kubernetes resources")]
    EmptyResource,

    #[error("preview format must be one of [describe, yaml], got `{}`", .0)]
    InvalidPreviewFormat(String),

    #[error("output format must be one of [name, describe, yaml, json], got `{}`", .0)]
    InvalidOutputFormat(String),

    #[error("{} has invalid environment variables: {}", .variable, .names.join(","))]
    InvalidEnvironmentOverride { variable: String, names: Vec<String> },

    #[error("failed to run kubectl. Namespace {} may not exist", .namespace.as_deref().unwrap_or("(current)"))]
    NoResourcesFound { namespace: Option<String> },

    #[error("failed to run the command `{}`: {}{}", .command, .cause, output_suffix(.output))]
    SelectionFailed {
        command: String,
        #[source]
        cause: ProcessError,
        output: String,
    },

    #[error("failed get kubernetes resource `{}`: {}. kubectl output: {}", .command, .cause, .output)]
    ExternalCommandFailed {
        command: String,
        #[source]
        cause: ProcessError,
        output: String,
    },

    #[error("Error parsing command template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering command template: {}", .0)]
    Render(#[from] RenderError),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

fn output_suffix(output: &str) -> String {
    if output.trim().is_empty() {
        String::new()
    } else {
        format!(". output: {}", output.trim_end())
    }
}

impl Error {
    pub fn invalid_environment_override(variable: &str, names: Vec<String>) -> Self {
        Self::InvalidEnvironmentOverride {
            variable: variable.to_string(),
            names,
        }
    }

    pub fn selection_failed(command: String, cause: ProcessError, output: &[u8]) -> Self {
        Self::SelectionFailed {
            command,
            cause,
            output: String::from_utf8_lossy(output).into_owned(),
        }
    }

    pub fn external_command_failed(command: String, cause: ProcessError, output: &[u8]) -> Self {
        Self::ExternalCommandFailed {
            command,
            cause,
            output: String::from_utf8_lossy(output).into_owned(),
        }
    }
}
