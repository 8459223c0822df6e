//! The side-effecting boundary: running kubectl and fzf as subprocesses.
//!
//! Everything that spawns a process goes through [`Runner`], so the rest of
//! the crate can be driven by a fake in tests.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, warn};

use crate::config::{DEFAULT_FZF, DEFAULT_KUBECTL};

/// Exit code reported when the user interrupts with Ctrl-C.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// What a finished subprocess left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process did not exit normally
    pub code: Option<i32>,
    /// Captured stdout
    pub output: Vec<u8>,
    /// Captured stderr, empty when it was not captured
    pub diagnostics: Vec<u8>,
}

impl CommandOutput {
    pub fn success(output: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(0),
            output: output.into(),
            diagnostics: Vec::new(),
        }
    }

    pub fn failure(code: i32, output: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(code),
            output: output.into(),
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: impl Into<Vec<u8>>) -> Self {
        self.diagnostics = diagnostics.into();
        self
    }

    /// stdout followed by stderr.
    pub fn combined(&self) -> Vec<u8> {
        let mut combined = self.output.clone();
        combined.extend_from_slice(&self.diagnostics);
        combined
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn is_interrupted(&self) -> bool {
        self.code == Some(INTERRUPTED_EXIT_CODE)
    }
}

/// Capability to run the two external collaborators.
///
/// Errors are only returned when a process could not be started at all;
/// non-zero exits come back as a [`CommandOutput`].
pub trait Runner {
    /// The kubectl binary as it should appear in commands shown to the user
    /// or handed to fzf for previews.
    fn kubectl_program(&self) -> &str {
        DEFAULT_KUBECTL
    }

    /// Runs kubectl with `arguments`, capturing stdout and stderr separately.
    fn run_kubectl(&self, arguments: &[String]) -> io::Result<CommandOutput>;

    /// Runs fzf with the shell-quoted `options`, feeding it `rows`.
    ///
    /// The terminal UI is drawn on the inherited stderr, only the selected
    /// lines are captured.
    fn run_fzf(&self, rows: &str, options: &str) -> io::Result<CommandOutput>;
}

impl<R: Runner + ?Sized> Runner for &R {
    fn kubectl_program(&self) -> &str {
        (**self).kubectl_program()
    }

    fn run_kubectl(&self, arguments: &[String]) -> io::Result<CommandOutput> {
        (**self).run_kubectl(arguments)
    }

    fn run_fzf(&self, rows: &str, options: &str) -> io::Result<CommandOutput> {
        (**self).run_fzf(rows, options)
    }
}

/// [`Runner`] backed by real processes.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    kubectl: String,
    fzf: String,
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(DEFAULT_KUBECTL, DEFAULT_FZF)
    }
}

impl SystemRunner {
    pub fn new(kubectl: impl Into<String>, fzf: impl Into<String>) -> Self {
        Self {
            kubectl: kubectl.into(),
            fzf: fzf.into(),
        }
    }

    /// The fzf invocation as handed to `sh -c`.
    pub fn fzf_command_line(&self, options: &str) -> String {
        if options.is_empty() {
            self.fzf.clone()
        } else {
            format!("{} {}", self.fzf, options)
        }
    }
}

impl Runner for SystemRunner {
    fn kubectl_program(&self) -> &str {
        &self.kubectl
    }

    fn run_kubectl(&self, arguments: &[String]) -> io::Result<CommandOutput> {
        debug!("Running {} with arguments: {:?}", self.kubectl, arguments);

        let output = Command::new(&self.kubectl)
            .args(arguments)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            code: exit_code(output.status),
            output: output.stdout,
            diagnostics: output.stderr,
        })
    }

    fn run_fzf(&self, rows: &str, options: &str) -> io::Result<CommandOutput> {
        let command_line = self.fzf_command_line(options);
        debug!("Running selector: sh -c {:?}", command_line);

        let mut child = Command::new("sh")
            .args(["-c", command_line.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // The selector may quit before reading everything.
            if let Err(e) = stdin.write_all(rows.as_bytes()) {
                if e.kind() == io::ErrorKind::BrokenPipe {
                    warn!("Selector closed its input early");
                } else {
                    return Err(e);
                }
            }
        }

        let output = child.wait_with_output()?;

        Ok(CommandOutput {
            code: exit_code(output.status),
            output: output.stdout,
            diagnostics: Vec::new(),
        })
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;

    // Report signals the way a shell would, so SIGINT reads as 130.
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> Option<i32> {
    status.code()
}
