use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use crate::config::DEFAULT_KUBECTL;
use crate::execution::{CommandOutput, Runner};

/// Replays canned outputs in order and records every call.
#[derive(Default, Debug)]
pub struct FakeRunner {
    kubectl_program: Option<String>,
    kubectl: RefCell<VecDeque<io::Result<CommandOutput>>>,
    fzf: RefCell<VecDeque<io::Result<CommandOutput>>>,
    kubectl_calls: RefCell<Vec<Vec<String>>>,
    fzf_calls: RefCell<Vec<(String, String)>>,
}

impl FakeRunner {
    pub fn with_kubectl_program(mut self, program: &str) -> Self {
        self.kubectl_program = Some(program.to_string());
        self
    }

    pub fn with_kubectl(self, output: CommandOutput) -> Self {
        self.kubectl.borrow_mut().push_back(Ok(output));
        self
    }

    pub fn with_kubectl_spawn_error(self, message: &str) -> Self {
        self.kubectl
            .borrow_mut()
            .push_back(Err(io::Error::new(io::ErrorKind::NotFound, message.to_string())));
        self
    }

    pub fn with_fzf(self, output: CommandOutput) -> Self {
        self.fzf.borrow_mut().push_back(Ok(output));
        self
    }

    pub fn with_fzf_spawn_error(self, message: &str) -> Self {
        self.fzf
            .borrow_mut()
            .push_back(Err(io::Error::new(io::ErrorKind::NotFound, message.to_string())));
        self
    }

    pub fn kubectl_calls(&self) -> Vec<Vec<String>> {
        self.kubectl_calls.borrow().clone()
    }

    /// `(rows, options)` for each selector run.
    pub fn fzf_calls(&self) -> Vec<(String, String)> {
        self.fzf_calls.borrow().clone()
    }
}

fn unexpected(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("unexpected {what} call"))
}

impl Runner for FakeRunner {
    fn kubectl_program(&self) -> &str {
        self.kubectl_program.as_deref().unwrap_or(DEFAULT_KUBECTL)
    }

    fn run_kubectl(&self, arguments: &[String]) -> io::Result<CommandOutput> {
        self.kubectl_calls.borrow_mut().push(arguments.to_vec());
        self.kubectl
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unexpected("kubectl")))
    }

    fn run_fzf(&self, rows: &str, options: &str) -> io::Result<CommandOutput> {
        self.fzf_calls
            .borrow_mut()
            .push((rows.to_string(), options.to_string()));
        self.fzf
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unexpected("fzf")))
    }
}
