//! Configuration constants and the environment snapshot for kubectl-fzf.
//!
//! The only runtime configuration read from the process is a pair of
//! optional environment variables that override how fzf is invoked. They are
//! captured once in an [`Environment`] and handed to the components that
//! need them.

use std::env;

/// Default binary used for listing and fetching resources
pub const DEFAULT_KUBECTL: &str = "kubectl";
/// Default binary used for interactive selection
pub const DEFAULT_FZF: &str = "fzf";

/// Overrides the whole fzf option string
pub const ENV_FZF_OPTION: &str = "KUBECTL_FZF_FZF_OPTION";
/// Overrides only the `--bind` key map
pub const ENV_FZF_BIND_OPTION: &str = "KUBECTL_FZF_FZF_BIND_OPTION";
/// Template variable that expands to the rendered preview command
pub const FZF_PREVIEW_OPTION: &str = "KUBECTL_FZF_FZF_PREVIEW_OPTION";

pub const DEFAULT_FZF_BIND_OPTION: &str = "ctrl-k:kill-line,ctrl-alt-t:toggle-preview,ctrl-alt-n:preview-down,ctrl-alt-p:preview-up,ctrl-alt-v:preview-page-down";

pub const DEFAULT_FZF_OPTION: &str = "--inline-info --multi --layout reverse --preview '$KUBECTL_FZF_FZF_PREVIEW_OPTION' --preview-window down:70% --bind $KUBECTL_FZF_FZF_BIND_OPTION";

/// Appended to the default option when the listing starts with a header row
pub const FZF_HEADER_OPTION: &str = "--header-lines 1";

/// Snapshot of the environment variables that influence fzf options.
///
/// Empty values are treated the same as unset ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub fzf_option: Option<String>,
    pub fzf_bind_option: Option<String>,
}

impl Environment {
    /// Reads the override variables from the current process environment.
    pub fn from_process() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a snapshot from an arbitrary lookup function.
    ///
    /// # Examples
    ///
    /// ```
    /// use kubectl_fzf_core::config::{Environment, ENV_FZF_OPTION};
    ///
    /// let environment = Environment::from_lookup(|name| {
    ///     (name == ENV_FZF_OPTION).then(|| "--inline-info".to_string())
    /// });
    /// assert_eq!(environment.fzf_option.as_deref(), Some("--inline-info"));
    /// assert!(environment.fzf_bind_option.is_none());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            fzf_option: non_empty(ENV_FZF_OPTION),
            fzf_bind_option: non_empty(ENV_FZF_BIND_OPTION),
        }
    }

    /// The key map passed to `--bind`, falling back to the built-in default.
    pub fn bind_option(&self) -> &str {
        self.fzf_bind_option
            .as_deref()
            .unwrap_or(DEFAULT_FZF_BIND_OPTION)
    }
}
