use indexmap::IndexSet;
use log::debug;

use crate::config::{
    Environment, DEFAULT_FZF_OPTION, ENV_FZF_BIND_OPTION, ENV_FZF_OPTION, FZF_HEADER_OPTION,
    FZF_PREVIEW_OPTION,
};
use crate::error::{Error, Result};

/// Resolves the option string passed to fzf.
///
/// The template comes from `KUBECTL_FZF_FZF_OPTION` or the built-in default.
/// `$KUBECTL_FZF_FZF_PREVIEW_OPTION` expands to `preview_command` and
/// `$KUBECTL_FZF_FZF_BIND_OPTION` to the configured key map. The default
/// template also gets `--header-lines 1` when the listing has a header row.
///
/// # Errors
///
/// Returns [`Error::InvalidEnvironmentOverride`] naming every other variable
/// the template references, each once.
pub fn resolve_fzf_option(
    environment: &Environment,
    preview_command: &str,
    has_multiple_resources: bool,
    query: Option<&str>,
) -> Result<String> {
    let template = match environment.fzf_option.as_deref() {
        Some(option) => option.to_string(),
        None if has_multiple_resources => DEFAULT_FZF_OPTION.to_string(),
        None => format!("{DEFAULT_FZF_OPTION} {FZF_HEADER_OPTION}"),
    };

    let mut unresolved: IndexSet<String> = IndexSet::new();
    let expanded = shellexpand::env_with_context_no_errors(&template, |name: &str| {
        match name {
            FZF_PREVIEW_OPTION if !preview_command.is_empty() => Some(preview_command.to_string()),
            ENV_FZF_BIND_OPTION => Some(environment.bind_option().to_string()),
            _ => {
                unresolved.insert(name.to_string());
                None
            }
        }
    })
    .into_owned();

    if !unresolved.is_empty() {
        return Err(Error::invalid_environment_override(
            ENV_FZF_OPTION,
            unresolved.into_iter().collect(),
        ));
    }

    let option = match query.filter(|query| !query.is_empty()) {
        Some(query) => format!("{expanded} --query {query}"),
        None => expanded,
    };

    debug!("Resolved fzf option: {}", option);
    Ok(option)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FZF_BIND_OPTION;

    fn with_option(option: &str) -> Environment {
        Environment {
            fzf_option: Some(option.to_string()),
            fzf_bind_option: None,
        }
    }

    #[test]
    fn test_default_for_multiple_resources() {
        let option =
            resolve_fzf_option(&Environment::default(), "kubectl describe {1}", true, None).unwrap();
        assert_eq!(
            option,
            format!(
                "--inline-info --multi --layout reverse --preview 'kubectl describe {{1}}' --preview-window down:70% --bind {DEFAULT_FZF_BIND_OPTION}"
            )
        );
        assert!(!option.contains(FZF_HEADER_OPTION));
    }

    #[test]
    fn test_default_for_single_resource() {
        let option =
            resolve_fzf_option(&Environment::default(), "kubectl describe pods {1}", false, None)
                .unwrap();
        assert_eq!(
            option,
            format!(
                "--inline-info --multi --layout reverse --preview 'kubectl describe pods {{1}}' --preview-window down:70% --bind {DEFAULT_FZF_BIND_OPTION} --header-lines 1"
            )
        );
    }

    #[test]
    fn test_override_with_known_variables() {
        let environment = with_option("--preview '$KUBECTL_FZF_FZF_PREVIEW_OPTION' --bind ${KUBECTL_FZF_FZF_BIND_OPTION}");
        let option = resolve_fzf_option(&environment, "kubectl describe pods {1}", false, None).unwrap();
        assert_eq!(
            option,
            format!("--preview 'kubectl describe pods {{1}}' --bind {DEFAULT_FZF_BIND_OPTION}")
        );
    }

    #[test]
    fn test_override_skips_header_option() {
        let option = resolve_fzf_option(&with_option("--inline-info"), "unused", false, None).unwrap();
        assert_eq!(option, "--inline-info");
    }

    #[test]
    fn test_bind_override() {
        let environment = Environment {
            fzf_option: Some("--bind $KUBECTL_FZF_FZF_BIND_OPTION".to_string()),
            fzf_bind_option: Some("ctrl-j:down".to_string()),
        };
        let option = resolve_fzf_option(&environment, "unused", true, None).unwrap();
        assert_eq!(option, "--bind ctrl-j:down");
    }

    #[test]
    fn test_unknown_variable() {
        let error = resolve_fzf_option(&with_option("--inline-info $UNKNOWN_ENV_NAME"), "unused", false, None)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "KUBECTL_FZF_FZF_OPTION has invalid environment variables: UNKNOWN_ENV_NAME"
        );
    }

    #[test]
    fn test_unknown_variables_reported_once_each() {
        let environment = with_option(
            "$UNKNOWN_ENV1, $UNKNOWN_ENV2 --preview '$KUBECTL_FZF_FZF_PREVIEW_OPTION' $UNKNOWN_ENV1",
        );
        let error = resolve_fzf_option(&environment, "kubectl get pods {1} -o yaml", false, None)
            .unwrap_err();
        match error {
            Error::InvalidEnvironmentOverride { variable, names } => {
                assert_eq!(variable, ENV_FZF_OPTION);
                assert_eq!(names, vec!["UNKNOWN_ENV1", "UNKNOWN_ENV2"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_query_is_appended() {
        let option = resolve_fzf_option(&with_option("--inline-info"), "unused", false, Some("svc")).unwrap();
        assert_eq!(option, "--inline-info --query svc");

        let option = resolve_fzf_option(&with_option("--inline-info"), "unused", false, Some("")).unwrap();
        assert_eq!(option, "--inline-info");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let environment = Environment::default();
        let first = resolve_fzf_option(&environment, "kubectl describe pods {1}", false, Some("web")).unwrap();
        let second = resolve_fzf_option(&environment, "kubectl describe pods {1}", false, Some("web")).unwrap();
        assert_eq!(first, second);
    }
}
