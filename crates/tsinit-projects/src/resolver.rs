//! Input resolution: project name and template choice
//!
//! The interactive widget sits behind [`Prompter`]; resolution itself only
//! decides which prompts to show and when to give up.

use crate::error::{Error, Result};
use crate::types::{ProjectRequest, TemplateKind};
use tracing::debug;

/// Interactive source of the values a request needs
pub trait Prompter {
    /// Ask for a project name; `None` when the user aborts
    fn ask_project_name(&mut self) -> Result<Option<String>>;

    /// Ask the user to pick one of `choices`; returns the chosen identifier,
    /// or `None` when the user aborts
    fn select_template(&mut self, choices: &[TemplateKind]) -> Result<Option<String>>;
}

/// Resolve a [`ProjectRequest`] from an optional name argument and prompts
///
/// A supplied non-empty name is used verbatim and the name prompt is not
/// shown. The template is always prompted for. A missing or empty value for
/// either yields [`Error::Cancelled`].
pub fn resolve_request(
    name_arg: Option<String>,
    prompter: &mut dyn Prompter,
) -> Result<ProjectRequest> {
    let name = match name_arg.filter(|n| !n.is_empty()) {
        Some(name) => {
            debug!("Using project name from arguments: {}", name);
            name
        }
        None => prompter
            .ask_project_name()?
            .filter(|n| !n.is_empty())
            .ok_or(Error::Cancelled)?,
    };

    let identifier = prompter
        .select_template(&TemplateKind::all())?
        .filter(|t| !t.is_empty())
        .ok_or(Error::Cancelled)?;

    Ok(ProjectRequest::new(
        name,
        TemplateKind::from_identifier(&identifier),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Scripted {
        name: Option<String>,
        template: Option<String>,
        name_prompts: usize,
        template_prompts: usize,
    }

    impl Prompter for Scripted {
        fn ask_project_name(&mut self) -> Result<Option<String>> {
            self.name_prompts += 1;
            Ok(self.name.clone())
        }

        fn select_template(&mut self, choices: &[TemplateKind]) -> Result<Option<String>> {
            assert_eq!(choices.len(), 3);
            self.template_prompts += 1;
            Ok(self.template.clone())
        }
    }

    #[test]
    fn test_name_argument_skips_name_prompt() {
        let mut prompter = Scripted {
            template: Some("vite-react".into()),
            ..Default::default()
        };
        let request = resolve_request(Some("my-app".into()), &mut prompter).unwrap();
        assert_eq!(request, ProjectRequest::new("my-app", TemplateKind::ViteReact));
        assert_eq!(prompter.name_prompts, 0);
        assert_eq!(prompter.template_prompts, 1);
    }

    #[test]
    fn test_missing_argument_prompts_once() {
        let mut prompter = Scripted {
            name: Some("prompted".into()),
            template: Some("npx-prompt".into()),
            ..Default::default()
        };
        let request = resolve_request(None, &mut prompter).unwrap();
        assert_eq!(request.name, "prompted");
        assert_eq!(request.template, TemplateKind::NpxPrompt);
        assert_eq!(prompter.name_prompts, 1);
    }

    #[test]
    fn test_name_used_verbatim() {
        let mut prompter = Scripted {
            template: Some("node".into()),
            ..Default::default()
        };
        let request = resolve_request(Some("  spaced ".into()), &mut prompter).unwrap();
        assert_eq!(request.name, "  spaced ");
    }

    #[test]
    fn test_empty_name_cancels_before_template_prompt() {
        let mut prompter = Scripted {
            name: Some(String::new()),
            template: Some("node".into()),
            ..Default::default()
        };
        let err = resolve_request(None, &mut prompter).unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(prompter.template_prompts, 0);
    }

    #[test]
    fn test_aborted_template_cancels() {
        let mut prompter = Scripted::default();
        let err = resolve_request(Some("app".into()), &mut prompter).unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_unknown_template_identifier_resolves_to_node() {
        let mut prompter = Scripted {
            template: Some("svelte".into()),
            ..Default::default()
        };
        let request = resolve_request(Some("app".into()), &mut prompter).unwrap();
        assert_eq!(request.template, TemplateKind::Node);
    }
}
