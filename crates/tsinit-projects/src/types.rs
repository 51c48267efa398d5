//! Core types for project scaffolding

/// Project template enumeration
///
/// The set is closed: every identifier that is not one of the known ones
/// resolves to [`TemplateKind::Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKind {
    /// Node.js library/application written in TypeScript
    #[default]
    Node,
    /// React + Vite starter generated by create-vite
    ViteReact,
    /// Executable package runnable through npx, with interactive prompts
    NpxPrompt,
}

impl TemplateKind {
    /// Get all available templates, in prompt order
    pub fn all() -> Vec<Self> {
        vec![Self::Node, Self::ViteReact, Self::NpxPrompt]
    }

    /// Get the identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::ViteReact => "vite-react",
            Self::NpxPrompt => "npx-prompt",
        }
    }

    /// Get the label shown in the template prompt
    pub fn label(&self) -> &'static str {
        match self {
            Self::Node => "Node + TypeScript",
            Self::ViteReact => "Vite + React + TypeScript",
            Self::NpxPrompt => "npx CLI with interactive prompts",
        }
    }

    /// Resolve an identifier, falling back to `Node` for anything unrecognized
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "vite-react" => Self::ViteReact,
            "npx-prompt" => Self::NpxPrompt,
            "node" => Self::Node,
            other => {
                tracing::debug!("Unrecognized template '{}', using node", other);
                Self::Node
            }
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved request to scaffold a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    /// Project name, also the workspace directory name
    pub name: String,

    /// Selected template
    pub template: TemplateKind,
}

impl ProjectRequest {
    /// Create a new request
    pub fn new(name: impl Into<String>, template: TemplateKind) -> Self {
        Self {
            name: name.into(),
            template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_identifier_known() {
        assert_eq!(TemplateKind::from_identifier("node"), TemplateKind::Node);
        assert_eq!(
            TemplateKind::from_identifier("vite-react"),
            TemplateKind::ViteReact
        );
        assert_eq!(
            TemplateKind::from_identifier("npx-prompt"),
            TemplateKind::NpxPrompt
        );
    }

    #[test]
    fn test_from_identifier_falls_back_to_node() {
        assert_eq!(TemplateKind::from_identifier(""), TemplateKind::Node);
        assert_eq!(TemplateKind::from_identifier("VITE-REACT"), TemplateKind::Node);
        assert_eq!(TemplateKind::from_identifier("deno"), TemplateKind::Node);
    }

    #[test]
    fn test_identifiers_round_trip() {
        for kind in TemplateKind::all() {
            assert_eq!(TemplateKind::from_identifier(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_all_has_three_templates_node_first() {
        let all = TemplateKind::all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], TemplateKind::Node);
    }
}
