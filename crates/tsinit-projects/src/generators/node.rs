//! Node + TypeScript pipeline, also the fallback for unknown templates

use super::Scaffolder;
use crate::error::Result;
use crate::manifest::ManifestDocument;

const DEV_PACKAGES: &[&str] = &["typescript", "@types/node"];

/// Script table written over the minimal manifest
pub(crate) const NODE_SCRIPTS: &[(&str, &str)] = &[
    ("build", "tsc"),
    ("start", "node dist/index.js"),
    ("dev", "tsc --watch"),
    ("lint", "eslint src --ext .ts"),
    ("format", "prettier --write \"src/**/*.ts\" \"tests/**/*.ts\""),
    ("test", "vitest run"),
    ("test:watch", "vitest"),
];

pub(super) async fn generate(s: &mut Scaffolder<'_>) -> Result<()> {
    let mut manifest = ManifestDocument::minimal(s.project_name());
    s.write_manifest(&manifest)?;

    manifest.set_scripts(NODE_SCRIPTS.iter().copied());
    s.write_manifest(&manifest)?;

    s.add_dev_packages(DEV_PACKAGES).await?;

    s.render_to("node/index.ts.tera", "src/index.ts")?;
    s.render_to("node/example.test.ts.tera", "tests/example.test.ts")?;
    s.render_to("node/README.md.tera", "README.md")?;

    s.apply_shared_configurators().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_scripts_keys() {
        let keys: Vec<_> = NODE_SCRIPTS.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["build", "start", "dev", "lint", "format", "test", "test:watch"]
        );
        assert!(NODE_SCRIPTS.iter().all(|(_, v)| !v.is_empty()));
    }
}
