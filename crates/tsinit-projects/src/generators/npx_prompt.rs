//! Executable package pipeline, runnable with `npx <name>`

use super::Scaffolder;
use crate::error::Result;
use crate::manifest::ManifestDocument;

const RUNTIME_PACKAGES: &[&str] = &["@inquirer/prompts"];
const DEV_PACKAGES: &[&str] = &["typescript"];

pub(super) async fn generate(s: &mut Scaffolder<'_>) -> Result<()> {
    let manifest = ManifestDocument::executable(s.project_name());
    s.write_manifest(&manifest)?;

    s.add_packages(RUNTIME_PACKAGES).await?;
    s.add_dev_packages(DEV_PACKAGES).await?;

    s.render_to("npx-prompt/index.ts.tera", "src/index.ts")?;
    s.render_to("npx-prompt/example.test.ts.tera", "tests/example.test.ts")?;
    s.render_to("npx-prompt/README.md.tera", "README.md")?;

    s.apply_shared_configurators().await
}
