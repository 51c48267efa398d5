//! Vite + React + TypeScript pipeline
//!
//! Nearly all files come from create-vite; this pipeline only prepares the
//! editor settings and ignore file before handing over.

use super::Scaffolder;
use crate::error::Result;

pub(super) async fn generate(s: &mut Scaffolder<'_>) -> Result<()> {
    s.write_editor_config()?;
    s.write_ignore_file()?;

    let command = s
        .config
        .package_manager
        .create_vite(&s.config.vite_template);
    s.run(command).await
}
