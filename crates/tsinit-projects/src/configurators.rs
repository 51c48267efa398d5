//! Shared configurators reused across pipelines
//!
//! Each writer emits one fixed file into the workspace and returns the
//! relative path it wrote. Running a writer twice overwrites its output.

use crate::error::Result;
use crate::workspace::Workspace;
use serde_json::{json, Value};

pub const ESLINT_CONFIG: &str = ".eslintrc.json";
pub const PRETTIER_CONFIG: &str = ".prettierrc";
pub const TSCONFIG: &str = "tsconfig.json";
pub const VSCODE_DIR: &str = ".vscode";
pub const VSCODE_SETTINGS: &str = ".vscode/settings.json";
pub const GITIGNORE: &str = ".gitignore";

/// Development packages installed by the tooling step
pub const TOOLING_PACKAGES: &[&str] = &[
    "eslint",
    "prettier",
    "@typescript-eslint/parser",
    "@typescript-eslint/eslint-plugin",
    "eslint-config-prettier",
    "vitest",
];

const GITIGNORE_CONTENT: &str = "node_modules\ndist\n.env\n";

/// ESLint configuration for TypeScript sources
pub fn eslint_config() -> Value {
    json!({
        "parser": "@typescript-eslint/parser",
        "parserOptions": {
            "ecmaVersion": "latest",
            "sourceType": "module"
        },
        "plugins": ["@typescript-eslint"],
        "extends": [
            "eslint:recommended",
            "plugin:@typescript-eslint/recommended",
            "prettier"
        ],
        "rules": {
            "@typescript-eslint/no-unused-vars": ["error", { "argsIgnorePattern": "^_" }],
            "@typescript-eslint/explicit-function-return-type": "warn"
        }
    })
}

/// Prettier configuration
pub fn prettier_config() -> Value {
    json!({
        "semi": true,
        "singleQuote": true,
        "trailingComma": "all",
        "printWidth": 100
    })
}

/// TypeScript compiler configuration
pub fn compiler_config() -> Value {
    json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "NodeNext",
            "moduleResolution": "NodeNext",
            "rootDir": "src",
            "outDir": "dist",
            "strict": true,
            "esModuleInterop": true,
            "forceConsistentCasingInFileNames": true,
            "skipLibCheck": true,
            "declaration": true,
            "sourceMap": true
        },
        "include": ["src"]
    })
}

/// VS Code workspace settings
pub fn editor_settings() -> Value {
    json!({
        "editor.formatOnSave": true,
        "editor.defaultFormatter": "esbenp.prettier-vscode",
        "eslint.validate": ["typescript", "typescriptreact"]
    })
}

/// Write `.eslintrc.json` and `.prettierrc`
pub fn write_lint_format_config(workspace: &Workspace) -> Result<Vec<&'static str>> {
    workspace.write_json(ESLINT_CONFIG, &eslint_config())?;
    workspace.write_json(PRETTIER_CONFIG, &prettier_config())?;
    Ok(vec![ESLINT_CONFIG, PRETTIER_CONFIG])
}

/// Write `tsconfig.json`
pub fn write_compiler_config(workspace: &Workspace) -> Result<&'static str> {
    workspace.write_json(TSCONFIG, &compiler_config())?;
    Ok(TSCONFIG)
}

/// Create `.vscode/` and write its `settings.json`
pub fn write_editor_config(workspace: &Workspace) -> Result<&'static str> {
    workspace.create_dir(VSCODE_DIR)?;
    workspace.write_json(VSCODE_SETTINGS, &editor_settings())?;
    Ok(VSCODE_SETTINGS)
}

/// Write the three-line `.gitignore`
pub fn write_ignore_file(workspace: &Workspace) -> Result<&'static str> {
    workspace.write(GITIGNORE, GITIGNORE_CONTENT)?;
    Ok(GITIGNORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn workspace() -> (TempDir, Workspace) {
        let temp = TempDir::new().unwrap();
        let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let ws = Workspace::create(&base, "demo").unwrap();
        (temp, ws)
    }

    fn read_json(ws: &Workspace, rel: &str) -> Value {
        serde_json::from_str(&std::fs::read_to_string(ws.path(rel)).unwrap()).unwrap()
    }

    #[test]
    fn test_compiler_config_is_strict_and_src_only() {
        let (_temp, ws) = workspace();
        write_compiler_config(&ws).unwrap();
        let tsconfig = read_json(&ws, TSCONFIG);
        assert_eq!(tsconfig["compilerOptions"]["strict"], true);
        assert_eq!(tsconfig["compilerOptions"]["rootDir"], "src");
        assert_eq!(tsconfig["compilerOptions"]["outDir"], "dist");
        assert_eq!(tsconfig["compilerOptions"]["declaration"], true);
        assert_eq!(tsconfig["compilerOptions"]["sourceMap"], true);
        assert_eq!(tsconfig["include"], json!(["src"]));
    }

    #[test]
    fn test_editor_config_creates_vscode_dir() {
        let (_temp, ws) = workspace();
        write_editor_config(&ws).unwrap();
        assert!(ws.path(VSCODE_DIR).is_dir());
        let settings = read_json(&ws, VSCODE_SETTINGS);
        assert_eq!(settings["editor.formatOnSave"], true);
        assert_eq!(settings["eslint.validate"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_ignore_file_has_three_lines() {
        let (_temp, ws) = workspace();
        write_ignore_file(&ws).unwrap();
        let content = std::fs::read_to_string(ws.path(GITIGNORE)).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), ["node_modules", "dist", ".env"]);
    }

    #[test]
    fn test_lint_format_config() {
        let (_temp, ws) = workspace();
        let written = write_lint_format_config(&ws).unwrap();
        assert_eq!(written, [ESLINT_CONFIG, PRETTIER_CONFIG]);

        let eslint = read_json(&ws, ESLINT_CONFIG);
        assert_eq!(eslint["parser"], "@typescript-eslint/parser");
        assert_eq!(eslint["rules"].as_object().unwrap().len(), 2);

        let prettier = read_json(&ws, PRETTIER_CONFIG);
        assert_eq!(prettier["singleQuote"], true);
        assert_eq!(prettier["printWidth"], 100);
    }

    #[test]
    fn test_writers_are_repeatable() {
        let (_temp, ws) = workspace();
        write_editor_config(&ws).unwrap();
        write_editor_config(&ws).unwrap();
        write_ignore_file(&ws).unwrap();
        write_ignore_file(&ws).unwrap();
        assert_eq!(
            std::fs::read_to_string(ws.path(GITIGNORE)).unwrap(),
            GITIGNORE_CONTENT
        );
    }
}
