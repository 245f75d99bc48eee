//! Project manifest (`package.json`) discovery and parsing.
//!
//! genmod scaffolds files into Node-style projects. Before any generation
//! happens the target directory must contain a parseable `package.json`;
//! this module provides that check. The manifest contents are otherwise
//! irrelevant to generation - genmod never mutates the file.
//!
//! Mirrors the project-file discovery behavior of npm, Cargo, and Git: the
//! manifest marks the project root, and commands refuse to run anywhere
//! else so generated files never land in the wrong tree.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::core::GenmodError;

/// File name of the project manifest required at the project root.
pub const MANIFEST_FILENAME: &str = "package.json";

/// Minimal view of a `package.json`.
///
/// Only the fields worth logging are modeled; unknown fields are ignored.
/// All fields are optional - an empty `{}` is a valid manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Package name, if declared.
    #[serde(default)]
    pub name: Option<String>,
    /// Package version, if declared.
    #[serde(default)]
    pub version: Option<String>,
    /// Free-form description, if declared.
    #[serde(default)]
    pub description: Option<String>,
}

impl PackageManifest {
    /// Load and parse the manifest at `root/package.json`.
    ///
    /// # Errors
    ///
    /// - [`GenmodError::ManifestNotFound`] if the file is missing
    /// - [`GenmodError::ManifestParseError`] if it is not valid JSON
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILENAME);

        if !path.exists() {
            return Err(GenmodError::ManifestNotFound {
                path: root.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

        let manifest: Self =
            serde_json::from_str(&content).map_err(|e| GenmodError::ManifestParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            "Loaded manifest {} (package {})",
            path.display(),
            manifest.name.as_deref().unwrap_or("<unnamed>")
        );

        Ok(manifest)
    }
}
