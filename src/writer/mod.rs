//! Materializes a prepared model scope as a file on disk.
//!
//! The writer is the only component that touches the project tree. It
//! renders the outer model-file template with the joined fragments from a
//! [`ModelScope`] and writes the result to `root/destDir/filename`.

use anyhow::Result;
use std::path::PathBuf;
use tera::{Context as TeraContext, Tera};
use tracing::debug;

use crate::core::GenmodError;
use crate::scaffold::ModelScope;
use crate::templating::renderer::format_tera_error;
use crate::utils::fs::atomic_write;

const MODEL_TEMPLATE_NAME: &str = "model";

/// Writes the generated model file described by a [`ModelScope`].
///
/// The model-file template is injected and compiled at construction, like
/// the fragment templates. Substitution variables: `globalID`, `tableName`,
/// `attributes`, `schema`, and `lang`.
pub struct ModelWriter {
    tera: Tera,
    force: bool,
}

impl ModelWriter {
    /// Compile the model-file template. `force` allows overwriting an
    /// existing target.
    ///
    /// # Errors
    ///
    /// [`GenmodError::TemplateParseError`] when the template has invalid
    /// syntax.
    pub fn new(model_template: &str, force: bool) -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template(MODEL_TEMPLATE_NAME, model_template).map_err(|e| {
            GenmodError::TemplateParseError {
                name: MODEL_TEMPLATE_NAME.to_string(),
                reason: format_tera_error(&e),
            }
        })?;

        Ok(Self { tera, force })
    }

    /// Render and write the model file, returning the path written.
    ///
    /// # Errors
    ///
    /// - [`GenmodError::TargetExists`] when the target exists and `force`
    ///   was not set
    /// - [`GenmodError::TemplateRenderError`] when rendering fails
    /// - filesystem errors from the underlying atomic write
    pub fn write(&self, scope: &ModelScope) -> Result<PathBuf> {
        let target = scope.target_path();

        if target.exists() && !self.force {
            return Err(GenmodError::TargetExists {
                path: target.display().to_string(),
            }
            .into());
        }

        let mut context = TeraContext::new();
        context.insert("globalID", &scope.global_id);
        context.insert("tableName", &scope.table_name);
        context.insert("attributes", &scope.attributes);
        context.insert("schema", &scope.schema);
        context.insert("lang", scope.lang.as_str());

        let mut content = self.tera.render(MODEL_TEMPLATE_NAME, &context).map_err(|e| {
            GenmodError::TemplateRenderError {
                name: MODEL_TEMPLATE_NAME.to_string(),
                reason: format_tera_error(&e),
            }
        })?;

        if !content.ends_with('\n') {
            content.push('\n');
        }

        atomic_write(&target, content.as_bytes())?;
        debug!("Wrote model file {}", target.display());

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::Lang;
    use crate::templating::MODEL_TEMPLATE;
    use tempfile::TempDir;

    fn model_scope(root: &std::path::Path, lang: Lang) -> ModelScope {
        ModelScope {
            root_path: root.to_path_buf(),
            id: "User".to_string(),
            global_id: "User".to_string(),
            table_name: "user".to_string(),
            migration_filename: "20260806143005_user.js".to_string(),
            attributes: match lang {
                Lang::Js => "name: {\n  type: 'string'\n}".to_string(),
                Lang::Coffee => "    name:\n      type: 'string'".to_string(),
            },
            schema: match lang {
                Lang::Js => "name: 'string',".to_string(),
                Lang::Coffee => "    name: 'string'".to_string(),
            },
            ext: lang.ext().to_string(),
            lang,
            filename: format!("User{}", lang.ext()),
            dest_dir: "api/models/".to_string(),
            coffee: lang == Lang::Coffee,
        }
    }

    #[test]
    fn writes_a_js_model_file_under_dest_dir() {
        let dir = TempDir::new().unwrap();
        let writer = ModelWriter::new(MODEL_TEMPLATE, false).unwrap();

        let target = writer.write(&model_scope(dir.path(), Lang::Js)).unwrap();

        assert_eq!(target, dir.path().join("api/models/User.js"));
        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.starts_with("/**"));
        assert!(content.contains("tableName: 'user'"));
        assert!(content.contains("name: {\n  type: 'string'\n}"));
        assert!(content.contains("name: 'string',"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn writes_a_coffee_model_file() {
        let dir = TempDir::new().unwrap();
        let writer = ModelWriter::new(MODEL_TEMPLATE, false).unwrap();

        let target = writer.write(&model_scope(dir.path(), Lang::Coffee)).unwrap();

        assert_eq!(target, dir.path().join("api/models/User.coffee"));
        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.starts_with("###"));
        assert!(content.contains("module.exports ="));
        assert!(!content.contains("module.exports = {"));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let writer = ModelWriter::new(MODEL_TEMPLATE, false).unwrap();
        let scope = model_scope(dir.path(), Lang::Js);

        writer.write(&scope).unwrap();
        let error = writer.write(&scope).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<GenmodError>(),
            Some(GenmodError::TargetExists { .. })
        ));
    }

    #[test]
    fn force_overwrites_an_existing_target() {
        let dir = TempDir::new().unwrap();
        let scope = model_scope(dir.path(), Lang::Js);

        ModelWriter::new(MODEL_TEMPLATE, false).unwrap().write(&scope).unwrap();

        let mut updated = scope.clone();
        updated.table_name = "accounts".to_string();
        let target = ModelWriter::new(MODEL_TEMPLATE, true).unwrap().write(&updated).unwrap();

        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.contains("tableName: 'accounts'"));
    }
}
