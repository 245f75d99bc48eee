//! Fragment rendering engine with Tera.
//!
//! This module provides the [`FragmentRenderer`] struct that wraps Tera with
//! the two fragment templates compiled once at construction.

use anyhow::Result;
use tera::{Context as TeraContext, Tera};

use super::utils::unescape;
use crate::core::GenmodError;
use crate::scaffold::{AttributeRecord, Lang};

const ATTRIBUTE_TEMPLATE_NAME: &str = "attribute";
const SCHEMA_TEMPLATE_NAME: &str = "schema";

/// Renders attribute and schema code fragments from injected templates.
///
/// Both template strings are registered with a single [`Tera`] instance when
/// the renderer is constructed, and the compiled templates are immutable for
/// the renderer's lifetime. Construct one renderer per process and reuse it
/// across invocations.
///
/// Every fragment render receives the substitution variables `name`, `type`,
/// and `lang` (`"js"` or `"coffee"`). Rendered fragments are HTML-unescaped
/// and right-trimmed before joining:
///
/// - attribute fragments join with `,\n` for plain JavaScript and `\n` for
///   CoffeeScript, whose indentation syntax takes no separators;
/// - schema fragments always join with `\n`.
pub struct FragmentRenderer {
    tera: Tera,
}

impl FragmentRenderer {
    /// Compile the two fragment templates.
    ///
    /// # Errors
    ///
    /// [`GenmodError::TemplateParseError`] when either template has invalid
    /// syntax.
    pub fn new(attribute_template: &str, schema_template: &str) -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template(ATTRIBUTE_TEMPLATE_NAME, attribute_template).map_err(|e| {
            GenmodError::TemplateParseError {
                name: ATTRIBUTE_TEMPLATE_NAME.to_string(),
                reason: format_tera_error(&e),
            }
        })?;

        tera.add_raw_template(SCHEMA_TEMPLATE_NAME, schema_template).map_err(|e| {
            GenmodError::TemplateParseError {
                name: SCHEMA_TEMPLATE_NAME.to_string(),
                reason: format_tera_error(&e),
            }
        })?;

        Ok(Self { tera })
    }

    /// Render one attribute-declaration fragment per record and join them
    /// with the flavor's separator.
    pub fn render_attributes(&self, records: &[AttributeRecord], lang: Lang) -> Result<String> {
        let separator = match lang {
            Lang::Coffee => "\n",
            Lang::Js => ",\n",
        };
        self.render_joined(ATTRIBUTE_TEMPLATE_NAME, records, lang, separator)
    }

    /// Render one schema-declaration fragment per record, joined with `\n`.
    pub fn render_schema(&self, records: &[AttributeRecord], lang: Lang) -> Result<String> {
        self.render_joined(SCHEMA_TEMPLATE_NAME, records, lang, "\n")
    }

    fn render_joined(
        &self,
        template: &str,
        records: &[AttributeRecord],
        lang: Lang,
        separator: &str,
    ) -> Result<String> {
        let mut fragments = Vec::with_capacity(records.len());
        for record in records {
            fragments.push(self.render_fragment(template, record, lang)?);
        }

        tracing::debug!(
            "Rendered {} {template} fragment(s) for lang {lang}",
            fragments.len()
        );

        Ok(fragments.join(separator))
    }

    fn render_fragment(
        &self,
        template: &str,
        record: &AttributeRecord,
        lang: Lang,
    ) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("name", &record.name);
        context.insert("type", &record.ty);
        context.insert("lang", lang.as_str());

        let rendered = self.tera.render(template, &context).map_err(|e| {
            GenmodError::TemplateRenderError {
                name: template.to_string(),
                reason: format_tera_error(&e),
            }
        })?;

        Ok(unescape(&rendered).trim_end().to_string())
    }
}

/// Collapse a Tera error and its cause chain into a single message.
///
/// Tera's top-level error text is often just "Failed to render 'x'"; the
/// actionable reason lives in the source chain.
pub(crate) fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut messages = vec![error.to_string()];
    let mut source = error.source();
    while let Some(err) = source {
        messages.push(err.to_string());
        source = err.source();
    }

    messages.join(": ")
}
