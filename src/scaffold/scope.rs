//! Scope types threaded through the generation pipeline.
//!
//! A [`Scope`] is the immutable description of one invocation: where the
//! project lives, the raw arguments, the output flavor, and any caller
//! overrides for fields the pipeline would otherwise default. Preparation
//! never mutates it; the result is a freshly built [`ModelScope`] carrying
//! every field the file writer needs.

use std::fmt;
use std::path::PathBuf;

/// Output-syntax flavor for generated model files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    /// Plain JavaScript output (`.js`, comma-separated declarations).
    Js,
    /// CoffeeScript output (`.coffee`, indentation-based declarations).
    Coffee,
}

impl Lang {
    /// Flavor selected by the `coffee` flag.
    #[must_use]
    pub const fn from_coffee(coffee: bool) -> Self {
        if coffee { Self::Coffee } else { Self::Js }
    }

    /// String form used as the `lang` template variable.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Coffee => "coffee",
        }
    }

    /// File extension for generated sources, dot included.
    #[must_use]
    pub const fn ext(self) -> &'static str {
        match self {
            Self::Js => ".js",
            Self::Coffee => ".coffee",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw invocation scope: what the host supplies before preparation.
///
/// `args` carries the model name first and attribute tokens after. Every
/// `Option` field is a caller override; `None` means "fill by default".
/// Defaults never replace supplied values, so preparing a fully overridden
/// scope reproduces those values unchanged.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    /// Project root; must contain a parseable `package.json`.
    pub root_path: PathBuf,
    /// Raw arguments: model name first, `name[:type]` tokens after.
    pub args: Vec<String>,
    /// Generate CoffeeScript instead of plain JavaScript.
    pub coffee: bool,
    /// Override for the derived model identifier.
    pub id: Option<String>,
    /// Override for the table name (defaults to the model name verbatim).
    pub table_name: Option<String>,
    /// Override for the timestamped migration filename.
    pub migration_filename: Option<String>,
    /// Raw attribute tokens; overrides `args[1..]` when supplied.
    pub attributes: Option<Vec<String>>,
    /// Override for the globally exposed identifier.
    pub global_id: Option<String>,
    /// Override for the generated file extension.
    pub ext: Option<String>,
    /// Override for the output flavor.
    pub lang: Option<Lang>,
    /// Override for the generated file name.
    pub filename: Option<String>,
    /// Override for the destination directory, relative to the root.
    pub dest_dir: Option<String>,
}

impl Scope {
    /// Scope for a plain invocation: root path, raw args, flavor flag.
    pub fn new(root_path: impl Into<PathBuf>, args: Vec<String>, coffee: bool) -> Self {
        Self {
            root_path: root_path.into(),
            args,
            coffee,
            ..Self::default()
        }
    }

    /// Model name: the first raw argument, when present and non-empty.
    pub(crate) fn model_name(&self) -> Option<&str> {
        self.args.first().map(String::as_str).filter(|s| !s.is_empty())
    }

    /// Raw attribute tokens: the override list when supplied, else the
    /// arguments after the model name.
    pub(crate) fn raw_attributes(&self) -> &[String] {
        match &self.attributes {
            Some(tokens) => tokens,
            None => self.args.get(1..).unwrap_or(&[]),
        }
    }
}

/// Fully enriched scope handed to the file writer on success.
///
/// Invariants: every field is populated; `ext` matches `lang` and
/// `filename` is `global_id + ext` unless the caller overrode them.
#[derive(Debug, Clone)]
pub struct ModelScope {
    /// Project root the file writer resolves paths against.
    pub root_path: PathBuf,
    /// Capitalized model identifier.
    pub id: String,
    /// Globally exposed identifier; also the filename stem.
    pub global_id: String,
    /// Backing table name.
    pub table_name: String,
    /// Timestamped migration filename (always `.js`; migrations run as
    /// plain JavaScript in either flavor).
    pub migration_filename: String,
    /// Rendered attribute-declaration fragments, joined per flavor.
    pub attributes: String,
    /// Rendered schema-declaration fragments, joined with newlines.
    pub schema: String,
    /// Generated file extension, dot included.
    pub ext: String,
    /// Output flavor.
    pub lang: Lang,
    /// Generated file name.
    pub filename: String,
    /// Destination directory, relative to the root.
    pub dest_dir: String,
    /// Flavor flag as supplied.
    pub coffee: bool,
}

impl ModelScope {
    /// Absolute path of the file the writer will create.
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.root_path.join(&self.dest_dir).join(&self.filename)
    }
}

/// Terminal result of the preparation pipeline.
///
/// Exactly one of a fully populated scope or a non-empty, ordered list of
/// human-readable rejection messages. There is no partial success.
#[derive(Debug)]
pub enum Preparation {
    /// The scope is valid and fully enriched; hand it to the writer.
    Ready(Box<ModelScope>),
    /// The invocation was rejected; messages are in discovery order.
    Invalid(Vec<String>),
}

impl Preparation {
    /// Single-message invalid result.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(vec![message.into()])
    }
}
