//! Error handling for genmod.
//!
//! The error system is built around two types:
//! 1. [`GenmodError`] - strongly-typed errors for precise handling in code
//! 2. [`ErrorContext`] - a wrapper that adds user-friendly details and
//!    actionable suggestions for CLI display
//!
//! Use [`user_friendly_error`] to convert any error reaching the top of the
//! CLI into a displayable context with suggestions.
//!
//! Note that rejected user input is not represented here. The generation
//! pipeline reports it as ordered message lists through
//! [`crate::scaffold::Preparation::Invalid`]; only
//! [`GenmodError::InvalidInvocation`] briefly carries those messages across
//! the CLI boundary so the process can exit non-zero.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for genmod operations.
///
/// Each variant represents a specific failure mode and carries the context
/// needed to explain it: file paths, template names, parse reasons.
#[derive(Error, Debug)]
pub enum GenmodError {
    /// No `package.json` was found at the expected project root.
    #[error("Manifest file package.json not found in {path}")]
    ManifestNotFound {
        /// Directory that was expected to contain the manifest
        path: String,
    },

    /// The project manifest exists but is not valid JSON.
    #[error("Invalid manifest file syntax in {file}")]
    ManifestParseError {
        /// Path to the manifest file that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// A template string failed to compile.
    #[error("Failed to compile template '{name}': {reason}")]
    TemplateParseError {
        /// Name the template was registered under
        name: String,
        /// Specific reason for the compilation failure
        reason: String,
    },

    /// A compiled template failed to render.
    #[error("Failed to render template '{name}': {reason}")]
    TemplateRenderError {
        /// Name the template was registered under
        name: String,
        /// Specific reason for the rendering failure
        reason: String,
    },

    /// The generation target already exists and `--force` was not given.
    #[error("Target file already exists: {path}")]
    TargetExists {
        /// Path of the existing file
        path: String,
    },

    /// The invocation was rejected by scope or attribute validation.
    ///
    /// Carries the ordered messages accumulated by the pipeline, one per
    /// line in the rendered error.
    #[error("{}", .messages.join("\n"))]
    InvalidInvocation {
        /// Human-readable rejection messages, in the order they were found
        messages: Vec<String>,
    },

    /// General file system operation failure.
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// The operation that failed
        operation: String,
        /// The path involved
        path: String,
    },

    /// Standard I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catch-all for errors without a dedicated variant.
    #[error("{message}")]
    Other {
        /// Description of the error
        message: String,
    },
}

/// A [`GenmodError`] paired with optional user-facing details and a
/// suggestion, for terminal display.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying genmod error
    pub error: GenmodError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a basic error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: GenmodError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, displayed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add explanatory details, displayed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details, and suggestion to stderr with terminal
    /// colors. This is how genmod presents failures to CLI users.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions.
///
/// Recognizes [`GenmodError`] variants, common [`std::io::Error`] kinds, and
/// JSON parse failures, attaching tailored guidance for each. Unrecognized
/// errors are passed through with their full cause chain appended.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // Take ownership of typed errors so the context can carry them.
    let error = match error.downcast::<GenmodError>() {
        Ok(genmod_error) => return create_error_context(genmod_error),
        Err(other) => other,
    };

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(GenmodError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion(
                    "Try running with elevated permissions or check file ownership",
                )
                .with_details("genmod does not have permission to read or write a file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(GenmodError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            std::io::ErrorKind::AlreadyExists => {
                return ErrorContext::new(GenmodError::FileSystemError {
                    operation: "file creation".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Remove the existing file or use --force to overwrite");
            }
            _ => {}
        }
    }

    if let Some(json_error) = error.downcast_ref::<serde_json::Error>() {
        return ErrorContext::new(GenmodError::ManifestParseError {
            file: "package.json".to_string(),
            reason: json_error.to_string(),
        })
        .with_suggestion(
            "Check the JSON syntax in your package.json. Verify quotes, commas, and brackets",
        );
    }

    // Generic error - include the full cause chain for better diagnostics.
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(GenmodError::Other { message })
}

/// Attach per-variant suggestions and details to a typed error.
fn create_error_context(error: GenmodError) -> ErrorContext {
    match &error {
        GenmodError::ManifestNotFound { .. } | GenmodError::ManifestParseError { .. } => {
            ErrorContext::new(error).with_suggestion(
                "Run genmod from your project root, the directory containing package.json",
            )
        }
        GenmodError::TemplateParseError { .. } | GenmodError::TemplateRenderError { .. } => {
            ErrorContext::new(error).with_suggestion(
                "Check template syntax: variables use {{ var }}, control flow uses {% %}",
            )
        }
        GenmodError::TargetExists { .. } => {
            ErrorContext::new(error).with_suggestion("Pass --force to overwrite the existing file")
        }
        _ => ErrorContext::new(error),
    }
}
