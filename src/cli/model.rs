//! Generate a model file in the current project.
//!
//! The `model` command runs the full preparation pipeline over the raw
//! arguments and, on success, writes the generated file under
//! `api/models/`.
//!
//! # Examples
//!
//! Generate a plain JavaScript model with defaulted and typed attributes:
//! ```bash
//! genmod model user name age:number
//! ```
//!
//! Generate a CoffeeScript model instead:
//! ```bash
//! genmod model post title body:text --coffee
//! ```
//!
//! Regenerate over an existing file:
//! ```bash
//! genmod model user name --force
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::GenmodError;
use crate::scaffold::{self, Preparation, Scope};
use crate::templating::{self, FragmentRenderer};
use crate::utils::SystemClock;
use crate::writer::ModelWriter;

/// Command to generate a model file from a model name and attribute tokens.
#[derive(Args)]
pub struct ModelCommand {
    /// Model name; also used verbatim as the table name
    name: String,

    /// Attribute tokens, `name` or `name:type` (type defaults to string)
    #[arg(value_name = "ATTRIBUTE")]
    attributes: Vec<String>,

    /// Generate CoffeeScript output instead of plain JavaScript
    #[arg(long)]
    coffee: bool,

    /// Project root (defaults to the current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite the target file if it already exists
    #[arg(short, long)]
    force: bool,
}

impl ModelCommand {
    /// Run the preparation pipeline and materialize the model file.
    ///
    /// Rejected invocations surface as [`GenmodError::InvalidInvocation`]
    /// carrying the pipeline's messages, so the process exits non-zero
    /// with each message on its own line.
    pub fn execute(self) -> Result<()> {
        let root_path = match self.path {
            Some(path) => path,
            None => std::env::current_dir()?,
        };

        let mut args = Vec::with_capacity(self.attributes.len() + 1);
        args.push(self.name);
        args.extend(self.attributes);

        let scope = Scope::new(root_path, args, self.coffee);

        let renderer =
            FragmentRenderer::new(templating::ATTRIBUTE_TEMPLATE, templating::SCHEMA_TEMPLATE)?;

        match scaffold::prepare(&scope, &renderer, &SystemClock)? {
            Preparation::Ready(model) => {
                let writer = ModelWriter::new(templating::MODEL_TEMPLATE, self.force)?;
                let target = writer.write(&model)?;
                println!("{} Created {}", "✓".green(), target.display());
                Ok(())
            }
            Preparation::Invalid(messages) => {
                Err(GenmodError::InvalidInvocation { messages }.into())
            }
        }
    }
}
