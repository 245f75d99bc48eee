//! Template rendering for generated model files.
//!
//! Two layers of templates drive generation:
//!
//! - **Fragment templates** ([`FragmentRenderer`]): one attribute-declaration
//!   fragment and one schema-declaration fragment per parsed attribute,
//!   parameterized by `name`, `type`, and `lang`.
//! - **The model-file template** (consumed by [`crate::writer`]): the outer
//!   file that embeds the joined fragments.
//!
//! Template text is always supplied to the consuming type at construction;
//! nothing in this module reads template files at run time. The copies
//! shipped with the binary are embedded below ([`ATTRIBUTE_TEMPLATE`],
//! [`SCHEMA_TEMPLATE`], [`MODEL_TEMPLATE`]).

pub mod renderer;
pub mod utils;


pub use renderer::FragmentRenderer;
pub use utils::unescape;

/// Attribute-declaration fragment template shipped with the binary.
pub const ATTRIBUTE_TEMPLATE: &str = include_str!("../../templates/attribute.template");

/// Schema-declaration fragment template shipped with the binary.
pub const SCHEMA_TEMPLATE: &str = include_str!("../../templates/schema.template");

/// Model-file template shipped with the binary, consumed by the writer.
pub const MODEL_TEMPLATE: &str = include_str!("../../templates/model.template");
