//! The model-generation pipeline.
//!
//! One invocation flows through five stages, strictly in order:
//!
//! 1. **Scope validation** - the root path must hold a parseable
//!    `package.json`, and a model identifier must be derivable from the
//!    arguments. First failing check wins.
//! 2. **Attribute parsing** - raw `name[:type]` tokens become
//!    [`AttributeRecord`]s; malformed tokens are all collected, and
//!    duplicate names are rejected once no malformed tokens remain.
//! 3. **Default resolution** - three ordered passes fill every field the
//!    caller did not supply (see [`defaults`]).
//! 4. **Fragment rendering** - the injected templates produce the joined
//!    attribute and schema declaration strings.
//! 5. **Reporting** - exactly one terminal [`Preparation`] value.
//!
//! The pipeline is a pure transformation: the input [`Scope`] is never
//! mutated, there is no global state, and the clock is injected, so the
//! only nondeterminism is the timestamp a caller asks for.

pub mod attributes;
pub mod defaults;
pub mod scope;

pub use attributes::{AttributeRecord, ParsedAttributes, parse_attributes};
pub use scope::{Lang, ModelScope, Preparation, Scope};

use anyhow::Result;
use tracing::debug;

use crate::manifest::PackageManifest;
use crate::templating::FragmentRenderer;
use crate::utils::{Clock, capitalize};

/// Fixed hint shown for any usage failure.
pub const USAGE_MESSAGE: &str =
    "Usage: genmod model <modelname> [attribute|attribute:type ...]";

/// Shown when the invocation directory is not a project root.
pub const PROJECT_ROOT_MESSAGE: &str =
    "Sorry, this command can only be used in the root directory of a project.";

/// Run the full preparation pipeline over `scope`.
///
/// The `Ok` value is always exactly one of [`Preparation::Ready`] (a fully
/// enriched [`ModelScope`]) or [`Preparation::Invalid`] (ordered rejection
/// messages). `Err` is reserved for engine-level faults - a template that
/// fails to render - which no well-formed invocation produces.
///
/// Only one class of invalid result is ever returned: usage failures
/// short-circuit before parsing, per-token messages suppress the duplicate
/// check, and duplicates are reported as a single message.
pub fn prepare(
    scope: &Scope,
    renderer: &FragmentRenderer,
    clock: &dyn Clock,
) -> Result<Preparation> {
    if let Some(invalid) = validate_scope(scope) {
        return Ok(invalid);
    }

    let parsed = parse_attributes(scope.raw_attributes());
    if !parsed.invalid.is_empty() {
        debug!("Rejecting {} malformed attribute token(s)", parsed.invalid.len());
        return Ok(Preparation::Invalid(parsed.invalid));
    }
    if attributes::has_duplicate_names(&parsed.records) {
        debug!("Rejecting duplicate attribute names");
        return Ok(Preparation::invalid(attributes::DUPLICATE_ATTRIBUTES_MESSAGE));
    }

    let naming = defaults::resolve_naming(scope, clock);
    let flavor = defaults::resolve_flavor(scope, &naming);
    let target = defaults::resolve_target(scope, &flavor);

    let rendered_attributes = renderer.render_attributes(&parsed.records, target.lang)?;
    let rendered_schema = renderer.render_schema(&parsed.records, target.lang)?;

    debug!(
        "Prepared model scope for '{}' with {} attribute(s)",
        naming.id,
        parsed.records.len()
    );

    Ok(Preparation::Ready(Box::new(ModelScope {
        root_path: scope.root_path.clone(),
        id: naming.id,
        global_id: flavor.global_id,
        table_name: naming.table_name,
        migration_filename: naming.migration_filename,
        attributes: rendered_attributes,
        schema: rendered_schema,
        ext: flavor.ext,
        lang: target.lang,
        filename: target.filename,
        dest_dir: target.dest_dir,
        coffee: scope.coffee,
    })))
}

/// Scope validation: manifest check first, then the two required-field
/// checks. First failing check wins; `None` means the scope is valid.
///
/// The candidate identifier is computed from raw scope values only; the
/// Default Resolver is never consulted here.
fn validate_scope(scope: &Scope) -> Option<Preparation> {
    if PackageManifest::load(&scope.root_path).is_err() {
        return Some(Preparation::invalid(PROJECT_ROOT_MESSAGE));
    }

    if scope.root_path.as_os_str().is_empty() {
        return Some(Preparation::invalid(USAGE_MESSAGE));
    }

    let effective_id = scope
        .id
        .clone()
        .unwrap_or_else(|| scope.model_name().map(capitalize).unwrap_or_default());
    if effective_id.is_empty() {
        return Some(Preparation::invalid(USAGE_MESSAGE));
    }

    None
}
