//! Ordered default resolution.
//!
//! Later defaults are functions of earlier ones: the file extension depends
//! on the flavor flag, the filename on the capitalized identifier. A single
//! pass cannot express that dependency, so defaults resolve in three strict
//! passes. Caller-supplied overrides always win over a computed default.

use crate::utils::{Clock, capitalize, migration_timestamp};

use super::scope::{Lang, Scope};

/// Destination directory for generated model files, relative to the
/// project root.
pub const MODELS_DEST_DIR: &str = "api/models/";

/// Pass 1: naming defaults, computed from the raw arguments and the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NamingDefaults {
    pub id: String,
    pub table_name: String,
    pub migration_filename: String,
}

/// Pass 2: flavor-dependent defaults, computed from pass 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FlavorDefaults {
    pub global_id: String,
    pub ext: String,
}

/// Pass 3: target-file defaults, computed from pass 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TargetDefaults {
    pub filename: String,
    pub lang: Lang,
    pub dest_dir: String,
}

/// Resolve the naming defaults from the raw scope.
///
/// `id` is the capitalized model name, `table_name` the model name
/// verbatim, and the migration filename embeds the clock's current local
/// time. The migration extension is always `.js`; migrations run as plain
/// JavaScript in either flavor.
pub(crate) fn resolve_naming(scope: &Scope, clock: &dyn Clock) -> NamingDefaults {
    let model = scope.model_name().unwrap_or_default();

    NamingDefaults {
        id: scope.id.clone().unwrap_or_else(|| capitalize(model)),
        table_name: scope.table_name.clone().unwrap_or_else(|| model.to_string()),
        migration_filename: scope
            .migration_filename
            .clone()
            .unwrap_or_else(|| format!("{}_{model}.js", migration_timestamp(clock))),
    }
}

/// Resolve the flavor-dependent defaults from the naming pass.
pub(crate) fn resolve_flavor(scope: &Scope, naming: &NamingDefaults) -> FlavorDefaults {
    FlavorDefaults {
        global_id: scope.global_id.clone().unwrap_or_else(|| capitalize(&naming.id)),
        ext: scope
            .ext
            .clone()
            .unwrap_or_else(|| Lang::from_coffee(scope.coffee).ext().to_string()),
    }
}

/// Resolve the target-file defaults from the flavor pass.
pub(crate) fn resolve_target(scope: &Scope, flavor: &FlavorDefaults) -> TargetDefaults {
    TargetDefaults {
        filename: scope
            .filename
            .clone()
            .unwrap_or_else(|| format!("{}{}", flavor.global_id, flavor.ext)),
        lang: scope.lang.unwrap_or(Lang::from_coffee(scope.coffee)),
        dest_dir: scope.dest_dir.clone().unwrap_or_else(|| MODELS_DEST_DIR.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FixedClock;
    use chrono::{Local, TimeZone};

    fn fixed_clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2026, 8, 6, 14, 30, 5).single().unwrap())
    }

    fn scope(args: &[&str], coffee: bool) -> Scope {
        Scope::new("/tmp/app", args.iter().map(ToString::to_string).collect(), coffee)
    }

    #[test]
    fn naming_pass_derives_id_table_and_migration() {
        let naming = resolve_naming(&scope(&["user", "name"], false), &fixed_clock());

        assert_eq!(naming.id, "User");
        assert_eq!(naming.table_name, "user");
        assert_eq!(naming.migration_filename, "20260806143005_user.js");
    }

    #[test]
    fn migration_filename_stays_js_for_coffee_flavor() {
        let naming = resolve_naming(&scope(&["user"], true), &fixed_clock());

        assert!(naming.migration_filename.ends_with("_user.js"));
    }

    #[test]
    fn flavor_pass_capitalizes_id_and_picks_extension() {
        let s = scope(&["user"], false);
        let naming = resolve_naming(&s, &fixed_clock());
        let flavor = resolve_flavor(&s, &naming);

        assert_eq!(flavor.global_id, "User");
        assert_eq!(flavor.ext, ".js");

        let s = scope(&["user"], true);
        let naming = resolve_naming(&s, &fixed_clock());
        let flavor = resolve_flavor(&s, &naming);

        assert_eq!(flavor.ext, ".coffee");
    }

    #[test]
    fn target_pass_builds_filename_from_earlier_passes() {
        let s = scope(&["user"], false);
        let naming = resolve_naming(&s, &fixed_clock());
        let flavor = resolve_flavor(&s, &naming);
        let target = resolve_target(&s, &flavor);

        assert_eq!(target.filename, "User.js");
        assert_eq!(target.lang, Lang::Js);
        assert_eq!(target.dest_dir, MODELS_DEST_DIR);
    }

    #[test]
    fn resolution_is_idempotent_on_a_fully_populated_scope() {
        let mut s = scope(&["user", "name"], false);
        s.id = Some("Account".to_string());
        s.table_name = Some("accounts".to_string());
        s.migration_filename = Some("20250101000000_accounts.js".to_string());
        s.global_id = Some("Account".to_string());
        s.ext = Some(".coffee".to_string());
        s.lang = Some(Lang::Coffee);
        s.filename = Some("Account.coffee".to_string());
        s.dest_dir = Some("lib/models/".to_string());

        let naming = resolve_naming(&s, &fixed_clock());
        let flavor = resolve_flavor(&s, &naming);
        let target = resolve_target(&s, &flavor);

        assert_eq!(naming.id, "Account");
        assert_eq!(naming.table_name, "accounts");
        assert_eq!(naming.migration_filename, "20250101000000_accounts.js");
        assert_eq!(flavor.global_id, "Account");
        assert_eq!(flavor.ext, ".coffee");
        assert_eq!(target.filename, "Account.coffee");
        assert_eq!(target.lang, Lang::Coffee);
        assert_eq!(target.dest_dir, "lib/models/");
    }

    #[test]
    fn global_id_derives_from_an_overridden_id() {
        let mut s = scope(&["user"], false);
        s.id = Some("account".to_string());

        let naming = resolve_naming(&s, &fixed_clock());
        let flavor = resolve_flavor(&s, &naming);

        assert_eq!(flavor.global_id, "Account");
    }
}
