//! Cross-cutting helpers: filesystem primitives, clock injection, and
//! identifier casing.

pub mod fs;

use chrono::{DateTime, Local};

/// Time source for timestamp-bearing defaults.
///
/// The migration filename embeds a wall-clock stamp. Production code uses
/// [`SystemClock`]; tests inject a fixed instant so generated names are
/// deterministic.
pub trait Clock {
    /// Current local time.
    fn now(&self) -> DateTime<Local>;
}

/// [`Clock`] backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Format a clock reading as the `YYYYMMDDHHmmss` stamp embedded in
/// migration filenames. Every field is zero-padded to two digits (four for
/// the year).
pub fn migration_timestamp(clock: &dyn Clock) -> String {
    clock.now().format("%Y%m%d%H%M%S").to_string()
}

/// Uppercase the first character of `s`, leaving the remainder untouched.
///
/// `user` becomes `User` and `userProfile` becomes `UserProfile`; an empty
/// string stays empty. The first character is expanded per
/// [`char::to_uppercase`], so multi-byte characters are handled correctly.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// [`Clock`] that always reports the same instant.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Local>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
