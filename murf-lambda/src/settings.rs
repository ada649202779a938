//! The [`settings`](self) module contains the runtime configuration of this crate.
//!
//! The initial values are read from the environment the first time the
//! settings are accessed:
//!
//! | Variable            | Effect |
//! |---------------------|--------|
//! | `MURF_LAMBDA_QUIET` | `0`, `false`, `no` or `off` disables [`Settings::quiet`] |

use std::env::var;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Name of the environment variable that controls [`Settings::quiet`].
pub const ENV_QUIET: &str = "MURF_LAMBDA_QUIET";

/// Runtime configuration of the matchers.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Settings {
    /// Do not print the panic message of assertions that were caught by an
    /// [`AssertionMatcher`](crate::AssertionMatcher).
    pub quiet: bool,
}

impl Settings {
    /// Create the settings from the current environment.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(value) = var(ENV_QUIET) {
            settings.quiet = parse_flag(&value).unwrap_or(settings.quiet);
        }

        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { quiet: true }
    }
}

/// Get a copy of the current settings.
pub fn get() -> Settings {
    *SETTINGS.read()
}

/// Replace the current settings.
pub fn set(settings: Settings) {
    *SETTINGS.write() = settings;
}

/// Modify the current settings in place.
pub fn update<F>(f: F)
where
    F: FnOnce(&mut Settings),
{
    f(&mut SETTINGS.write());
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

static SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| RwLock::new(Settings::from_env()));

/// Serializes tests that modify the environment or the global settings.
#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
