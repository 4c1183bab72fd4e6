//! URL Utility Functions
//!
//! Base URL parsing and resolution of `src`/`href` values found in the
//! extracted content.

use tracing::debug;
use url::Url;

use crate::error::Result;

/// Schemes left untouched by [`resolve_url`].
const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "ftp://"];

/// Parse the base URL given in the options.
///
/// # Errors
/// Returns [`crate::Error::InvalidBaseUrl`] when `value` does not parse.
pub fn parse_base_url(value: Option<&str>) -> Result<Option<Url>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Ok(Some(Url::parse(value)?)),
    }
}

/// Whether `value` already carries an `http`, `https` or `ftp` scheme.
#[must_use]
pub fn is_absolute_url(value: &str) -> bool {
    let value = value.trim_start();
    ABSOLUTE_PREFIXES.iter().any(|prefix| {
        value
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Resolve `value` against `base`.
///
/// Returns the original value when there is no base, when it is already
/// absolute, or when the join fails.
#[must_use]
pub fn resolve_url(value: &str, base: Option<&Url>) -> String {
    let Some(base) = base else {
        return value.to_string();
    };
    if is_absolute_url(value) {
        return value.to_string();
    }

    match base.join(value.trim()) {
        Ok(resolved) => resolved.to_string(),
        Err(err) => {
            debug!(value, base = %base, %err, "could not resolve url");
            value.to_string()
        }
    }
}
