//! Controller name resolution.
//!
//! Derives the URL segment a controller serves under from its type
//! label: `app::controllers::UserController` becomes `user`.

use crate::routing::RoutingError;

/// Required suffix on every controller type name.
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// Derive the route segment from a controller type label.
///
/// Strips any module path up to and including the last `::`, requires
/// the remaining simple name to end in [`CONTROLLER_SUFFIX`] with a
/// non-empty prefix, and returns that prefix trimmed and lowercased.
///
/// A failure here is a programmer error: the registration engine treats
/// it as fatal rather than recoverable.
pub fn resolve_name(type_label: &str) -> Result<String, RoutingError> {
    let simple = match type_label.rfind("::") {
        Some(idx) => &type_label[idx + 2..],
        None => type_label,
    };

    match simple.strip_suffix(CONTROLLER_SUFFIX) {
        Some(prefix) if !prefix.is_empty() => Ok(prefix.trim().to_lowercase()),
        _ => Err(RoutingError::InvalidControllerName {
            name: simple.to_string(),
        }),
    }
}
