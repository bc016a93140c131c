//! Route key codec.
//!
//! A route key is a single ASCII token declaring a custom route:
//! `METHOD:subpath`. Only the first separator splits method from path,
//! so subpaths may themselves contain `:` (e.g. `GET:user/:id`).

use crate::routing::RoutingError;

/// Separator between the HTTP method and the subpath.
pub const KEY_SEPARATOR: char = ':';

/// Shortest well-formed key (`"GET:x"` is 5 bytes).
const MIN_KEY_LEN: usize = 5;

/// Join an HTTP method and a subpath into a route key.
///
/// The inverse of [`parse_key`] for any method that does not itself
/// contain the separator.
pub fn compose_key(method: &str, path: &str) -> String {
    format!("{method}{KEY_SEPARATOR}{path}")
}

/// Split a route key into its HTTP method and subpath.
///
/// The key is trimmed, then split at the first separator. The method is
/// returned as written; it is not validated against a verb whitelist
/// here, the registration engine decides what to do with it. The
/// subpath is trimmed and lowercased.
pub fn parse_key(key: &str) -> Result<(String, String), RoutingError> {
    let key = key.trim();

    if key.len() < MIN_KEY_LEN {
        return Err(RoutingError::KeyTooShort {
            key: key.to_string(),
        });
    }

    let split = key
        .find(KEY_SEPARATOR)
        .ok_or_else(|| RoutingError::KeyMissingSeparator {
            key: key.to_string(),
        })?;

    let method = key[..split].to_string();
    let path = key[split + 1..].trim().to_lowercase();

    Ok((method, path))
}
