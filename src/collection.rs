//! Collection handle shared by every client implementation

use serde::{Deserialize, Serialize};

/// A named collection as returned by a client.
///
/// Only `id` and `name` are read; servers may send more fields, which are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
}

/// Check a collection name: 3-63 characters of `[A-Za-z0-9._-]`,
/// starting and ending with an alphanumeric character.
pub fn is_valid_name(name: &str) -> bool {
    let len = name.chars().count();
    if !(3..=63).contains(&len) {
        return false;
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
    let first_last_ok = name.starts_with(|c: char| c.is_ascii_alphanumeric())
        && name.ends_with(|c: char| c.is_ascii_alphanumeric());
    first_last_ok && name.chars().all(allowed)
}
