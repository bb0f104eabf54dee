//! Common utility functions shared across the codebase.

use std::path::{Component, Path};

/// Pick the singular or plural form of a word for `count`.
///
/// # Examples
///
/// ```
/// use phrasepack::utils::pluralize;
///
/// assert_eq!(pluralize(1, "bundle", "bundles"), "bundle");
/// assert_eq!(pluralize(0, "bundle", "bundles"), "bundles");
/// assert_eq!(pluralize(4, "bundle", "bundles"), "bundles");
/// ```
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Checks that `name` can be used as exactly one file or directory name.
///
/// Rejects empty names, `.`/`..`, absolute paths and anything containing a
/// separator.
///
/// ```
/// use phrasepack::utils::is_plain_name;
///
/// assert!(is_plain_name("zh-CN"));
/// assert!(!is_plain_name("../escaped"));
/// assert!(!is_plain_name(""));
/// ```
pub fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) => part == name && !name.contains(['/', '\\']),
        _ => false,
    }
}
