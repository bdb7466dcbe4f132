//! Project locator handling.
//!
//! Every registry record is addressable by a locator of the form
//! `project:///{id}`: the `project://` scheme followed by a slash and the
//! record's decimal identifier.

use super::error::ProjectError;

/// URI scheme prefix carried by every project locator.
pub const SCHEME: &str = "project://";

/// Build the locator for a project identifier.
pub fn format(id: &str) -> String {
    format!("{SCHEME}/{id}")
}

/// Extract the project identifier from a locator.
///
/// The identifier is the path component after the scheme, with the leading
/// slash stripped. Locators without the `project://` scheme, or without an
/// identifier, are rejected.
pub fn parse(uri: &str) -> Result<&str, ProjectError> {
    let path = uri
        .strip_prefix(SCHEME)
        .ok_or_else(|| ProjectError::invalid_locator(uri))?;

    let id = path.trim_start_matches('/');
    if id.is_empty() {
        return Err(ProjectError::invalid_locator(uri));
    }

    Ok(id)
}
