// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small helpers shared by SDK scripts: platform URL resolution, token shape
//! checks, library file name decomposition and record re-keying.

pub mod filename;
pub mod records;

pub use filename::{break_filename, FilenameParts};
pub use records::{index_by, IndexKey, KeyPart, KeySpec};

/// Hosted platform aliases that expand to a full URL.
pub const HOSTED_ALIASES: &[&str] = &["saas", "saas-eu", "app", "app-eu"];

/// Alias used when no URL is configured.
pub const DEFAULT_ALIAS: &str = "saas";

/// Length of organization, product, project and user tokens.
pub const TOKEN_LEN: usize = 64;

/// Resolves a platform URL.
///
/// `None` means the default hosted instance; hosted aliases expand to their
/// `https://<alias>.whitesourcesoftware.com` URL; anything else is returned as given.
///
/// # Examples
///
/// ```
/// use uacfg::util::full_ws_url;
///
/// assert_eq!(full_ws_url(None), "https://saas.whitesourcesoftware.com");
/// assert_eq!(full_ws_url(Some("app-eu")), "https://app-eu.whitesourcesoftware.com");
/// assert_eq!(full_ws_url(Some("https://ws.corp.example")), "https://ws.corp.example");
/// ```
pub fn full_ws_url(url: Option<&str>) -> String {
    let url = url.unwrap_or(DEFAULT_ALIAS);
    if HOSTED_ALIASES.contains(&url) {
        format!("https://{}.whitesourcesoftware.com", url)
    } else {
        url.to_string()
    }
}

/// Returns `true` if the string has the length of a platform token.
pub fn is_token(token: &str) -> bool {
    token.chars().count() == TOKEN_LEN
}
