pub mod init;
pub mod invites;
pub mod show;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BoardError, Result};

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

/// Check a slug given on the command line.
pub fn validate_slug(slug: &str) -> Result<&str> {
    if SLUG_RE.is_match(slug) {
        Ok(slug)
    } else {
        Err(BoardError::InvalidSlug(slug.to_string()))
    }
}
