//! Invitations the user dismissed locally.
//!
//! Rejection only hides an invitation on this client; the membership offer
//! on the server is untouched.

use tracing::debug;

use crate::storage::LocalStorage;

pub const REJECTED_INVITES_KEY: &str = "general_rejected_invites";

/// Insertion-ordered set of rejected invitation slugs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectedInvites {
    slugs: Vec<String>,
}

impl RejectedInvites {
    /// Read the persisted set. A missing or malformed entry is an empty set.
    pub fn load(storage: &dyn LocalStorage) -> Self {
        let mut rejected = Self::default();
        for slug in storage.get(REJECTED_INVITES_KEY).unwrap_or_default() {
            rejected.insert(&slug);
        }
        rejected
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.iter().any(|s| s == slug)
    }

    /// Returns false when the slug was already present.
    pub fn insert(&mut self, slug: &str) -> bool {
        if self.contains(slug) {
            return false;
        }
        self.slugs.push(slug.to_string());
        true
    }

    pub fn merge(&mut self, other: &RejectedInvites) {
        for slug in &other.slugs {
            self.insert(slug);
        }
    }

    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

/// Append `slug` to the persisted set and return the updated set.
///
/// Storage is only written when the slug is new.
pub fn reject_invite(storage: &dyn LocalStorage, slug: &str) -> RejectedInvites {
    let mut rejected = RejectedInvites::load(storage);
    if rejected.insert(slug) {
        storage.set(REJECTED_INVITES_KEY, rejected.slugs());
    } else {
        debug!(slug, "invitation already rejected");
    }
    rejected
}
