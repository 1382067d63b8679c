use serde::{Deserialize, Serialize};

use super::{Project, UserRole};

/// A workspace as returned by the API.
///
/// `latest_projects` may be a partial page; `total_projects` is the
/// authoritative count.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub slug: String,
    pub name: String,
    pub color: u32,
    #[serde(default)]
    pub user_role: UserRole,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub user_is_owner: bool,
    #[serde(default)]
    pub latest_projects: Vec<Project>,
    #[serde(default)]
    pub invited_projects: Vec<Project>,
    #[serde(default)]
    pub total_projects: usize,
}
