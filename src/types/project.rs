use serde::{Deserialize, Serialize};

use super::UserRole;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,
    pub name: String,
    pub color: u32,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub user_role: UserRole,
}
