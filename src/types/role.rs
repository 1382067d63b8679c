use std::fmt;

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Membership role of the current user in a workspace or project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Guest,
    Member,
    Admin,
}

impl UserRole {
    /// Get the label for this role.
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Guest => "Guest",
            UserRole::Member => "Member",
            UserRole::Admin => "Admin",
        }
    }

    /// Get the colored label for terminal output.
    pub fn colored(self) -> String {
        let label = self.label();
        match self {
            UserRole::Guest => label.bright_black().to_string(),
            UserRole::Member => label.blue().to_string(),
            UserRole::Admin => label.yellow().bold().to_string(),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
