#[cfg(test)]
pub mod fixtures;
mod project;
mod role;
mod workspace;

pub use project::Project;
pub use role::UserRole;
pub use workspace::Workspace;
