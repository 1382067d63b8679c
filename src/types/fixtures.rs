//! Workspace factories shaped like the API payloads for each role.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Project, UserRole, Workspace};

const PROJECTS_PER_GROUP: usize = 6;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

pub fn project(workspace: &Workspace) -> Project {
    let id = next_id();
    Project {
        slug: format!("project-{id}"),
        name: format!("Project {id}"),
        color: workspace.color,
        is_premium: workspace.is_premium,
        user_role: workspace.user_role,
    }
}

fn empty_workspace(role: UserRole) -> Workspace {
    let id = next_id();
    Workspace {
        slug: format!("workspace-{id}"),
        name: format!("Workspace {id}"),
        color: (id % 8) as u32 + 1,
        user_role: role,
        is_premium: true,
        user_is_owner: true,
        latest_projects: Vec::new(),
        invited_projects: Vec::new(),
        total_projects: 0,
    }
}

/// Guest: 6 latest projects and 6 unrelated invitations.
pub fn guest_workspace() -> Workspace {
    let mut workspace = empty_workspace(UserRole::Guest);
    for _ in 0..PROJECTS_PER_GROUP {
        let latest = project(&workspace);
        workspace.latest_projects.push(latest);
    }
    for _ in 0..PROJECTS_PER_GROUP {
        let invited = project(&workspace);
        workspace.invited_projects.push(invited);
    }
    workspace.total_projects = PROJECTS_PER_GROUP;
    workspace
}

/// Admin: every invitation is also listed among the latest projects.
pub fn admin_workspace() -> Workspace {
    let mut workspace = empty_workspace(UserRole::Admin);
    for _ in 0..PROJECTS_PER_GROUP {
        let latest = project(&workspace);
        workspace.latest_projects.push(latest);
    }
    for _ in 0..PROJECTS_PER_GROUP {
        let invited = project(&workspace);
        workspace.invited_projects.push(invited.clone());
        workspace.latest_projects.push(invited);
    }
    workspace.total_projects = PROJECTS_PER_GROUP * 2;
    workspace
}

/// Member: 6 private invitations plus 6 invitations to public projects,
/// which also show up among the latest projects.
pub fn member_workspace() -> Workspace {
    let mut workspace = empty_workspace(UserRole::Member);
    for _ in 0..PROJECTS_PER_GROUP {
        let latest = project(&workspace);
        workspace.latest_projects.push(latest);
    }
    for _ in 0..PROJECTS_PER_GROUP {
        let invited = project(&workspace);
        workspace.invited_projects.push(invited);
    }
    for _ in 0..PROJECTS_PER_GROUP {
        let public = project(&workspace);
        workspace.invited_projects.push(public.clone());
        workspace.latest_projects.push(public);
    }
    workspace.total_projects = PROJECTS_PER_GROUP * 2;
    workspace
}
