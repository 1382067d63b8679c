//! Actions, the dispatch seam, and the reducer that folds results back into
//! a workspace.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde::Serialize;
use tracing::debug;

use crate::types::{Project, Workspace};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Request a full page of projects for a workspace.
    FetchWorkspaceProjects { slug: String },
    FetchWorkspaceProjectsSuccess { slug: String, projects: Vec<Project> },
}

impl Action {
    pub fn fetch_workspace_projects(slug: impl Into<String>) -> Self {
        Action::FetchWorkspaceProjects { slug: slug.into() }
    }
}

/// Fire-and-forget sink for actions.
pub trait Dispatcher {
    fn dispatch(&self, action: Action);
}

/// FIFO dispatcher drained by the host loop.
#[derive(Default)]
pub struct ActionQueue {
    pending: RefCell<VecDeque<Action>>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop(&self) -> Option<Action> {
        self.pending.borrow_mut().pop_front()
    }

    #[cfg(test)]
    pub fn drain(&self) -> Vec<Action> {
        self.pending.borrow_mut().drain(..).collect()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl Dispatcher for ActionQueue {
    fn dispatch(&self, action: Action) {
        debug!(?action, "dispatch");
        self.pending.borrow_mut().push_back(action);
    }
}

/// Apply an action to the workspace it targets. Returns true when the
/// workspace changed.
pub fn reduce(workspace: &mut Workspace, action: &Action) -> bool {
    match action {
        Action::FetchWorkspaceProjectsSuccess { slug, projects } if *slug == workspace.slug => {
            workspace.latest_projects = projects.clone();
            true
        }
        _ => false,
    }
}
