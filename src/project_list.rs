//! Visible project and invitation list of a workspace.
//!
//! [`aggregate`] is a pure function of its inputs. [`WorkspaceItem`] holds
//! those inputs, recomputes the view on demand and talks to the storage and
//! dispatch collaborators.

use std::collections::{BTreeMap, HashSet};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actions::{Action, Dispatcher};
use crate::invites::{self, RejectedInvites};
use crate::storage::LocalStorage;
use crate::types::{Project, Workspace};

pub const MIN_PROJECTS_TO_SHOW: usize = 3;
pub const MAX_PROJECTS_TO_SHOW: usize = 12;

/// Which list consumes the display budget first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FillOrder {
    #[default]
    ProjectsFirst,
    InvitationsFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub projects_to_show: usize,
    pub show_all_projects: bool,
    pub fill_order: FillOrder,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            projects_to_show: MIN_PROJECTS_TO_SHOW,
            show_all_projects: false,
            fill_order: FillOrder::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListView {
    pub projects: Vec<Project>,
    pub invitations: Vec<Project>,
    pub show_more_projects: bool,
    pub remaining_projects: usize,
}

impl ProjectListView {
    pub fn shown(&self) -> usize {
        self.projects.len() + self.invitations.len()
    }
}

/// Display budget outside show-all mode.
pub fn display_budget(projects_to_show: usize) -> usize {
    projects_to_show.clamp(MIN_PROJECTS_TO_SHOW, MAX_PROJECTS_TO_SHOW)
}

pub fn aggregate(
    workspace: &Workspace,
    options: &ListOptions,
    rejected: &RejectedInvites,
) -> ProjectListView {
    let mut seen: HashSet<&str> = HashSet::new();

    let projects: Vec<&Project> = workspace
        .latest_projects
        .iter()
        .filter(|p| seen.insert(p.slug.as_str()))
        .collect();

    // an invitation to a project already listed is shown as a project
    let invitations: Vec<&Project> = workspace
        .invited_projects
        .iter()
        .filter(|p| !rejected.contains(&p.slug))
        .filter(|p| seen.insert(p.slug.as_str()))
        .collect();

    let loaded = projects.len() + invitations.len();
    let budget = if options.show_all_projects {
        loaded
    } else {
        display_budget(options.projects_to_show)
    };

    let (projects, invitations) = match options.fill_order {
        FillOrder::ProjectsFirst => {
            let projects = take_owned(&projects, budget);
            let invitations = take_owned(&invitations, budget - projects.len());
            (projects, invitations)
        }
        FillOrder::InvitationsFirst => {
            let invitations = take_owned(&invitations, budget);
            let projects = take_owned(&projects, budget - invitations.len());
            (projects, invitations)
        }
    };

    let shown = projects.len() + invitations.len();
    let available = loaded.max(workspace.total_projects);

    ProjectListView {
        projects,
        invitations,
        show_more_projects: !options.show_all_projects && available > shown,
        remaining_projects: workspace.total_projects.saturating_sub(shown),
    }
}

fn take_owned(list: &[&Project], limit: usize) -> Vec<Project> {
    list.iter().take(limit).map(|p| (*p).clone()).collect()
}

/// Animation state of an invitation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowMotion {
    Moving,
}

/// Stateful owner of one workspace's list inputs.
pub struct WorkspaceItem<'a> {
    workspace: Workspace,
    options: ListOptions,
    rejected: RejectedInvites,
    reorder: BTreeMap<String, RowMotion>,
    storage: &'a dyn LocalStorage,
    dispatcher: &'a dyn Dispatcher,
}

impl<'a> WorkspaceItem<'a> {
    /// Reads the rejected invitations from storage.
    pub fn new(
        workspace: Workspace,
        options: ListOptions,
        storage: &'a dyn LocalStorage,
        dispatcher: &'a dyn Dispatcher,
    ) -> Self {
        let rejected = RejectedInvites::load(storage);
        debug!(
            workspace = %workspace.slug,
            rejected = rejected.len(),
            "workspace item ready"
        );
        Self {
            workspace,
            options,
            rejected,
            reorder: BTreeMap::new(),
            storage,
            dispatcher,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn rejected(&self) -> &RejectedInvites {
        &self.rejected
    }

    pub fn model(&self) -> ProjectListView {
        aggregate(&self.workspace, &self.options, &self.rejected)
    }

    /// Fold an action result into the held workspace.
    pub fn apply(&mut self, action: &Action) -> bool {
        crate::actions::reduce(&mut self.workspace, action)
    }

    /// Every call requests a fresh page of projects, whichever way it goes.
    pub fn set_show_all_projects(&mut self, show_all: bool) {
        self.options.show_all_projects = show_all;
        self.dispatcher
            .dispatch(Action::fetch_workspace_projects(self.workspace.slug.clone()));
    }

    /// Hide an invitation and persist the rejection.
    ///
    /// The visible invitations after the rejected one are marked as moving
    /// into the vacated slot.
    pub fn reject_project_invite(&mut self, slug: &str) {
        let visible = self.model().invitations;
        if let Some(index) = visible.iter().position(|p| p.slug == slug) {
            for sibling in &visible[index + 1..] {
                self.reorder.insert(sibling.slug.clone(), RowMotion::Moving);
            }
        }

        self.rejected.insert(slug);
        let stored = invites::reject_invite(self.storage, slug);
        self.rejected.merge(&stored);
    }

    pub fn reorder(&self) -> &BTreeMap<String, RowMotion> {
        &self.reorder
    }

    /// Clear row animation state once the rows have settled.
    pub fn finish_reorder(&mut self) {
        self.reorder.clear();
    }
}
