//! Side effects triggered by dispatched actions.

use tracing::{info, warn};

use crate::actions::{Action, ActionQueue};
use crate::client::WorkspaceApi;
use crate::project_list::WorkspaceItem;

/// Run the effect for one action. Failed requests are logged and produce
/// no follow-up action.
pub async fn run<A: WorkspaceApi>(api: &A, action: &Action) -> Option<Action> {
    match action {
        Action::FetchWorkspaceProjects { slug } => match api.workspace_projects(slug).await {
            Ok(projects) => {
                info!(workspace = %slug, count = projects.len(), "fetched workspace projects");
                Some(Action::FetchWorkspaceProjectsSuccess {
                    slug: slug.clone(),
                    projects,
                })
            }
            Err(e) => {
                warn!(workspace = %slug, error = %e, "failed to fetch workspace projects");
                None
            }
        },
        Action::FetchWorkspaceProjectsSuccess { .. } => None,
    }
}

/// Drain the queue through the effects, folding results into the item.
/// Without an API, pending actions are dropped.
pub async fn settle<A: WorkspaceApi>(
    api: Option<&A>,
    queue: &ActionQueue,
    item: &mut WorkspaceItem<'_>,
) {
    while let Some(action) = queue.pop() {
        item.apply(&action);

        let Some(api) = api else {
            info!(?action, "no API configured, skipping effect");
            continue;
        };

        if let Some(next) = run(api, &action).await {
            item.apply(&next);
        }
    }
}
