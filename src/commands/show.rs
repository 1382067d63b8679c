use std::path::Path;

use tracing::debug;

use crate::actions::ActionQueue;
use crate::cli::{ShowArgs, ViewArgs};
use crate::client::{BoardClient, WorkspaceApi};
use crate::config::Config;
use crate::effects;
use crate::error::{BoardError, Result};
use crate::output;
use crate::project_list::{ListOptions, WorkspaceItem};
use crate::storage::FileStorage;
use crate::types::Workspace;

use super::validate_slug;

pub fn load_workspace_file(path: &Path) -> Result<Workspace> {
    let contents = std::fs::read_to_string(path).map_err(|e| BoardError::WorkspaceRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| BoardError::WorkspaceParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Workspace from a JSON file, or from the API when a slug is given.
pub async fn load_workspace<A: WorkspaceApi>(
    api: Option<&A>,
    file: Option<&Path>,
    slug: Option<&str>,
) -> Result<Workspace> {
    match (file, slug, api) {
        (Some(path), _, _) => load_workspace_file(path),
        (None, Some(slug), Some(api)) => api.workspace(validate_slug(slug)?).await,
        _ => Err(BoardError::NoWorkspaceSource),
    }
}

pub fn list_options(config: &Config, view: &ViewArgs) -> ListOptions {
    ListOptions {
        projects_to_show: config.resolve_projects_to_show(view.limit),
        show_all_projects: false,
        fill_order: config.resolve_fill_order(view.fill_order),
    }
}

pub fn api_client(config: &Config) -> Result<Option<BoardClient>> {
    Ok(config
        .api_url()?
        .map(|url| BoardClient::new(url, config.api_token())))
}

pub async fn run(config: &Config, args: ShowArgs) -> Result<()> {
    let client = api_client(config)?;
    let workspace =
        load_workspace(client.as_ref(), args.file.as_deref(), args.slug.as_deref()).await?;

    let storage = FileStorage::open_default()?;
    let queue = ActionQueue::new();

    let mut item = WorkspaceItem::new(workspace, list_options(config, &args.view), &storage, &queue);
    debug!(
        workspace = %item.workspace().slug,
        options = ?item.options(),
        "showing workspace"
    );

    if args.all {
        item.set_show_all_projects(true);
    }
    effects::settle(client.as_ref(), &queue, &mut item).await;

    output::print_project_list(item.workspace(), &item.model());

    Ok(())
}
