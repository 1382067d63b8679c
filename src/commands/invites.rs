use tabled::Tabled;
use tracing::debug;

use crate::actions::ActionQueue;
use crate::cli::RejectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::invites::{self, RejectedInvites};
use crate::output;
use crate::project_list::{RowMotion, WorkspaceItem};
use crate::storage::FileStorage;

use super::show::{api_client, list_options, load_workspace};
use super::validate_slug;

#[derive(Tabled)]
struct RejectedRow {
    #[tabled(rename = "Rejected invitation")]
    slug: String,
}

/// Reject an invitation shown by `item` and settle the row animation.
/// Returns the slugs of the rows that moved into the vacated slot.
pub fn reject_in_item(item: &mut WorkspaceItem<'_>, slug: &str) -> Vec<String> {
    item.reject_project_invite(slug);

    let moved: Vec<String> = item
        .reorder()
        .iter()
        .filter(|(_, motion)| **motion == RowMotion::Moving)
        .map(|(row, _)| row.clone())
        .collect();
    item.finish_reorder();

    moved
}

fn print_rejected(slug: &str, already: bool) {
    if already {
        output::print_message(&format!("Invitation {slug} was already rejected"));
    } else {
        output::print_message(&format!("Rejected invitation {slug}"));
    }
}

pub async fn reject(config: &Config, args: RejectArgs) -> Result<()> {
    let slug = validate_slug(&args.slug)?;
    let storage = FileStorage::open_default()?;

    if args.file.is_none() && args.workspace.is_none() {
        let already = RejectedInvites::load(&storage).contains(slug);
        invites::reject_invite(&storage, slug);
        print_rejected(slug, already);
        return Ok(());
    }

    let client = api_client(config)?;
    let workspace = load_workspace(
        client.as_ref(),
        args.file.as_deref(),
        args.workspace.as_deref(),
    )
    .await?;

    let queue = ActionQueue::new();
    let mut item = WorkspaceItem::new(workspace, list_options(config, &args.view), &storage, &queue);

    let already = item.rejected().contains(slug);
    let moved = reject_in_item(&mut item, slug);
    debug!(invitation = slug, ?moved, "rows moved after rejection");

    if !output::is_json_output() {
        print_rejected(slug, already);
    }
    output::print_project_list(item.workspace(), &item.model());

    Ok(())
}

pub fn list() -> Result<()> {
    let storage = FileStorage::open_default()?;
    let rejected = RejectedInvites::load(&storage);

    if rejected.is_empty() && !output::is_json_output() {
        output::print_message("No rejected invitations");
        return Ok(());
    }

    output::print_table(rejected.slugs(), |slug| RejectedRow { slug: slug.clone() });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invites::REJECTED_INVITES_KEY;
    use crate::project_list::{FillOrder, ListOptions};
    use crate::storage::LocalStorage;
    use crate::types::fixtures;

    #[test]
    fn test_reject_in_item_persists_and_recomputes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("local_storage.json"));
        let queue = ActionQueue::new();
        let workspace = fixtures::guest_workspace();
        let slug = workspace.invited_projects[0].slug.clone();
        let options = ListOptions {
            projects_to_show: 3,
            fill_order: FillOrder::InvitationsFirst,
            ..ListOptions::default()
        };

        let mut item = WorkspaceItem::new(workspace.clone(), options, &storage, &queue);
        let mut moved = reject_in_item(&mut item, &slug);
        moved.sort();

        let mut expected = vec![
            workspace.invited_projects[1].slug.clone(),
            workspace.invited_projects[2].slug.clone(),
        ];
        expected.sort();
        assert_eq!(moved, expected);
        assert!(item.reorder().is_empty());
        assert_eq!(
            item.model().invitations,
            workspace.invited_projects[1..4].to_vec()
        );
        assert_eq!(storage.get(REJECTED_INVITES_KEY), Some(vec![slug]));
    }

    #[test]
    fn test_reject_in_item_reads_earlier_rejections() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("local_storage.json"));
        let queue = ActionQueue::new();
        let workspace = fixtures::guest_workspace();
        let first = workspace.invited_projects[0].slug.clone();
        let second = workspace.invited_projects[1].slug.clone();
        invites::reject_invite(&storage, &first);

        let mut item = WorkspaceItem::new(workspace, ListOptions::default(), &storage, &queue);
        assert!(item.rejected().contains(&first));
        reject_in_item(&mut item, &second);

        assert_eq!(storage.get(REJECTED_INVITES_KEY), Some(vec![first, second]));
    }
}
