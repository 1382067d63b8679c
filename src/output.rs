use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::project_list::ProjectListView;
use crate::types::{Project, Workspace};

/// Global output format setting
static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

/// Print a table or JSON depending on output mode
pub fn print_table<T, R, F>(items: &[T], to_row: F)
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(items).unwrap_or_default());
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
    }
}

/// Print a message (skipped in JSON mode, or prints simple object)
pub fn print_message(message: &str) {
    if is_json_output() {
        println!("{}", serde_json::json!({ "message": message }));
    } else {
        println!("{message}");
    }
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Premium")]
    premium: String,
}

impl ProjectRow {
    fn new(project: &Project, invitation: bool) -> Self {
        Self {
            kind: if invitation {
                "Invitation".magenta().to_string()
            } else {
                "Project".green().to_string()
            },
            name: project.name.clone(),
            slug: project.slug.clone(),
            role: project.user_role.colored(),
            premium: if project.is_premium { "yes" } else { "" }.to_string(),
        }
    }
}

/// One line summary under the table.
pub fn footer(view: &ProjectListView) -> Option<String> {
    if !view.show_more_projects {
        return None;
    }
    let noun = if view.remaining_projects == 1 {
        "project"
    } else {
        "projects"
    };
    Some(format!(
        "{} more {noun} (use --all to show everything)",
        view.remaining_projects
    ))
}

pub fn print_project_list(workspace: &Workspace, view: &ProjectListView) {
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(view).unwrap_or_default());
        return;
    }

    println!(
        "{} ({}) {}",
        workspace.name.bold(),
        workspace.slug,
        workspace.user_role.colored()
    );

    let rows: Vec<ProjectRow> = view
        .projects
        .iter()
        .map(|p| ProjectRow::new(p, false))
        .chain(view.invitations.iter().map(|p| ProjectRow::new(p, true)))
        .collect();

    if view.shown() == 0 {
        println!("{}", "No projects".bright_black());
    } else {
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
    }

    if let Some(line) = footer(view) {
        println!("{}", line.bright_black());
    }
}
