use std::io::{self, Write};

use crate::config::{parse_base_url, Config};
use crate::error::{BoardError, Result};
use crate::project_list::{FillOrder, MAX_PROJECTS_TO_SHOW, MIN_PROJECTS_TO_SHOW};

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Render the config file body. Empty answers are left out.
pub fn render_config(
    api_url: &str,
    api_token: &str,
    projects_to_show: Option<usize>,
    fill_order: FillOrder,
) -> Result<String> {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    Config {
        api_url: non_empty(api_url),
        api_token: non_empty(api_token),
        projects_to_show,
        fill_order,
    }
    .render()
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("wsboard configuration");
    println!("=====================\n");

    let api_url = prompt("API base URL (e.g. https://api.example.com/api/v2) [optional]: ")?;
    if !api_url.is_empty() {
        parse_base_url(&api_url)?;
    }

    let api_token = prompt("API token [optional]: ")?;

    let projects_to_show = prompt(&format!(
        "Projects to show ({MIN_PROJECTS_TO_SHOW}-{MAX_PROJECTS_TO_SHOW}) [optional]: "
    ))?;
    let projects_to_show = projects_to_show.parse::<usize>().ok();

    let fill_order = prompt("Show invitations before projects? [y/N] ")?;
    let fill_order = if fill_order.eq_ignore_ascii_case("y") {
        FillOrder::InvitationsFirst
    } else {
        FillOrder::ProjectsFirst
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BoardError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let content = render_config(&api_url, &api_token, projects_to_show, fill_order)?;
    std::fs::write(&config_path, content).map_err(|e| BoardError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'wsboard' commands!");

    Ok(())
}
