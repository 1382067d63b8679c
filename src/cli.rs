use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::project_list::FillOrder;

#[derive(Parser)]
#[command(name = "wsboard")]
#[command(about = "Browse workspace projects and pending invitations", version)]
#[command(after_help = "EXAMPLES:
    wsboard show acme                 Show the project list of workspace 'acme'
    wsboard show --file ws.json -n 8  Show a workspace saved as JSON
    wsboard show acme --all           Show every project
    wsboard reject old-project        Hide an invitation on this machine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output and print error causes
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the projects and invitations of a workspace
    #[command(after_help = "EXAMPLES:
    wsboard show acme
    wsboard show acme --limit 8
    wsboard show --file workspace.json --all
    wsboard show acme --fill-order invitations-first")]
    Show(ShowArgs),
    /// Hide a project invitation locally (the invitation stays on the server)
    #[command(after_help = "EXAMPLES:
    wsboard reject old-project
    wsboard reject old-project --workspace acme
    wsboard reject old-project --file workspace.json -n 8")]
    Reject(RejectArgs),
    /// List locally rejected invitations
    #[command(after_help = "EXAMPLES:
    wsboard rejected
    wsboard rejected --json")]
    Rejected,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    wsboard completions bash > ~/.bash_completion.d/wsboard
    wsboard completions zsh > ~/.zfunc/_wsboard
    wsboard completions fish > ~/.config/fish/completions/wsboard.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    wsboard init")]
    Init,
}

#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Workspace slug, fetched from the configured API
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub slug: Option<String>,

    /// Read the workspace from a JSON file instead of the API
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Show every project, fetching the full list
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Args, Clone)]
pub struct RejectArgs {
    /// Slug of the invited project
    pub slug: String,

    /// Workspace to show again after the rejection, fetched from the configured API
    #[arg(long, short, conflicts_with = "file")]
    pub workspace: Option<String>,

    /// Workspace JSON file to show again after the rejection
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Layout of the printed project list.
#[derive(Args, Clone, Default)]
pub struct ViewArgs {
    /// Number of projects to show (clamped to 3..=12)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Which list fills the display first
    #[arg(long, value_enum)]
    pub fill_order: Option<FillOrder>,
}
