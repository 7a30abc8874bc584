use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use workboard::{
    DashboardState, JsonWorkspace, SampleWorkspace, ViewMode, WorkspaceProvider,
    core::{dangling_references, load_dataset},
    render_view,
};

#[derive(Parser)]
#[command(name = "workboard")]
#[command(about = "Browse a workspace of projects, tasks and members")]
struct Cli {
    /// Read the workspace from a JSON file instead of the built-in sample
    #[arg(long, value_name = "FILE", global = true)]
    data: Option<PathBuf>,

    /// Reject datasets with duplicate ids or dangling references
    #[arg(long, global = true)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a view of the dashboard as text
    Show {
        /// Which view to render
        #[arg(long, value_enum, default_value_t = ViewMode::Projects)]
        view: ViewMode,
        /// Select this project id instead of the first one
        #[arg(long, value_name = "ID")]
        project: Option<String>,
    },
    /// Report duplicate ids and dangling references
    Check,
    /// Write the dataset as JSON to stdout
    Dump,
    /// Open the dashboard window
    #[cfg(feature = "gui")]
    Gui,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn provider(data: Option<PathBuf>) -> Box<dyn WorkspaceProvider> {
    match data {
        Some(path) => Box::new(JsonWorkspace::new(path)),
        None => Box::new(SampleWorkspace),
    }
}

fn show(
    provider: &dyn WorkspaceProvider,
    strict: bool,
    view: ViewMode,
    project: Option<String>,
) -> anyhow::Result<()> {
    let mut state = DashboardState::from_provider(provider, strict)?;
    if let Some(id) = project {
        let selected = state
            .dataset()
            .workspace
            .projects
            .iter()
            .find(|candidate| candidate.id.as_str() == id)
            .cloned()
            .with_context(|| format!("No project with id {}", id))?;
        state.select_project(selected);
    }
    state.set_view_mode(view);
    print!("{}", render_view(&state));
    Ok(())
}

fn check(provider: &dyn WorkspaceProvider) -> anyhow::Result<()> {
    let dataset = provider.load()?;
    let issues = dangling_references(&dataset);
    if issues.is_empty() {
        println!("{}: no issues", provider.describe());
        return Ok(());
    }
    println!("{}: {} issue(s)", provider.describe(), issues.len());
    for issue in &issues {
        println!("  {}", issue);
    }
    Err(anyhow::anyhow!("Dataset has reference issues"))
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let provider = provider(args.data);

    #[cfg(feature = "gui")]
    let command = args.command.unwrap_or(Commands::Gui);
    #[cfg(not(feature = "gui"))]
    let command = args.command.unwrap_or(Commands::Show {
        view: ViewMode::Projects,
        project: None,
    });

    match command {
        Commands::Show { view, project } => show(provider.as_ref(), args.strict, view, project),
        Commands::Check => check(provider.as_ref()),
        Commands::Dump => {
            let dataset = load_dataset(provider.as_ref(), args.strict)?;
            println!("{}", serde_json::to_string_pretty(&dataset)?);
            Ok(())
        }
        #[cfg(feature = "gui")]
        Commands::Gui => {
            let state = DashboardState::from_provider(provider.as_ref(), args.strict)?;
            workboard::gui::run(state).map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
        }
    }
}
