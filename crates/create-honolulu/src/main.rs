//! create-honolulu - scaffold a Honolulu monorepo project

use anyhow::Result;
use clap::Parser;
use honolulu_core::tui::CreateArgs;
use honolulu_core::{ApiStyle, Architecture, Auth, Database, Style};
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "create-honolulu")]
#[command(about = "Scaffold a Honolulu monorepo (Bun + Hono + React + Vite)")]
#[command(version)]
pub struct Args {
    /// Project name or path (prompted interactively when omitted)
    pub name: Option<String>,

    /// Target datastore
    #[arg(long, value_enum)]
    pub database: Option<Database>,

    /// Authentication provider
    #[arg(long, value_enum)]
    pub auth: Option<Auth>,

    /// API documentation style
    #[arg(long = "api", value_enum)]
    pub api_style: Option<ApiStyle>,

    /// Keep or strip the example routes, services, and components
    #[arg(long, value_enum)]
    pub architecture: Option<Architecture>,

    /// CSS approach for the web app
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Local directory to use instead of the bundled template (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Skip git initialization
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Skip dependency installation
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            template_dir: args.template_dir,
            database: args.database,
            auth: args.auth,
            api_style: args.api_style,
            architecture: args.architecture,
            style: args.style,
            no_git: args.no_git,
            no_install: args.no_install,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = honolulu_core::run(args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    // Cancelling a prompt exits like Ctrl+C, not like a failure
    if let Err(err) = &result {
        if honolulu_core::is_cancelled(err) {
            std::process::exit(130);
        }
    }

    result
}
