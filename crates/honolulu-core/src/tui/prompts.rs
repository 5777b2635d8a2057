//! Charm-style CLI prompts using cliclack

use crate::compose::{compose, ComposeReport};
use crate::options::{
    validate_project_name, ApiStyle, Architecture, Auth, Database, Style, TemplateOptions,
};
use crate::runtime::{detect_package_manager, git, install};
use crate::template;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name or path; prompted when absent
    pub name: Option<String>,

    /// Local directory to use instead of the bundled template
    pub template_dir: Option<PathBuf>,

    pub database: Option<Database>,
    pub auth: Option<Auth>,
    pub api_style: Option<ApiStyle>,
    pub architecture: Option<Architecture>,
    pub style: Option<Style>,

    /// Skip git initialization
    pub no_git: bool,

    /// Skip dependency installation
    pub no_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("🌺 create-honolulu v{}", cli_version))?;
    cliclack::log::info(
        "The turbocharged monorepo starter acting as a single unit.\nBuilt with Bun, Hono, React, and Vite.",
    )?;

    // Step 1: Resolve the template source tree
    let template_root = match &args.template_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local template from {}", path.display()))?;
            path.clone()
        }
        None => template::resolve_template_root()?,
    };

    // Step 2: Project name and target directory
    let name = select_project_name(&args)?;
    let target_dir = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(&name);
    confirm_existing_directory(&target_dir, &args)?;

    // Step 3: Collect the option record
    let options = select_options(&args)?;

    // Step 4: Feature confirms
    let init_git = !args.no_git && confirm_feature(&args, "Initialize a new git repository?")?;
    let run_install = !args.no_install && confirm_feature(&args, "Install dependencies?")?;

    // Step 5: Scaffold
    let spinner = cliclack::spinner();
    spinner.start("🌺 Planting seeds...");
    let report: ComposeReport = match compose(&template_root, &target_dir, &options).await {
        Ok(report) => {
            spinner.stop(format!("🌱 Project scaffolded ({} files)", report.copied_files));
            report
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            return Err(e);
        }
    };
    if !report.skipped.is_empty() {
        cliclack::log::warning(format!(
            "Skipped optional files: {}",
            report.skipped.join(", ")
        ))?;
    }

    // Step 6: Git (best effort)
    if init_git {
        let spinner = cliclack::spinner();
        spinner.start("📦 Initializing git...");
        match git::init_repository(&target_dir).await {
            Ok(()) => spinner.stop("📦 Git initialized"),
            Err(_) => {
                spinner.stop("Failed to initialize git");
                cliclack::log::warning(
                    "You can initialize git manually later with: git init",
                )?;
            }
        }
    }

    // Step 7: Install (best effort)
    let mut installed = false;
    if run_install {
        let manager = detect_package_manager();
        let spinner = cliclack::spinner();
        spinner.start(format!("🍹 Installing dependencies with {}...", manager));
        match install::install_dependencies(&target_dir, manager).await {
            Ok(()) => {
                spinner.stop("🍹 Dependencies installed");
                installed = true;
            }
            Err(_) => {
                spinner.stop("Failed to install dependencies");
                cliclack::log::warning(format!("Try running: {}", manager.install_command()))?;
            }
        }
    }

    // Step 8: Next steps
    print_next_steps(&name, installed, &options);
    cliclack::outro("🏝️  Welcome to Honolulu!".green().to_string())?;

    Ok(())
}

/// Whether an error came from the user cancelling a prompt (Esc or Ctrl-C
/// inside cliclack), which surfaces as an interrupted I/O error.
pub fn is_cancelled(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::Interrupted)
}

fn select_project_name(args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.name {
        validate_project_name(name)?;
        cliclack::log::info(format!("Project: {}", name))?;
        return Ok(name.clone());
    }

    if args.yes {
        return Ok("my-honolulu-app".to_string());
    }

    let name: String = cliclack::input("Where should we create your project?")
        .placeholder("./my-honolulu-app")
        .default_input("my-honolulu-app")
        .validate(|input: &String| validate_project_name(input).map_err(|e| e.to_string()))
        .interact()?;
    Ok(name)
}

fn confirm_existing_directory(target_dir: &std::path::Path, args: &CreateArgs) -> Result<()> {
    if target_dir.is_dir() {
        if let Ok(entries) = std::fs::read_dir(target_dir) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!(
                    "Directory has {} existing items; scaffolding is one-shot and will overwrite files",
                    count
                ))?;
                let proceed = args.yes
                    || cliclack::confirm("Continue anyway?")
                        .initial_value(true)
                        .interact()?;
                if !proceed {
                    // Declining is a cancellation, same shape cliclack uses
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::Interrupted,
                        "Operation cancelled.",
                    )
                    .into());
                }
            }
        }
    }
    Ok(())
}

fn select_options(args: &CreateArgs) -> Result<TemplateOptions> {
    let defaults = TemplateOptions::default();

    let architecture = match args.architecture {
        Some(architecture) => architecture,
        None if args.yes => defaults.architecture,
        None => cliclack::select("Select architecture")
            .item(
                Architecture::Opinionated,
                "Opinionated",
                "service layer and example CRUD routes included",
            )
            .item(
                Architecture::Unopinionated,
                "Unopinionated",
                "bare Hono + React, no examples",
            )
            .initial_value(defaults.architecture)
            .interact()?,
    };

    let style = match args.style {
        Some(style) => style,
        None if args.yes => defaults.style,
        None => cliclack::select("Select styling")
            .item(Style::Tailwind, "Tailwind CSS", "utility-first CSS framework")
            .item(Style::Shadcn, "Shadcn UI", "components on Radix UI and Tailwind")
            .item(Style::Classic, "Classic CSS", "plain CSS, no framework")
            .initial_value(defaults.style)
            .interact()?,
    };

    let database = match args.database {
        Some(database) => database,
        None if args.yes => defaults.database,
        None => cliclack::select("Choose your database")
            .item(
                Database::Postgresql,
                "PostgreSQL",
                "recommended for production",
            )
            .item(Database::Mysql, "MySQL", "popular open-source database")
            .item(Database::Sqlite, "SQLite", "great for prototyping")
            .item(
                Database::Supabase,
                "Supabase",
                "PostgreSQL + Auth + Realtime",
            )
            .initial_value(defaults.database)
            .interact()?,
    };

    // Supabase ships its own auth; the selection is implied, never prompted
    let auth = match args.auth {
        Some(auth) => auth,
        None if database == Database::Supabase => {
            cliclack::log::info("Supabase includes built-in auth")?;
            Auth::Supabase
        }
        None if args.yes => defaults.auth,
        None => cliclack::select("Add authentication?")
            .item(Auth::None, "None", "no authentication")
            .item(Auth::Supabase, "Supabase Auth", "authentication only")
            .item(Auth::Clerk, "Clerk", "modern auth platform")
            .item(Auth::Authjs, "Auth.js / NextAuth", "flexible auth library")
            .initial_value(defaults.auth)
            .interact()?,
    };

    let api_style = match args.api_style {
        Some(api_style) => api_style,
        None if args.yes => defaults.api_style,
        None => cliclack::select("Select API style")
            .item(ApiStyle::Basic, "Basic", "simple, fast, standard Hono setup")
            .item(
                ApiStyle::Openapi,
                "OpenAPI",
                "generated spec and Scalar reference UI",
            )
            .initial_value(defaults.api_style)
            .interact()?,
    };

    Ok(TemplateOptions {
        database,
        auth,
        api_style,
        architecture,
        style,
    })
}

fn confirm_feature(args: &CreateArgs, prompt: &str) -> Result<bool> {
    if args.yes {
        return Ok(true);
    }
    Ok(cliclack::confirm(prompt).initial_value(true).interact()?)
}

fn print_next_steps(name: &str, installed: bool, options: &TemplateOptions) {
    let mut steps = vec![format!("cd {}", name)];
    if !installed {
        steps.push("bun install".to_string());
    }
    steps.push("bun dev".to_string());

    println!();
    println!("  Next steps");
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.as_str().cyan());
    }

    if options.database == Database::Supabase || options.auth == Auth::Supabase {
        println!();
        println!(
            "  {}",
            "ℹ️  Supabase selected: Check .env.local.example to configure your credentials."
                .cyan()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cancelled_matches_interrupted_io() {
        let err = anyhow::Error::from(std::io::Error::new(
            std::io::ErrorKind::Interrupted,
            "Operation cancelled",
        ));
        assert!(is_cancelled(&err));
    }

    #[test]
    fn test_is_cancelled_ignores_other_errors() {
        let io = anyhow::Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing template",
        ));
        assert!(!is_cancelled(&io));
        assert!(!is_cancelled(&anyhow::anyhow!("Operation cancelled.")));
    }
}
