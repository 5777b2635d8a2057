//! Honolulu Core - Library for the create-honolulu scaffolding CLI
//!
//! Turns a set of enum-valued user choices into a concrete monorepo project:
//! copy the bundled template tree, strip option-inapplicable subtrees, rewrite
//! manifests and source files in place, and synthesize README/env files.
//!
//! # Architecture
//!
//! - **Composer** (`compose`) - the deterministic decision procedure from
//!   `(template_root, target_dir, options)` to an output file tree
//! - **Runtime collaborators** (`runtime`) - best-effort git init and
//!   dependency install invoked strictly after composition
//! - **TUI** (`tui`, feature-gated, default on) - the cliclack prompt flow
//!   that collects a finished [`TemplateOptions`] record and drives the rest
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use honolulu_core::{compose, resolve_template_root, TemplateOptions};
//!
//! let template_root = resolve_template_root()?;
//! let report = compose(&template_root, Path::new("my-app"), &TemplateOptions::default()).await?;
//! println!("wrote {} files", report.copied_files);
//! ```

pub mod compose;
pub mod options;
pub mod runtime;
pub mod template;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use compose::{compose, ComposeReport};
pub use options::{
    validate_project_name, ApiStyle, Architecture, Auth, Database, OptionsError, Style,
    TemplateOptions,
};
pub use runtime::{detect_package_manager, init_repository, install_dependencies, PackageManager};
pub use template::{resolve_template_root, TEMPLATE_DIR_ENV};

#[cfg(feature = "tui")]
pub use tui::{is_cancelled, run, CreateArgs};
