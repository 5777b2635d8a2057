//! Runtime collaborators invoked after composition
//!
//! Package-manager detection plus the two best-effort shell-out steps: git
//! initialization and dependency installation. Failures here never roll back
//! a completed composition; the caller reports them as warnings.

pub mod check;
pub mod git;
pub mod install;

pub use check::{detect_package_manager, PackageManager};
pub use git::init_repository;
pub use install::install_dependencies;
