//! JavaScript package-manager detection

use std::fmt;
use std::process::Command;

/// Supported package managers, in detection preference order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Bun,
    Pnpm,
    Npm,
    Yarn,
}

impl PackageManager {
    /// The binary name invoked on the shell
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Bun => "bun",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// The literal install command, suitable for showing to the user as a
    /// manual fallback. Yarn installs with the bare command.
    pub fn install_command(&self) -> String {
        match self {
            PackageManager::Yarn => "yarn".to_string(),
            other => format!("{} install", other.command()),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Check whether a package manager responds to `--version`.
pub fn check_available(manager: PackageManager) -> Option<String> {
    let output = Command::new(manager.command()).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            Some(String::from_utf8_lossy(&out.stdout).trim().to_string())
        }
        _ => None,
    }
}

/// Detect the package manager to install with, probing in preference order.
/// Falls back to bun (the template's native toolchain) when nothing responds;
/// the install step will then fail with a useful error.
pub fn detect_package_manager() -> PackageManager {
    for manager in [
        PackageManager::Bun,
        PackageManager::Pnpm,
        PackageManager::Npm,
        PackageManager::Yarn,
    ] {
        if check_available(manager).is_some() {
            return manager;
        }
    }
    PackageManager::Bun
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_commands() {
        assert_eq!(PackageManager::Bun.install_command(), "bun install");
        assert_eq!(PackageManager::Pnpm.install_command(), "pnpm install");
        assert_eq!(PackageManager::Npm.install_command(), "npm install");
        assert_eq!(PackageManager::Yarn.install_command(), "yarn");
    }

    #[test]
    fn test_detect_always_returns_something() {
        // Detection never panics, even on machines with no JS toolchain
        let manager = detect_package_manager();
        assert!(!manager.command().is_empty());
    }
}
