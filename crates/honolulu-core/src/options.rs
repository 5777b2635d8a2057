//! User-selected project options and their validation

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target datastore family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Postgresql,
    Mysql,
    Sqlite,
    Supabase,
}

impl Database {
    pub fn display_name(&self) -> &'static str {
        match self {
            Database::Postgresql => "PostgreSQL",
            Database::Mysql => "MySQL",
            Database::Sqlite => "SQLite",
            Database::Supabase => "Supabase",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Authentication provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Auth {
    None,
    Supabase,
    Clerk,
    Authjs,
}

impl Auth {
    pub fn display_name(&self) -> &'static str {
        match self {
            Auth::None => "None",
            Auth::Supabase => "Supabase Auth",
            Auth::Clerk => "Clerk",
            Auth::Authjs => "Auth.js",
        }
    }
}

impl fmt::Display for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Whether OpenAPI documentation routes are added to the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ApiStyle {
    Basic,
    Openapi,
}

/// Whether example routes/services/components are kept or stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    Opinionated,
    Unopinionated,
}

/// CSS approach for the web app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Tailwind,
    Shadcn,
    Classic,
}

/// Validation errors surfaced before composition begins
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Supabase database includes Supabase auth; auth cannot be {0}")]
    SupabaseAuthRequired(Auth),

    #[error("Please enter a path.")]
    EmptyProjectName,

    #[error("Name to only contain lowercase letters, numbers, and hyphens")]
    InvalidProjectName,
}

/// Finalized option record handed to the composer.
///
/// Every field is mandatory; defaults are resolved by the prompt layer
/// before composition starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateOptions {
    pub database: Database,
    pub auth: Auth,
    pub api_style: ApiStyle,
    pub architecture: Architecture,
    pub style: Style,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            database: Database::Postgresql,
            auth: Auth::None,
            api_style: ApiStyle::Openapi,
            architecture: Architecture::Opinionated,
            style: Style::Tailwind,
        }
    }
}

impl TemplateOptions {
    /// Re-check the invariant the prompt layer is supposed to enforce:
    /// choosing the Supabase database implies Supabase auth.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.database == Database::Supabase && self.auth != Auth::Supabase {
            return Err(OptionsError::SupabaseAuthRequired(self.auth));
        }
        Ok(())
    }
}

/// Validate a project name/path entered by the user.
///
/// Paths starting with `.` are taken as-is; plain names must be
/// lowercase letters, digits, and hyphens only.
pub fn validate_project_name(name: &str) -> Result<(), OptionsError> {
    if name.is_empty() {
        return Err(OptionsError::EmptyProjectName);
    }
    if !name.starts_with('.')
        && !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(OptionsError::InvalidProjectName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supabase_database_forces_supabase_auth() {
        let options = TemplateOptions {
            database: Database::Supabase,
            auth: Auth::Clerk,
            ..TemplateOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(OptionsError::SupabaseAuthRequired(Auth::Clerk))
        );

        let options = TemplateOptions {
            database: Database::Supabase,
            auth: Auth::Supabase,
            ..TemplateOptions::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_non_supabase_database_allows_any_auth() {
        for auth in [Auth::None, Auth::Supabase, Auth::Clerk, Auth::Authjs] {
            let options = TemplateOptions {
                auth,
                ..TemplateOptions::default()
            };
            assert!(options.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_project_name() {
        assert!(validate_project_name("my-honolulu-app").is_ok());
        assert!(validate_project_name("app2").is_ok());
        assert!(validate_project_name("./relative/path").is_ok());

        assert_eq!(
            validate_project_name(""),
            Err(OptionsError::EmptyProjectName)
        );
        assert_eq!(
            validate_project_name("My App"),
            Err(OptionsError::InvalidProjectName)
        );
        assert_eq!(
            validate_project_name("CAPS"),
            Err(OptionsError::InvalidProjectName)
        );
    }
}
