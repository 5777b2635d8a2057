//! README synthesis
//!
//! The README is built from a fixed quick-start block followed by database
//! and authentication sections chosen by lookup on the respective options.

use crate::options::{Auth, Database, TemplateOptions};

const QUICK_START: &str = "\
# Honolulu

The turbocharged monorepo starter acting as a single unit.
Built with Bun, Hono, React, and Vite.

## Quick Start

```bash
bun install
bun dev
```

The API serves on http://localhost:3000 and the web app on
http://localhost:5173.
";

fn database_setup(database: Database) -> &'static str {
    match database {
        Database::Postgresql => {
            "\
This project uses PostgreSQL through Drizzle ORM.

1. Create a local database: `createdb honolulu`
2. Adjust `DATABASE_URL` in `.env` if your setup differs.
3. Push the schema: `bun run db:push`
"
        }
        Database::Mysql => {
            "\
This project uses MySQL through Drizzle ORM.

1. Create a local database: `mysql -u root -e \"CREATE DATABASE honolulu\"`
2. Set the credentials in `DATABASE_URL` in `.env`.
3. Push the schema: `bun run db:push`
"
        }
        Database::Sqlite => {
            "\
This project uses SQLite through Drizzle ORM. No server is required; the
database lives in `local.db` next to the API.

1. Push the schema: `bun run db:push`
"
        }
        Database::Supabase => {
            "\
This project uses Supabase (hosted PostgreSQL with Auth and Realtime).

1. Create a project at https://supabase.com
2. Copy the project URL, anon key, and database password into `.env`.
3. Push the schema: `bun run db:push`
"
        }
    }
}

fn auth_setup(auth: Auth) -> &'static str {
    match auth {
        Auth::None => "No authentication configured.\n",
        Auth::Supabase => {
            "\
Supabase Auth is enabled. Configure sign-in providers in your Supabase
dashboard, then fill `SUPABASE_URL` and `SUPABASE_ANON_KEY` in `.env`.
"
        }
        Auth::Clerk => {
            "\
Clerk handles sign-in and session management.

1. Create an application at https://dashboard.clerk.com
2. Copy the publishable and secret keys into `.env`.
"
        }
        Auth::Authjs => {
            "\
Auth.js handles authentication.

1. Generate a secret: `openssl rand -base64 32`
2. Set `NEXTAUTH_SECRET` in `.env`; adjust `NEXTAUTH_URL` for deployment.
"
        }
    }
}

/// Render the README for the given options.
pub fn render_readme(options: &TemplateOptions) -> String {
    format!(
        "{}\n## Database Setup\n\n{}\n## Authentication\n\n{}",
        QUICK_START,
        database_setup(options.database),
        auth_setup(options.auth)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_always_carries_quick_start() {
        let readme = render_readme(&TemplateOptions::default());
        assert!(readme.starts_with("# Honolulu"));
        assert!(readme.contains("bun install"));
        assert!(readme.contains("## Database Setup"));
        assert!(readme.contains("## Authentication"));
    }

    #[test]
    fn test_database_section_follows_selection() {
        for (database, marker) in [
            (Database::Postgresql, "createdb honolulu"),
            (Database::Mysql, "CREATE DATABASE honolulu"),
            (Database::Sqlite, "local.db"),
            (Database::Supabase, "https://supabase.com"),
        ] {
            let auth = if database == Database::Supabase {
                Auth::Supabase
            } else {
                Auth::None
            };
            let readme = render_readme(&TemplateOptions {
                database,
                auth,
                ..TemplateOptions::default()
            });
            assert!(readme.contains(marker), "missing {marker:?} for {database}");
        }
    }

    #[test]
    fn test_no_auth_defaults_to_fixed_sentence() {
        let readme = render_readme(&TemplateOptions::default());
        assert!(readme.contains("No authentication configured."));
    }
}
