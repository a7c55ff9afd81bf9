//! Command-line interface definition using clap.

use clap::Parser;
use std::path::PathBuf;

/// Browse a GitHub account's repositories and clone one into the current directory
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ghcloner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub username to browse (default: `git config user.name`)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Built-in theme (bubblegum, catppuccin-mocha)
    #[arg(long, env = "GHCLONER_THEME")]
    pub theme: Option<String>,

    /// Path to a custom TOML theme; takes precedence over --theme
    #[arg(long, env = "GHCLONER_THEME_FILE")]
    pub theme_file: Option<PathBuf>,

    /// Log level directive (trace, debug, info, warn, error); RUST_LOG wins
    #[arg(long, env = "GHCLONER_TRACE_LEVEL")]
    pub trace_level: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = crate::remote::DEFAULT_API_URL)]
    pub api_url: String,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "ghcloner",
            "-u",
            "alice",
            "--theme",
            "catppuccin-mocha",
            "--api-url",
            "http://localhost:8080/api/v3",
        ])
        .unwrap();

        assert_eq!(cli.user.as_deref(), Some("alice"));
        assert_eq!(cli.theme.as_deref(), Some("catppuccin-mocha"));
        assert_eq!(cli.api_url, "http://localhost:8080/api/v3");
    }
}
