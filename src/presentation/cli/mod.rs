pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process::exit;
use std::sync::Arc;

use crate::infrastructure::filesystem::ConfigStore;
use commands::{get::GetCommand, list::ListCommand, root::RootCommand};

/// Output format options for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One repository per line (default)
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// vcs-get - clone and update repositories of any VCS into a fixed layout
#[derive(Parser, Debug)]
#[command(name = "vcs-get")]
#[command(about = "Clone and update repositories under <root>/<host>/<path>")]
#[command(version, long_version = long_version())]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clone a repository, or update it if it is already cloned
    Get {
        /// URL, `owner/repo`, `host/owner/repo` or a `./` or `../` path
        #[arg(required = true)]
        references: Vec<String>,

        /// Update the working copy if it already exists
        #[arg(short, long)]
        update: bool,

        /// Clone over SSH as `ssh://git@host/path`
        #[arg(short, long)]
        private: bool,

        /// Fetch as little history as the VCS allows
        #[arg(long)]
        shallow: bool,

        /// Branch to check out
        #[arg(short, long)]
        branch: Option<String>,

        /// VCS to use for new clones (git, svn, git-svn, hg, darcs, bzr, fossil)
        #[arg(long)]
        vcs: Option<String>,

        /// Suppress the VCS tools' output
        #[arg(short, long)]
        silent: bool,

        /// Get several repositories concurrently
        #[arg(short = 'P', long)]
        parallel: bool,

        /// Maximum number of concurrent operations with --parallel
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// List working copies under the roots
    List {
        /// Only show repositories whose path contains this text
        query: Option<String>,

        /// Match the query against the name, owner/name or full relative path
        #[arg(short, long)]
        exact: bool,

        /// Print absolute paths
        #[arg(short = 'p', long)]
        full_path: bool,

        /// Only show working copies of this VCS
        #[arg(long)]
        vcs: Option<String>,

        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the primary root
    Root {
        /// Show every configured root
        #[arg(long)]
        all: bool,
    },
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\ncommit: ",
        env!("VCS_GET_GIT_HASH"),
        "\nbuilt: ",
        env!("VCS_GET_BUILD_DATE"),
        "\ntarget: ",
        env!("VCS_GET_BUILD_TARGET"),
    )
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub async fn run(self) -> anyhow::Result<()> {
        colored::control::set_override(!self.cli.no_color);

        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> anyhow::Result<()> {
        let config = ConfigStore::from_env()?.load()?;

        match &self.cli.command {
            Commands::Get {
                references,
                update,
                private,
                shallow,
                branch,
                vcs,
                silent,
                parallel,
                jobs,
            } => {
                let command = GetCommand {
                    references: references.clone(),
                    update: *update,
                    private: *private,
                    shallow: *shallow,
                    branch: branch.clone(),
                    vcs: vcs.clone(),
                    silent: *silent,
                    parallel: *parallel,
                    jobs: *jobs,
                };
                command.execute(Arc::new(config)).await
            }
            Commands::List {
                query,
                exact,
                full_path,
                vcs,
                output,
            } => {
                let command = ListCommand {
                    query: query.clone(),
                    exact: *exact,
                    full_path: *full_path,
                    vcs: vcs.clone(),
                    output: *output,
                };
                command.execute(&config)
            }
            Commands::Root { all } => RootCommand::new(*all).execute(&config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get() {
        let cli = Cli::parse_from([
            "vcs-get", "get", "-u", "-p", "--shallow", "-b", "hello", "-P", "-j", "4",
            "motemen/ghq", "x/y",
        ]);
        match cli.command {
            Commands::Get {
                references,
                update,
                private,
                shallow,
                branch,
                parallel,
                jobs,
                ..
            } => {
                assert_eq!(references, vec!["motemen/ghq", "x/y"]);
                assert!(update && private && shallow && parallel);
                assert_eq!(branch.as_deref(), Some("hello"));
                assert_eq!(jobs, Some(4));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from(["vcs-get", "list", "-e", "-p", "-o", "json", "ghq"]);
        match cli.command {
            Commands::List {
                query,
                exact,
                full_path,
                output,
                ..
            } => {
                assert_eq!(query.as_deref(), Some("ghq"));
                assert!(exact && full_path);
                assert_eq!(output, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
