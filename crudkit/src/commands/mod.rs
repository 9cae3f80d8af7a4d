mod check;
mod completions;
mod generate;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use crudkit_manifest::{GenerationOptions, GenerationRequest, PersistenceApi};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on request errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crudkit_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "crudkit")]
#[command(version)]
#[command(about = "Scaffold CRUD modules from entity definitions")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the module archive from crudkit.toml
    Generate(GenerateCommand),

    /// Validate crudkit.toml without generating anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Flags overriding the `[options]` table of the request.
#[derive(Args, Debug, Default)]
pub(crate) struct OptionFlags {
    /// Replace accessors and constructors with Lombok annotations
    #[arg(long)]
    pub lombok: bool,

    /// Emit Thymeleaf views and a view controller
    #[arg(long)]
    pub views: bool,

    /// Emit service and controller tests
    #[arg(long)]
    pub tests: bool,

    /// Persistence annotation namespace (legacy = javax, modern = jakarta)
    #[arg(long)]
    pub persistence: Option<PersistenceApi>,
}

impl OptionFlags {
    /// Resolve the request options, then apply the flags given on the command line.
    pub fn apply(&self, request: &GenerationRequest) -> GenerationOptions {
        let mut options = request.generation_options();
        options.lombok |= self.lombok;
        options.views |= self.views;
        options.tests |= self.tests;
        if let Some(persistence) = self.persistence {
            options.persistence = persistence;
        }
        options
    }
}

/// Read a TOML or JSON request, exiting with a rendered report on failure.
pub(crate) fn load_request(path: &Path) -> GenerationRequest {
    GenerationRequest::from_file(path).unwrap_or_exit()
}

pub(crate) fn default_config() -> PathBuf {
    PathBuf::from("crudkit.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_request() {
        let request: GenerationRequest = r#"
[options]
dependencies = ["thymeleaf"]

[[entities]]
name = "Book"
"#
        .parse()
        .unwrap();

        let flags = OptionFlags {
            tests: true,
            persistence: Some(PersistenceApi::Legacy),
            ..OptionFlags::default()
        };
        let options = flags.apply(&request);
        assert!(options.views);
        assert!(options.tests);
        assert!(!options.lombok);
        assert_eq!(options.persistence, PersistenceApi::Legacy);
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "crudkit",
            "-vv",
            "generate",
            "--lombok",
            "--persistence",
            "javax",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }
}
