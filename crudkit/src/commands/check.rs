use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};

use super::{OptionFlags, default_config, load_request};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the request file, TOML or JSON (defaults to ./crudkit.toml)
    #[arg(short, long, default_value_os_t = default_config())]
    pub config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[command(flatten)]
    pub options: OptionFlags,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let request = load_request(&self.config);
        let options = self.options.apply(&request);
        let report = ops::check(&request, options, &self.config)?;

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => {
                let json =
                    serde_json::to_string_pretty(&report).wrap_err("failed to serialize report")?;
                println!("{}", json);
            }
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
