use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{OptionFlags, default_config, load_request};
use crate::{
    ops::{self, Target},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the request file, TOML or JSON (defaults to ./crudkit.toml)
    #[arg(short, long, default_value_os_t = default_config())]
    pub config: PathBuf,

    /// Archive path (defaults to ./<module>.tar.gz)
    #[arg(short, long, conflicts_with_all = ["extract", "dry_run"])]
    pub output: Option<PathBuf>,

    /// Write the files into a directory instead of an archive
    #[arg(long, conflicts_with = "dry_run")]
    pub extract: Option<PathBuf>,

    /// Print the generated files without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub options: OptionFlags,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let request = load_request(&self.config);
        let options = self.options.apply(&request);

        let target = if self.dry_run {
            Target::Preview
        } else if let Some(dir) = &self.extract {
            Target::Directory(dir.clone())
        } else {
            let path = self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("{}.tar.gz", request.sanitized_module_name())));
            Target::Archive(path)
        };

        let report = ops::generate(&request, options, target)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
