use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use f08gen_manifest::BindingsToml;
use f08gen_types::KindRegistry;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to bindings.toml (defaults to ./bindings.toml)
    #[arg(short, long, default_value = "bindings.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let bindings = BindingsToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(bindings.manifest(), &KindRegistry::builtin(), &self.config);

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
