use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::Result;
use f08gen_core::Mode;
use f08gen_manifest::BindingsToml;
use f08gen_types::KindRegistry;

use super::UnwrapOrExit;
use crate::{
    ops::{self, Selection},
    reports::{Report, TerminalOutput},
};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ShowCommand {
    /// Path to bindings.toml (defaults to ./bindings.toml)
    #[arg(short, long, default_value = "bindings.toml")]
    pub config: PathBuf,

    /// Only show this function
    #[arg(short, long)]
    pub function: Option<String>,

    /// Show the big-count variant only
    #[arg(long)]
    pub bigcount: bool,

    /// Override the manifest's interface mode (modern or legacy)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl ShowCommand {
    pub fn run(&self) -> Result<()> {
        let bindings = BindingsToml::open(&self.config).unwrap_or_exit();
        let selection = Selection {
            function: self.function.clone(),
            bigcount: self.bigcount,
            mode: self.mode,
        };
        let report = ops::show(bindings.manifest(), &KindRegistry::builtin(), &selection)?;

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => println!("{}", report.to_json()?),
        }
        Ok(())
    }
}
