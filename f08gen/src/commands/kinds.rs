use clap::Args;
use eyre::Result;
use f08gen_types::KindRegistry;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct KindsCommand {}

impl KindsCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::kinds(&KindRegistry::builtin());
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
