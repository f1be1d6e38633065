mod check;
mod kinds;
mod show;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use kinds::KindsCommand;
use show::ShowCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for f08gen_manifest::Result<T> {
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
#[command(name = "f08gen")]
#[command(version)]
#[command(about = "Generate MPI Fortran binding fragments from TOML signatures")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Kinds(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Show(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered parameter kinds
    Kinds(KindsCommand),

    /// Validate bindings.toml and bind every function variant
    Check(CheckCommand),

    /// Print the generated fragments of each function variant
    Show(ShowCommand),
}
