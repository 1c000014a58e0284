use clap::{Parser, Subcommand};

use self::{bin_n::BinNArg, bin_x::BinXArg};

mod bin_n;
mod bin_x;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Bin samples around fixed bin centers
    BinX(#[clap(flatten)] BinXArg),
    /// Bin samples into windows with an equal number of samples
    BinN(#[clap(flatten)] BinNArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::BinX(arg) => bin_x::run(&arg)?,
        Mode::BinN(arg) => bin_n::run(&arg)?,
    }
    Ok(())
}
