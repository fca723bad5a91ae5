use clap::Parser;
use log::debug;
use stegatool_core::{CodecOptions, StegaError};

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, StegaError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = CodecOptions::default().with_window_size(args.window_size);
    debug!("Running {:?} with {options:?}", args.command);

    match args.command {
        Commands::Createwm(cmd) => cmd.run(options),
        Commands::Verifywm(cmd) => cmd.run(options),
        Commands::ExtractRaw(cmd) => cmd.run(options),
    }
}
