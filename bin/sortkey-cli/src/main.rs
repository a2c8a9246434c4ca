#![deny(deprecated)]

extern crate tracing as log;

pub mod cli;
pub mod commands;
pub mod logging;

use cli::CliOptions;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = CliOptions::parse()?;

    logging::init(args.verbose)?;
    log::debug!("Arguments: {:?}", args);

    commands::run(args.command, std::io::stdin().lock(), std::io::stdout().lock())
}

pub mod built {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
