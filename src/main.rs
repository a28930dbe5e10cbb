use anyhow::Result;
use clap::Parser;
use log::info;
use std::process::ExitCode;
use vertica_pkginfo::cli;

fn main() -> Result<ExitCode> {
    let args = cli::Args::parse();
    cli::init_logging(args.verbose);
    info!("Starting vertica-pkginfo v{}", env!("CARGO_PKG_VERSION"));

    cli::run(&args)
}
