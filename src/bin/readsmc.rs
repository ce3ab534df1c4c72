//! `readsmc <KeyName> <Length>`: print the raw bytes of one SMC key

use std::{io, process::ExitCode};

use smc_reader::{cli, smc::PlatformLocator};

fn main() -> ExitCode {
    cli::init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ExitCode::from(cli::run(std::env::args_os(), PlatformLocator, &mut out))
}
