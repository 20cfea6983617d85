mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, generate};
use macgen_common::config::Config;
use macgen_common::error::MacgenError;
use macgen_common::network::hypervisor::PrefixTable;
use tracing::error;

fn main() -> anyhow::Result<ExitCode> {
    let cfg: Config = CommandLine::parse_args().into();

    terminal::logging::init_logging()?;

    let table = PrefixTable::default();
    let mut stdin = std::io::stdin().lock();

    match generate::generate(&cfg, &table, &mut stdin) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<MacgenError>() {
            Some(err) => {
                error!("{err}");
                Ok(ExitCode::FAILURE)
            }
            None => Err(e),
        },
    }
}
