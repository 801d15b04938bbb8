use clap::Parser;
use color_eyre::Result;

use common::config::Config;
use common::{debug, run};
use shaders::Shaders;

mod shaders;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::parse();
    debug::set_up_logging(config.log_level)?;

    run::run::<Shaders>(config)
}
