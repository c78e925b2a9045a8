mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod records;
mod source;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
