mod commands;
mod terminal;

use commands::{CommandLine, Commands, defaults, derive, validate};
use kubenet_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        bind_address: commands.bind_address,
    };

    match commands.command {
        Commands::Defaults => defaults::defaults(),
        Commands::Validate { file } => validate::validate(&file, &cfg),
        Commands::Derive { file } => derive::derive(&file, &cfg),
    }
}
