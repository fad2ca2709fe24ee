use kubegen_cli::cli::commands::{CliArgs, Commands};
use kubegen_cli::cli::handlers::{handle_config, handle_resolve};
use kubegen_cli::logging::{init_logging, select_level};
use kubegen_cli::{NAME, VERSION};

use clap::Parser;
use std::process;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    init_logging(
        select_level(args.log_level.as_deref(), args.verbose, args.quiet),
        args.log_json,
    );

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Resolve(resolve_args) => handle_resolve(resolve_args),
        Commands::Config(config_args) => handle_config(config_args),
    };

    process::exit(exit_code);
}
