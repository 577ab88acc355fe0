use std::process::ExitCode;

use clap::Parser;

use bmp2ascii::cli::{handle_config_action, Args, Command};
use bmp2ascii::config::Config;
use bmp2ascii::pipeline;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    if let Some(Command::Config { action }) = &args.command {
        handle_config_action(action.clone(), args.config.as_deref());
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;
    let options = pipeline::resolve_options(args.input, args.width, args.output, config)?;
    pipeline::convert(&options)?;
    Ok(())
}
