use clap::Parser;

use gif_ascii::cli::{self, Args, Command};
use gif_ascii::config::Config;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> cli::CommandResult {
    let config = Config::load(args.config.as_deref())?;
    let default_tier = config.render.tier();

    match args.command {
        Command::Render { file, tier, frame } => {
            cli::render(&file, tier.map(Into::into).unwrap_or(default_tier), frame)
        }
        Command::Play {
            file,
            tier,
            loops,
            no_clear,
        } => {
            if let Err(e) = cli::setup_ctrlc_handler() {
                log::warn!("Failed to install Ctrl+C handler: {}", e);
            }
            cli::play(
                &file,
                tier.map(Into::into).unwrap_or(default_tier),
                loops.unwrap_or(config.player.loops),
                config.player.clear_screen && !no_clear,
            )
        }
        Command::Info { file, tier } => {
            cli::info(&file, tier.map(Into::into).unwrap_or(default_tier))
        }
        Command::Serve { file, tier } => {
            cli::serve(&file, tier.map(Into::into).unwrap_or(default_tier))
        }
        Command::Config { action } => cli::handle_config_action(action, args.config.as_deref()),
    }
}
