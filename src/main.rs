//! ReelRotor - rotating reels and page behaviours for static video sites
//!
//! # Usage
//!
//! ```bash
//! # Rotate the display slots once (what the page does on load)
//! reelrotor
//!
//! # Scriptable commands
//! reelrotor rotate --manifest videos.json --previous A,B,C
//! reelrotor lang toggle --json
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

use reelrotor::cli::{Cli, Command, ExitCode, Output, RotateCmd};
use reelrotor::commands;
use reelrotor::config::Config;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    run_cli(cli).await.into()
}

/// Log to stderr so stdout stays parseable
fn init_logging(quiet: bool) {
    let default = if quiet { "reelrotor=error" } else { "reelrotor=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    match cli.command {
        Some(Command::Rotate(cmd)) => commands::rotate_cmd(cmd, &config, &output).await,

        Some(Command::Embed(cmd)) => commands::embed_cmd(cmd, &config, &output),

        Some(Command::Lang(cmd)) => commands::lang_cmd(cmd, &config, &output),

        Some(Command::Navbar(cmd)) => commands::navbar_cmd(cmd, &config, &output),

        Some(Command::Player(cmd)) => commands::player_cmd(cmd, &output),

        // Bare invocation behaves like a page load: one rotation
        None => {
            let cmd = RotateCmd {
                rounds: 1,
                ..Default::default()
            };
            commands::rotate_cmd(cmd, &config, &output).await
        }
    }
}
