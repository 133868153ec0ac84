use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use chess_arbiter::console::console_loop::run_stdio_loop;
use chess_arbiter::game_state::game_config::GameConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run_stdio_loop(config) {
        error!(%err, "console loop failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
