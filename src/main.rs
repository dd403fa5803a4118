//! MicMemo CLI entry point

use std::process::ExitCode;

use clap::Parser;

use mic_memo::cli::{
    app::{load_merged_config, run, RunOptions, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use mic_memo::domain::config::AppConfig;
use mic_memo::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        output: cli.output,
        sample_rate: cli.sample_rate,
        channels: cli.channels,
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = RunOptions {
        output: config.output_or_default(),
        settings: config.settings_or_default(),
    };

    run(options).await
}
