use artsearch::cli::Cli;
use artsearch::config::{CredentialStatus, API_KEY_ENV_VAR};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    artsearch::logging::init_tracing();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let api_key = match config.api.resolve_credential(cli.api_key.as_deref()) {
        CredentialStatus::Configured { key, source } => {
            tracing::info!(?source, "API key resolved");
            key
        }
        CredentialStatus::Unconfigured => {
            eprintln!(
                "Error: No API key configured. Pass --api-key, set {}, or add api.api_key to {}",
                API_KEY_ENV_VAR,
                cli.config_path().display()
            );
            std::process::exit(1);
        }
    };

    artsearch::ui::run(config, api_key, cli.query)
}
