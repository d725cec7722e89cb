use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use portfolio::commands::serve::serve;
use portfolio_config::DEFAULT_CONFIG_PATH;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = portfolio_config::load(&cli.config).context("Failed to load config")?;

    match cli.command {
        Command::Serve => serve(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Config files to load, later files override earlier ones
    #[arg(
        short,
        long,
        global = true,
        env = "PORTFOLIO_CONFIG",
        value_delimiter = ':',
        default_value = DEFAULT_CONFIG_PATH
    )]
    config: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server that answers the contact form
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter().from_env_lossy()))
        .init();
}

/// Logs at INFO unless `RUST_LOG` says otherwise, so accepted contact
/// submissions are always visible to the operator.
fn env_filter() -> tracing_subscriber::filter::Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::INFO.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_paths() {
        let cli = Cli::parse_from(["portfolio", "--config", "a.toml:b.toml", "serve"]);
        assert_eq!(cli.config, [PathBuf::from("a.toml"), PathBuf::from("b.toml")]);
        assert!(matches!(cli.command, Command::Serve));

        let cli = Cli::parse_from(["portfolio", "check-config", "-v", "-c", "x.toml"]);
        assert_eq!(cli.config, [PathBuf::from("x.toml")]);
        assert!(matches!(cli.command, Command::CheckConfig { verbose: true }));
    }

    #[test]
    fn log_level_defaults_to_info() {
        let filter = env_filter().parse_lossy("");
        assert_eq!(
            Layer::<tracing_subscriber::Registry>::max_level_hint(&filter),
            Some(LevelFilter::INFO)
        );

        let filter = env_filter().parse_lossy("portfolio=debug");
        assert_eq!(
            Layer::<tracing_subscriber::Registry>::max_level_hint(&filter),
            Some(LevelFilter::DEBUG)
        );
    }
}
