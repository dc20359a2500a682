//! Currency Converter CLI
//!
//! Command-line front-end for the conversion controller:
//! - Load configuration from environment
//! - Build the HTTP rate provider
//! - Drive a controller once (`convert`) or from stdin (`interactive`)

mod commands;
mod config;
mod presenter;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use converter_client::ExchangeRateClient;
use converter_hex::{ConversionController, Input};
use converter_types::{CurrencyCode, Slot, Status};

use commands::{Command, HELP, parse_command, parse_currency};
use presenter::TerminalPresenter;

#[derive(Parser)]
#[command(name = "currency-converter")]
#[command(author, version, about = "Currency converter backed by a public exchange-rate API", long_about = None)]
struct Cli {
    /// Base URL of the exchange-rate API
    #[arg(long, env = "RATES_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the currencies on offer with their country code
    Currencies,
    /// Convert an amount once and exit
    Convert {
        /// Currency to convert from (defaults to CONVERTER_DEFAULT_FROM)
        #[arg(long)]
        from: Option<String>,
        /// Currency to convert to (defaults to CONVERTER_DEFAULT_TO)
        #[arg(long)]
        to: Option<String>,
        /// Amount to convert
        amount: String,
    },
    /// Read commands from stdin, one per line
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    tracing::debug!(api_url = %config.api_url, "configuration loaded");

    match cli.command {
        Commands::Currencies => {
            for code in CurrencyCode::all() {
                println!("{}  {}", code, code.country_code());
            }
        }

        Commands::Convert { from, to, amount } => {
            let provider = Arc::new(ExchangeRateClient::with_timeout(
                &config.api_url,
                config.request_timeout,
            )?);
            let mut controller = ConversionController::new(
                provider,
                TerminalPresenter::quiet(),
                config.controller_settings(),
            );
            controller.initialize();
            if let Some(from) = from {
                controller.set_currency(Slot::Source, parse_currency(&from)?);
            }
            if let Some(to) = to {
                controller.set_currency(Slot::Target, parse_currency(&to)?);
            }
            controller.set_amount(amount);
            controller.request_conversion()?;

            match controller.settle().await {
                Some(Ok(result)) => println!("{}", result),
                Some(Err(err)) => {
                    eprintln!("{}", Status::Failed);
                    return Err(err.into());
                }
                None => anyhow::bail!("conversion did not complete"),
            }
        }

        Commands::Interactive => {
            let provider = Arc::new(ExchangeRateClient::with_timeout(
                &config.api_url,
                config.request_timeout,
            )?);
            let mut controller = ConversionController::new(
                provider,
                TerminalPresenter::stdout(),
                config.controller_settings(),
            );
            controller.initialize();
            println!("{}", HELP);

            let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
            let reader = tokio::spawn(read_commands(tx));
            let controller = controller.run(rx).await;
            reader.await??;

            tracing::debug!(status = %controller.status(), "session closed");
        }
    }

    Ok(())
}

/// Forwards stdin commands to the controller until `quit` or end of input.
async fn read_commands(inputs: UnboundedSender<Input>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Command::Input(input)) => {
                if inputs.send(input).is_err() {
                    break;
                }
            }
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => {}
            Err(err) => eprintln!("{}", err),
        }
    }
    Ok(())
}
