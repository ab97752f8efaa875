mod check;
mod cli;
mod error;
mod orders;
mod sell;
mod sim;
mod track;

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use cli::Command;
use tokio_util::sync::CancellationToken;
use tracing::info;
use venues::{GateConfig, MexcConfig, Pair, VenueClient};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Shared cancellation token + signal handlers.
    let cancel = setup_signal_handlers();

    match cli.command {
        Command::Sell(args) => {
            let pair = parse_pair(&args.pair);
            let gate = if args.dry_run {
                // Dry runs only touch public endpoints.
                let _ = dotenvy::dotenv();
                gate_config_from_env()
            } else {
                require_gate_credentials()
            };

            let config = sell::config::SellConfig {
                pair,
                min_sell_price: args.min_sell_price,
                floor_price: args.floor_price,
                launch_price: args.launch_price,
                base_amount: args.base_amount,
                depth_pct: args.depth_pct,
                total_tokens: args.total_tokens,
                mm_uid: args.mm_uid,
                interval_secs: args.interval_secs,
                dry_run: args.dry_run,
            };

            let bot = sell::bot::SellBot::new(config, gate);
            if let Err(e) = bot.run(cancel).await {
                tracing::error!(error = %e, "sell bot fatal error");
                std::process::exit(1);
            }
        }

        Command::Track(args) => {
            let pair = parse_pair(&args.pair);
            let config = track::tracker::TrackerConfig {
                pair,
                interval_secs: args.interval_secs,
                whale_threshold: args.whale_threshold,
                out_dir: PathBuf::from(args.out_dir),
            };

            let gate = VenueClient::Gate(venues::GateClient::new(&GateConfig::default()));
            let mexc = VenueClient::Mexc(venues::MexcClient::new(&MexcConfig::default()));

            let mut tracker = track::tracker::Tracker::new(config, gate, mexc);
            if let Err(e) = tracker.run(cancel).await {
                tracing::error!(error = %e, "tracker fatal error");
                std::process::exit(1);
            }
        }

        Command::Sim(args) => {
            let config = sim::SimConfig {
                cycles: args.cycles,
                delay_ms: args.delay_ms,
                start_price: args.start_price,
                volatility: args.volatility,
                seed: args.seed,
                ..Default::default()
            };
            sim::Simulator::new(config).run().await;
        }

        Command::Check(args) => {
            let _ = dotenvy::dotenv();
            let gate = gate_config_from_env();
            if let Err(e) = check::run(&gate, &args.token).await {
                tracing::error!(error = %e, "check failed");
                std::process::exit(1);
            }
        }
    }
}

/// Parse a pair argument, exiting with a clear message on bad input.
fn parse_pair(raw: &str) -> Pair {
    match Pair::from_str(raw) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!(error = %e, "invalid --pair");
            std::process::exit(1);
        }
    }
}

/// Gate config with whatever credentials the environment carries.
fn gate_config_from_env() -> GateConfig {
    GateConfig {
        api_key: std::env::var("GATE_API_KEY").ok(),
        api_secret: std::env::var("GATE_API_SECRET").ok(),
        ..Default::default()
    }
}

/// Gate config for live trading; both credentials are required.
fn require_gate_credentials() -> GateConfig {
    let _ = dotenvy::dotenv(); // load .env if present

    let config = gate_config_from_env();
    if config.api_key.is_none() || config.api_secret.is_none() {
        tracing::error!("GATE_API_KEY and GATE_API_SECRET environment variables are required");
        std::process::exit(1);
    }
    config
}

/// Register SIGINT and SIGTERM handlers that trigger the returned token.
fn setup_signal_handlers() -> CancellationToken {
    let cancel = CancellationToken::new();

    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("received SIGINT, shutting down");
        cancel_clone.cancel();
    });

    #[cfg(unix)]
    {
        let cancel_clone = cancel.clone();
        tokio::spawn(async move {
            let mut sig = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to register SIGTERM handler");
            sig.recv().await;
            info!("received SIGTERM, shutting down");
            cancel_clone.cancel();
        });
    }

    cancel
}
