use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// gmrt — threshold trading bot and market tracker for GMRT/USDT.
#[derive(Parser, Debug)]
#[command(name = "gmrt", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the threshold sell/buy bot against Gate.io
    Sell(SellArgs),

    /// Track Gate.io and MEXC market data and write chart snapshots
    Track(TrackArgs),

    /// Run the sell engine against a simulated random-walk market
    Sim(SimArgs),

    /// Check API connectivity and credentials
    Check(CheckArgs),
}

/// Arguments for the `sell` subcommand.
#[derive(Parser, Debug)]
pub struct SellArgs {
    /// Trading pair (e.g. GMRT/USDT or GMRT_USDT)
    #[arg(long, default_value = "GMRT/USDT")]
    pub pair: String,

    /// Minimum sell price in quote currency
    #[arg(long, default_value = "0.30")]
    pub min_sell_price: Decimal,

    /// Price floor below which no buys are placed
    #[arg(long, default_value = "0.24")]
    pub floor_price: Decimal,

    /// Launch price; no buys at or below this
    #[arg(long, default_value = "0.12")]
    pub launch_price: Decimal,

    /// Baseline trade size in tokens
    #[arg(long, default_value = "250000")]
    pub base_amount: Decimal,

    /// Depth band half-width around the current price (fraction)
    #[arg(long, default_value = "0.02")]
    pub depth_pct: Decimal,

    /// Starting inventory in tokens
    #[arg(long, default_value = "5000000")]
    pub total_tokens: Decimal,

    /// Market maker UID whose open buy orders anchor the buy price
    #[arg(long)]
    pub mm_uid: Option<u64>,

    /// Seconds between polling cycles
    #[arg(long, default_value = "5")]
    pub interval_secs: u64,

    /// Decide and log but never place or cancel orders
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `track` subcommand.
#[derive(Parser, Debug)]
pub struct TrackArgs {
    /// Trading pair (e.g. GMRT/USDT)
    #[arg(long, default_value = "GMRT/USDT")]
    pub pair: String,

    /// Seconds between polling cycles
    #[arg(long, default_value = "30")]
    pub interval_secs: u64,

    /// Trade / resting-order notional (USDT) that counts as whale activity
    #[arg(long, default_value = "10000")]
    pub whale_threshold: Decimal,

    /// Directory for the JSON snapshot files
    #[arg(long, default_value = "docs")]
    pub out_dir: String,
}

/// Arguments for the `sim` subcommand.
#[derive(Parser, Debug)]
pub struct SimArgs {
    /// Number of simulated cycles
    #[arg(long, default_value = "30")]
    pub cycles: u32,

    /// Delay between cycles in milliseconds
    #[arg(long, default_value = "1000")]
    pub delay_ms: u64,

    /// Starting price
    #[arg(long, default_value = "0.35")]
    pub start_price: Decimal,

    /// Per-cycle volatility (fraction)
    #[arg(long, default_value = "0.03")]
    pub volatility: Decimal,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Token symbol to look for among listed pairs
    #[arg(long, default_value = "GMRT")]
    pub token: String,
}
