pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod http;
pub mod mexc;
pub mod signing;
pub mod types;
pub mod utils;

// ---- Top-level re-exports for ergonomic usage ----

// Clients
pub use client::VenueClient;
pub use gate::GateClient;
pub use mexc::MexcClient;

// Configuration + errors
pub use config::{GateConfig, MexcConfig};
pub use error::{Result, VenueError};

// Core enums
pub use types::{Side, VenueId};

// Pair identifiers
pub use types::Pair;

// Market data
pub use types::{BookLevel, GateBook, GateTicker, MexcDepth, MexcPrice, OrderBook, Trade};

// Orders + account
pub use types::{CurrencyPairInfo, GateBalance, GateOrder, OrderRequest};

// Request signing
pub use signing::GateSigner;
