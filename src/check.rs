//! Connectivity and credential sanity check.

use tracing::{error, info};
use venues::{GateClient, GateConfig};

use crate::error::Result;

/// Check the public API, report which credentials are present (never
/// their values), and exercise the private API when both are set.
pub async fn run(gate: &GateConfig, token: &str) -> Result<()> {
    info!(
        api_key = if gate.api_key.is_some() { "yes" } else { "no" },
        api_secret = if gate.api_secret.is_some() { "yes" } else { "no" },
        "credentials present"
    );

    let client = GateClient::new(gate);

    let pairs = client.currency_pairs().await?;
    info!(count = pairs.len(), "public API ok, currency pairs fetched");

    let token = token.to_uppercase();
    let matches: Vec<&str> = pairs
        .iter()
        .filter(|p| p.base.contains(&token))
        .map(|p| p.id.as_str())
        .collect();
    if matches.is_empty() {
        info!(token = %token, "no matching pairs listed");
    } else {
        info!(token = %token, pairs = ?matches, "matching pairs");
    }

    if gate.api_key.is_some() && gate.api_secret.is_some() {
        match client.balances().await {
            Ok(balances) => {
                info!(currencies = balances.len(), "private API ok");
            }
            Err(e) => error!(error = %e, "private API check failed"),
        }
    } else {
        info!("skipping private API check, no credentials");
    }

    Ok(())
}
