use std::fmt;

/// Configuration for the Gate.io spot client.
#[derive(Clone)]
pub struct GateConfig {
    /// Base URL for the REST API (e.g. `https://api.gateio.ws`).
    pub base_url: String,
    /// API key; `None` restricts the client to public endpoints.
    pub api_key: Option<String>,
    /// API secret paired with `api_key`.
    pub api_secret: Option<String>,
}

// Credentials are logged as presence only, never values.
impl fmt::Debug for GateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.gateio.ws".into(),
            api_key: None,
            api_secret: None,
        }
    }
}

/// Configuration for the MEXC spot client (public market data only).
#[derive(Debug, Clone)]
pub struct MexcConfig {
    /// Base URL for the REST API (e.g. `https://api.mexc.com`).
    pub base_url: String,
}

impl Default for MexcConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mexc.com".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_config_debug_never_shows_credentials() {
        let config = GateConfig {
            api_key: Some("my-api-key-id".into()),
            api_secret: Some("super-secret-value".into()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("my-api-key-id"));
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("<set>"));
        assert!(debug.contains("api.gateio.ws"));
    }
}
