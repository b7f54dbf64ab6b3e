// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider configuration options

/// Configuration for connecting to a node endpoint
///
/// # Example
///
/// ```rust
/// use pairscan::provider::ProviderConfig;
///
/// let config = ProviderConfig::new("wss://eth.llamarpc.com");
/// assert!(config.is_websocket());
/// ```
///
/// Note: RPC request/response logging is handled natively by alloy's transport
/// layer at DEBUG/TRACE level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// RPC endpoint URL
    pub url: String,
}

impl ProviderConfig {
    /// Create a new provider configuration with the specified URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Whether the URL uses a WebSocket scheme
    #[must_use]
    pub fn is_websocket(&self) -> bool {
        let url = self.url.trim_start();
        url.starts_with("ws://") || url.starts_with("wss://")
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new("http://localhost:8545")
    }
}
