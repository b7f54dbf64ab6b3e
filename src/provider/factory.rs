// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory functions

use alloy_provider::{ProviderBuilder, RootProvider, WsConnect};

use crate::errors::RpcError;

use super::config::ProviderConfig;
use super::ProviderClient;

/// Client built by the factories
///
/// HTTP and WebSocket clients share this type; the transport is chosen at
/// connection time. Only a WebSocket-backed client can serve
/// [`LogSubscriber`](super::LogSubscriber).
pub type NodeClient = ProviderClient<RootProvider>;

/// Create an HTTP client with the given configuration
///
/// # Examples
///
/// ```rust,ignore
/// use pairscan::provider::{create_http_provider, ProviderConfig};
///
/// let client = create_http_provider(ProviderConfig::new("https://eth.llamarpc.com"))?;
/// ```
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn create_http_provider(config: ProviderConfig) -> Result<NodeClient, RpcError> {
    let url: url::Url = config
        .url
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{e}")))?;

    // Recommended fillers are only needed for sending transactions
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_http(url);

    Ok(ProviderClient::new(provider))
}

/// Create a WebSocket client with the given configuration
///
/// This function is async because WebSocket connections require a handshake.
///
/// # Examples
///
/// ```rust,ignore
/// use pairscan::provider::{create_ws_provider, ProviderConfig};
///
/// let client = create_ws_provider(ProviderConfig::new("wss://eth.llamarpc.com")).await?;
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The URL is not a `ws://` or `wss://` URL
/// - The WebSocket connection fails
pub async fn create_ws_provider(config: ProviderConfig) -> Result<NodeClient, RpcError> {
    if !config.is_websocket() {
        return Err(RpcError::ProviderUrlInvalid(format!(
            "expected a ws:// or wss:// URL, got {}",
            config.url
        )));
    }

    let ws = WsConnect::new(config.url.trim());

    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_ws(ws)
        .await
        .map_err(|e| RpcError::ProviderConnectionFailed(e.to_string()))?;

    Ok(ProviderClient::new(provider))
}
