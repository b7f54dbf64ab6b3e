//! Command-line entry point: environment configuration, one metadata
//! snapshot, then an optional live transfer tail until Ctrl-C.
//!
//! Environment:
//!
//! | Variable | Required | Meaning |
//! |---|---|---|
//! | `HTTP_URL` | yes | HTTP endpoint for reads |
//! | `WS_URL` | yes | WebSocket endpoint for subscriptions |
//! | `PAIR_ADDRESS` | no | Pair to inspect (defaults to the configured pair) |
//! | `STREAM_TRANSFERS` | no | `false` to skip the live tail (default `true`) |
//! | `RPC_TIMEOUT_SECS` | no | Per-read timeout for the metadata snapshot |

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::Address;
use anyhow::Context;
use dotenvy::dotenv;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::format::{abbreviate, format_decimal, format_time_of_day, short_hash, shorten_number};
use crate::provider::{create_http_provider, create_ws_provider, ProviderConfig};
use crate::{PairscanConfigBuilder, Screener, TokenMetadata};

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let http_url = dotenvy::var("HTTP_URL").context("HTTP_URL must be set")?;
    let ws_url = dotenvy::var("WS_URL").context("WS_URL must be set")?;

    let mut builder = PairscanConfigBuilder::new();
    if let Some(secs) = optional_var("RPC_TIMEOUT_SECS") {
        let secs: u64 = secs.parse().context("RPC_TIMEOUT_SECS must be a number")?;
        builder = builder.rpc_timeout(Duration::from_secs(secs));
    }
    let config = builder.build();

    let reader = create_http_provider(ProviderConfig::new(http_url))?;
    let subscriber = create_ws_provider(ProviderConfig::new(ws_url)).await?;
    let screener = Screener::new(Arc::new(reader), Arc::new(subscriber), config);

    let pair = match optional_var("PAIR_ADDRESS") {
        Some(raw) => raw
            .parse::<Address>()
            .with_context(|| format!("Invalid PAIR_ADDRESS: {raw}"))?,
        None => screener.default_pair(),
    };
    let stream_transfers = optional_var("STREAM_TRANSFERS")
        .map(|raw| !matches!(raw.to_ascii_lowercase().as_str(), "0" | "false" | "no"))
        .unwrap_or(true);

    // Ctrl-C stands in for the client going away
    let shutdown = CancellationToken::new();
    let on_signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, shutting down");
        }
        on_signal.cancel();
    });

    let metadata = screener.metadata_with_cancel(pair, &shutdown).await;
    report_metadata(&metadata);
    println!("{}", serde_json::to_string_pretty(&metadata)?);

    if !stream_transfers || shutdown.is_cancelled() {
        return Ok(());
    }

    let mut stream = screener.open_pair_stream(pair, &shutdown).await?;
    info!(token = %stream.target(), "Streaming transfers, press Ctrl-C to stop");

    while let Some(tx) = stream.next().await {
        info!(
            hash = %short_hash(&tx.hash),
            from = %tx.from,
            to = %tx.to,
            amount = %shorten_number(&tx.amount),
            at = %format_time_of_day(tx.observed_at),
            "Transfer"
        );
    }

    let end = stream.shutdown().await;
    info!(?end, "Transfer stream closed");

    Ok(())
}

fn report_metadata(metadata: &TokenMetadata) {
    info!(
        name = %metadata.name,
        symbol = %metadata.symbol,
        token = %metadata.base_address,
        price = %format_decimal(&metadata.price, 18),
        market_cap = %abbreviate(&metadata.market_cap),
        volume_24h = %abbreviate(&metadata.volume_24h),
        pooled_quote = %format_decimal(&metadata.pooled_quote, 4),
        pooled_base = %shorten_number(&metadata.pooled_base.to_string()),
        total_supply = %metadata.total_supply,
        tx_count = metadata.total_tx_count,
        "Pair metadata"
    );
}

fn optional_var(key: &str) -> Option<String> {
    dotenvy::var(key).ok().filter(|value| !value.trim().is_empty())
}
