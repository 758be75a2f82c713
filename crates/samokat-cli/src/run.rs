//! One notification run: fetch the showcase, rank it, deliver the report.
//!
//! Any failure aborts the run; nothing is retried and nothing is partially
//! delivered.

use anyhow::Context;
use samokat_core::AppConfig;
use samokat_showcase::{rank_products, ShowcaseClient, ShowcaseQuery};
use samokat_telegram::{format_report, TelegramNotifier};

/// Fetches the showcase for the configured coordinates and renders the
/// ranked report text. Makes exactly one showcase request.
///
/// # Errors
///
/// Returns an error wrapping [`samokat_showcase::ShowcaseError`] if the
/// coordinates are zero, the request fails, or the body cannot be decoded.
pub(crate) async fn build_report(config: &AppConfig) -> anyhow::Result<String> {
    let client =
        ShowcaseClient::from_app_config(config).context("failed to build showcase client")?;
    let products = client
        .fetch_products(&ShowcaseQuery::from_app_config(config))
        .await
        .context("failed to fetch showcase")?;

    let fetched = products.len();
    let ranked = rank_products(products, config.min_discount);
    tracing::info!(
        fetched,
        ranked = ranked.len(),
        min_discount = config.min_discount,
        "ranked showcase products"
    );

    Ok(format_report(&ranked))
}

/// Full run: validates the Telegram settings, builds the report, and sends
/// it as one message. An empty report is still sent.
///
/// Telegram settings are checked before the showcase is fetched so a bad
/// token or chat id fails without any network traffic.
///
/// # Errors
///
/// Returns an error wrapping [`samokat_telegram::NotifyError`] or
/// [`samokat_showcase::ShowcaseError`] from whichever step failed first.
pub(crate) async fn run_and_notify(config: &AppConfig) -> anyhow::Result<()> {
    let notifier =
        TelegramNotifier::from_app_config(config).context("invalid Telegram settings")?;
    let report = build_report(config).await?;
    notifier
        .notify(&report)
        .await
        .context("failed to deliver report")?;
    Ok(())
}
