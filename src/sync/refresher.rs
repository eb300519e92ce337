//! Fetching one view from the backend.

use crate::api::Backend;
use crate::error::Result;
use crate::state::{ViewKind, ViewPayload};

/// Fetch and parse the payload for `view`.
pub async fn fetch(backend: &dyn Backend, view: ViewKind) -> Result<ViewPayload> {
    let payload = match view {
        ViewKind::Balance => ViewPayload::Balance(backend.fetch_balance().await?),
        ViewKind::Price => ViewPayload::Price(backend.fetch_price().await?),
        ViewKind::OpenTrades => ViewPayload::OpenTrades(backend.fetch_open_trades().await?),
        ViewKind::History => ViewPayload::History(backend.fetch_history().await?),
    };
    Ok(payload)
}
