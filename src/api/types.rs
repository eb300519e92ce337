//! Request and response bodies of the backend API.

use crate::error::{Error, Result};
use crate::state::{Direction, OpenTrade};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// `GET /api/balance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: f64,
}

/// `GET /api/price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResponse {
    /// Latest price. Older deployments omit it.
    #[serde(default)]
    pub price: Option<f64>,
    /// Samples, most recent last.
    pub history: Vec<f64>,
}

/// `GET /api/open-trades`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenTradesResponse {
    pub up: Vec<OpenTrade>,
    pub down: Vec<OpenTrade>,
}

/// `POST /api/trade` body. Built from user input, sent once, then dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub amount: f64,
    pub direction: Direction,
}

impl TradeRequest {
    /// Create a request from an already validated amount.
    pub fn new(amount: f64, direction: Direction) -> Self {
        Self { amount, direction }
    }

    /// Validate a user-entered amount and build a request from it.
    pub fn parse(input: &str, direction: Direction) -> Result<Self> {
        Ok(Self::new(parse_amount(input)?, direction))
    }
}

/// `POST /api/add-balance` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopUpRequest {
    pub amount: f64,
}

impl TopUpRequest {
    /// Validate a user-entered amount and build a request from it.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self {
            amount: parse_amount(input)?,
        })
    }
}

/// Parse a user-entered amount. It must be a finite number strictly
/// greater than zero; scientific notation is accepted.
///
/// The whole (trimmed) input must be a number: `"10abc"` and `"1_000"` are
/// rejected rather than read up to the first bad character.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("amount is empty"));
    }

    let amount = f64::from_str(trimmed)
        .map_err(|_| Error::validation(format!("'{trimmed}' is not a number")))?;

    if !amount.is_finite() {
        return Err(Error::validation(format!("'{trimmed}' is not a finite number")));
    }
    if amount <= 0.0 {
        return Err(Error::validation(format!("{amount} is not positive")));
    }

    Ok(amount)
}

/// Error body returned by the backend on rejected requests.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
