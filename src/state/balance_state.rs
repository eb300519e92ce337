//! Account balance state.

use super::{ViewMeta, ViewStatus};
use crate::api::BalanceResponse;

/// The user's balance, as last reported by the server.
#[derive(Debug, Default, Clone)]
pub struct BalanceState {
    /// Last successfully fetched amount. `None` until the first success.
    pub amount: Option<f64>,
    /// Refresh bookkeeping.
    pub meta: ViewMeta,
}

impl BalanceState {
    pub(crate) fn replace(&mut self, response: BalanceResponse) {
        self.amount = Some(response.balance);
    }

    /// Text of the balance line.
    pub fn display_text(&self) -> String {
        match (self.amount, &self.meta.status) {
            (Some(amount), _) => format!("Balance: ${amount}"),
            (None, ViewStatus::Failed(_)) => "Balance: Error loading".to_string(),
            (None, _) => "Balance: --".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_then_error() {
        let mut state = BalanceState::default();
        assert_eq!(state.display_text(), "Balance: --");

        state.meta.mark_failed("/api/balance API failed: 401".to_string());
        assert_eq!(state.display_text(), "Balance: Error loading");
    }

    #[test]
    fn test_failure_keeps_known_amount() {
        let mut state = BalanceState::default();
        state.replace(BalanceResponse {
            balance: 1000.5,
        });
        state.meta.mark_failed("network down".to_string());

        assert_eq!(state.display_text(), "Balance: $1000.5");
    }

    #[test]
    fn test_amount_shown_as_served() {
        let mut state = BalanceState::default();
        state.replace(BalanceResponse {
            balance: 1009.4999999999999,
        });
        assert_eq!(state.display_text(), "Balance: $1009.4999999999999");
    }
}
