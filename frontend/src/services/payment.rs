//! Simulated payment gateway.
//!
//! There is no real payment processing in this frontend. The review
//! step waits for a short gateway-like delay, then produces a paid
//! record that is embedded in the submission payload. The backend
//! treats it as a placeholder until real capture happens server-side.

use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};

use crate::config::PAYMENT_DELAY_MS;
use crate::ids::new_transaction_id;

/// Payment record attached to every submission payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// Always "paid" for the simulated gateway
    pub status: String,
    /// Simulated transaction id (TXN-…)
    pub transaction_id: String,
    /// Amount charged, whole rupees
    pub amount: u32,
    /// ISO-8601 UTC timestamp of capture
    pub paid_at: String,
}

/// Run the simulated payment for `amount` rupees.
///
/// Resolves after [`PAYMENT_DELAY_MS`]; it cannot fail and is not
/// cancellable, matching the one-in-flight UI model.
pub async fn simulate_payment(amount: u32) -> PaymentRecord {
    TimeoutFuture::new(PAYMENT_DELAY_MS).await;

    let record = PaymentRecord {
        status: "paid".to_string(),
        transaction_id: new_transaction_id(),
        amount,
        paid_at: chrono::Utc::now().to_rfc3339(),
    };
    log::info!("Payment simulated: {} for ₹{}", record.transaction_id, amount);
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_record_wire_names() {
        let record = PaymentRecord {
            status: "paid".to_string(),
            transaction_id: "TXN-ABCDEF2345".to_string(),
            amount: 6_499,
            paid_at: "2025-06-01T10:30:00+00:00".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "paid");
        assert_eq!(value["transactionId"], "TXN-ABCDEF2345");
        assert_eq!(value["amount"], 6_499);
        assert_eq!(value["paidAt"], "2025-06-01T10:30:00+00:00");
    }
}
