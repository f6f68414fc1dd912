//! Payment records served by the dashboard's payments table

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a payment
///
/// Serialized in lowercase (`"pending"`, `"processing"`, ...), which is the
/// form the dashboard's status column and filters expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Success,
    Failed,
}

impl PaymentStatus {
    /// Every status, in declaration order
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Processing,
        PaymentStatus::Success,
        PaymentStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Processing => "processing",
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single mock payment
///
/// Records are immutable once generated; the collection that holds them is
/// shared read-only between every caller of the paginated service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Identifier of the form `PREFIX-<number>`, unique within a collection
    pub id: String,

    /// Amount in whole currency units
    pub amount: u32,

    pub status: PaymentStatus,

    pub email: String,

    /// Calendar day of the payment, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        for status in PaymentStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::Value::String(status.to_string()));
        }
    }

    #[test]
    fn test_payment_json_shape() {
        let payment = Payment {
            id: "PAY-1000".to_string(),
            amount: 250,
            status: PaymentStatus::Processing,
            email: "user1@example.com".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        };

        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["id"], "PAY-1000");
        assert_eq!(json["amount"], 250);
        assert_eq!(json["status"], "processing");
        assert_eq!(json["date"], "2024-03-09");
    }
}
