//! JSON bodies of the HTTP API.
//!
//! Field names are camelCase on the wire. Optional fields are serialized as
//! `null` rather than skipped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod client {
    use super::*;

    /// Body of create, full update and partial update requests.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ClientRequest {
        pub name: Option<String>,
        pub last_name: Option<String>,
        pub document_type: Option<String>,
        pub document_number: Option<String>,
        pub email: Option<String>,
        pub phone: Option<String>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ClientView {
        pub client_id: i64,
        pub name: Option<String>,
        pub last_name: Option<String>,
        pub document_type: Option<String>,
        pub document_number: Option<String>,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub creation_date: DateTime<Utc>,
        pub modification_date: DateTime<Utc>,
    }
}

pub mod account {
    use super::*;

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AccountNew {
        pub client_id: Option<i64>,
        /// Alias of the account, e.g. a phone number.
        pub account_key: Option<String>,
        pub initial_balance: Option<f64>,
        pub account_type: Option<String>,
        pub bank: Option<String>,
    }

    /// Partial update: only present fields are written.
    ///
    /// Unknown fields, `initialBalance` included, are ignored.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AccountUpdate {
        pub client_id: Option<i64>,
        pub account_key: Option<String>,
        pub account_type: Option<String>,
        pub bank: Option<String>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AccountView {
        pub account_id: i64,
        pub client_id: Option<i64>,
        pub account_key: Option<String>,
        pub balance: f64,
        pub account_type: Option<String>,
        pub bank: Option<String>,
        pub creation_date: DateTime<Utc>,
        pub modification_date: DateTime<Utc>,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    pub enum TransactionStatus {
        Completed,
        Failed,
    }

    /// Body of `POST /api/transfers`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransferNew {
        pub source_account_id: i64,
        pub destination_account_id: i64,
        pub amount: f64,
    }

    /// Outcome of a transfer or of a transaction lookup.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionResponse {
        pub transaction_id: Option<i64>,
        pub source_account_id: Option<i64>,
        pub destination_account_id: Option<i64>,
        pub amount: Option<f64>,
        pub date: Option<DateTime<Utc>>,
        pub status: TransactionStatus,
        pub message: String,
    }
}

#[cfg(test)]
mod tests {
    use super::{account::AccountUpdate, transaction::*};

    #[test]
    fn failed_response_keeps_null_fields() {
        let response = TransactionResponse {
            transaction_id: None,
            source_account_id: None,
            destination_account_id: None,
            amount: None,
            date: None,
            status: TransactionStatus::Failed,
            message: "transaction not found".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "transactionId": null,
                "sourceAccountId": null,
                "destinationAccountId": null,
                "amount": null,
                "date": null,
                "status": "FAILED",
                "message": "transaction not found",
            })
        );
    }

    #[test]
    fn account_update_ignores_initial_balance() {
        let update: AccountUpdate =
            serde_json::from_str(r#"{"bank": "BBVA", "initialBalance": 20000.0}"#).unwrap();
        assert_eq!(update.bank.as_deref(), Some("BBVA"));
        assert_eq!(update.client_id, None);
    }
}
