//! Transaction primitives.
//!
//! A `Transaction` is the stored record of a completed transfer. Every
//! transfer attempt, stored or not, is described to the caller by a
//! [`TransferReceipt`].

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::{EngineError, TransferCmd};

pub(crate) const TRANSFER_COMPLETED: &str = "transfer completed successfully";
pub(crate) const TRANSACTION_NOT_FOUND: &str = "transaction not found";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }
}

impl TryFrom<&str> for TransactionStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            other => Err(EngineError::InvalidStatus(format!(
                "invalid transaction status: {other}"
            ))),
        }
    }
}

/// Why a transfer was not executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferRejection {
    /// The source or the destination account (or both) is missing.
    AccountNotFound,
    /// The source balance is lower than the amount.
    InsufficientBalance,
    /// Zero, negative or non-finite amount.
    NonPositiveAmount,
    /// Source and destination are the same account.
    SameAccount,
}

impl TransferRejection {
    pub fn message(self) -> &'static str {
        match self {
            Self::AccountNotFound => "one or both accounts do not exist",
            Self::InsufficientBalance => "insufficient balance in source account",
            Self::NonPositiveAmount => "amount must be greater than zero",
            Self::SameAccount => "source and destination accounts must differ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub source_account_id: i64,
    pub destination_account_id: i64,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub status: TransactionStatus,
    pub message: String,
}

/// Outcome of a transfer or of a transaction lookup.
///
/// Identifying fields are `None` when there is nothing stored to point at:
/// `transaction_id` for a rejected transfer, every field for a lookup that
/// found nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferReceipt {
    pub transaction_id: Option<i64>,
    pub source_account_id: Option<i64>,
    pub destination_account_id: Option<i64>,
    pub amount: Option<f64>,
    pub date: Option<DateTime<Utc>>,
    pub status: TransactionStatus,
    pub message: String,
}

impl TransferReceipt {
    /// Echo the request back with a failed status. Nothing was stored.
    pub(crate) fn rejected(
        cmd: &TransferCmd,
        rejection: TransferRejection,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            transaction_id: None,
            source_account_id: Some(cmd.source_account_id),
            destination_account_id: Some(cmd.destination_account_id),
            amount: Some(cmd.amount),
            date: Some(at),
            status: TransactionStatus::Failed,
            message: rejection.message().to_string(),
        }
    }

    pub(crate) fn not_found() -> Self {
        Self {
            transaction_id: None,
            source_account_id: None,
            destination_account_id: None,
            amount: None,
            date: None,
            status: TransactionStatus::Failed,
            message: TRANSACTION_NOT_FOUND.to_string(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TransactionStatus::Completed
    }
}

impl From<&Transaction> for TransferReceipt {
    fn from(tx: &Transaction) -> Self {
        Self {
            transaction_id: Some(tx.id),
            source_account_id: Some(tx.source_account_id),
            destination_account_id: Some(tx.destination_account_id),
            amount: Some(tx.amount),
            date: Some(tx.date),
            status: tx.status,
            message: tx.message.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub transaction_id: i64,
    pub source_account_id: i64,
    pub destination_account_id: i64,
    pub amount: f64,
    pub date: DateTimeUtc,
    pub status: String,
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.transaction_id,
            source_account_id: model.source_account_id,
            destination_account_id: model.destination_account_id,
            amount: model.amount,
            date: model.date,
            status: TransactionStatus::try_from(model.status.as_str())?,
            message: model.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_string() {
        for status in [TransactionStatus::Completed, TransactionStatus::Failed] {
            assert_eq!(TransactionStatus::try_from(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(
            TransactionStatus::try_from("COMPLETADO"),
            Err(EngineError::InvalidStatus(
                "invalid transaction status: COMPLETADO".to_string()
            ))
        );
    }

    #[test]
    fn rejected_receipt_echoes_request() {
        let at = Utc::now();
        let receipt = TransferReceipt::rejected(
            &TransferCmd::new(1, 2, 20000.0),
            TransferRejection::InsufficientBalance,
            at,
        );

        assert_eq!(receipt.transaction_id, None);
        assert_eq!(receipt.source_account_id, Some(1));
        assert_eq!(receipt.destination_account_id, Some(2));
        assert_eq!(receipt.amount, Some(20000.0));
        assert_eq!(receipt.date, Some(at));
        assert_eq!(receipt.status, TransactionStatus::Failed);
        assert_eq!(receipt.message, "insufficient balance in source account");
    }

    #[test]
    fn not_found_receipt_has_no_identifying_fields() {
        let receipt = TransferReceipt::not_found();

        assert_eq!(receipt.transaction_id, None);
        assert_eq!(receipt.source_account_id, None);
        assert_eq!(receipt.amount, None);
        assert_eq!(receipt.date, None);
        assert!(!receipt.is_completed());
        assert_eq!(receipt.message, "transaction not found");
    }
}
