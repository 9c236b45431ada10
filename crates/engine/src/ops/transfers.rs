//! Transfers between accounts and the transaction records they leave behind.

use chrono::Utc;
use sea_orm::{
    ActiveValue, Condition, DatabaseTransaction, QueryFilter, QueryOrder, TransactionTrait,
    prelude::*,
};

use crate::{
    ResultEngine, Transaction, TransactionStatus, TransferCmd, TransferReceipt,
    TransferRejection, accounts,
    transactions::{self, TRANSFER_COMPLETED},
};

use super::{Engine, with_tx};

impl Engine {
    /// Move `cmd.amount` from the source account to the destination account.
    ///
    /// Rules are checked in order: both accounts exist, the source balance
    /// covers the amount, then (when validation is enabled) the amount is
    /// positive and the accounts differ. A rule that fails yields a
    /// [`TransactionStatus::Failed`] receipt and leaves the store untouched.
    ///
    /// On success both balances and the new transaction row are written in
    /// one database transaction. Only storage failures are returned as
    /// errors.
    pub async fn execute_transfer(&self, cmd: TransferCmd) -> ResultEngine<TransferReceipt> {
        let _guard = match &self.transfer_locks {
            Some(locks) => Some(
                locks
                    .acquire(cmd.source_account_id, cmd.destination_account_id)
                    .await,
            ),
            None => None,
        };

        let receipt = with_tx!(self, |db_tx| {
            let source = accounts::Entity::find_by_id(cmd.source_account_id)
                .one(&db_tx)
                .await?;
            let destination = accounts::Entity::find_by_id(cmd.destination_account_id)
                .one(&db_tx)
                .await?;

            match check_transfer(&cmd, source, destination, self.validate_transfers) {
                Ok((source, destination)) => {
                    apply_transfer(&db_tx, &cmd, source, destination).await
                }
                Err(rejection) => Ok(TransferReceipt::rejected(&cmd, rejection, Utc::now())),
            }
        })?;

        if receipt.is_completed() {
            tracing::debug!(
                transaction_id = receipt.transaction_id,
                source = cmd.source_account_id,
                destination = cmd.destination_account_id,
                amount = cmd.amount,
                "transfer completed"
            );
        } else {
            tracing::warn!(
                source = cmd.source_account_id,
                destination = cmd.destination_account_id,
                amount = cmd.amount,
                "transfer rejected: {}",
                receipt.message
            );
        }

        Ok(receipt)
    }

    /// Return every transaction with `account_id` as source or destination,
    /// oldest first.
    pub async fn list_transactions_for_account(
        &self,
        account_id: i64,
    ) -> ResultEngine<Vec<TransferReceipt>> {
        transactions::Entity::find()
            .filter(
                Condition::any()
                    .add(transactions::Column::SourceAccountId.eq(account_id))
                    .add(transactions::Column::DestinationAccountId.eq(account_id)),
            )
            .order_by_asc(transactions::Column::TransactionId)
            .all(&self.database)
            .await?
            .into_iter()
            .map(|model| Transaction::try_from(model).map(|tx| TransferReceipt::from(&tx)))
            .collect()
    }

    /// Return the stored transaction, if any.
    pub async fn transaction(&self, transaction_id: i64) -> ResultEngine<Option<Transaction>> {
        transactions::Entity::find_by_id(transaction_id)
            .one(&self.database)
            .await?
            .map(Transaction::try_from)
            .transpose()
    }

    /// Describe a stored transaction.
    ///
    /// A missing transaction is described by a failed receipt with no
    /// identifying fields.
    pub async fn transaction_details(&self, transaction_id: i64) -> ResultEngine<TransferReceipt> {
        Ok(self
            .transaction(transaction_id)
            .await?
            .map_or_else(TransferReceipt::not_found, |tx| TransferReceipt::from(&tx)))
    }

    /// Delete a transaction. Deleting a missing id is not an error.
    ///
    /// Account balances are not restored.
    pub async fn delete_transaction(&self, transaction_id: i64) -> ResultEngine<()> {
        transactions::Entity::delete_by_id(transaction_id)
            .exec(&self.database)
            .await?;
        Ok(())
    }
}

/// Decide whether a transfer may run, handing back both accounts if so.
fn check_transfer(
    cmd: &TransferCmd,
    source: Option<accounts::Model>,
    destination: Option<accounts::Model>,
    validate: bool,
) -> Result<(accounts::Model, accounts::Model), TransferRejection> {
    let (Some(source), Some(destination)) = (source, destination) else {
        return Err(TransferRejection::AccountNotFound);
    };
    if source.balance < cmd.amount {
        return Err(TransferRejection::InsufficientBalance);
    }
    if validate {
        if !cmd.amount.is_finite() || cmd.amount <= 0.0 {
            return Err(TransferRejection::NonPositiveAmount);
        }
        if cmd.source_account_id == cmd.destination_account_id {
            return Err(TransferRejection::SameAccount);
        }
    }
    Ok((source, destination))
}

async fn apply_transfer(
    db_tx: &DatabaseTransaction,
    cmd: &TransferCmd,
    source: accounts::Model,
    destination: accounts::Model,
) -> ResultEngine<TransferReceipt> {
    let now = Utc::now();

    // Debit and credit of a self-transfer cancel out: one write, balance kept.
    let writes = if source.account_id == destination.account_id {
        vec![(source.account_id, source.balance)]
    } else {
        vec![
            (source.account_id, source.balance - cmd.amount),
            (destination.account_id, destination.balance + cmd.amount),
        ]
    };

    for (account_id, balance) in writes {
        let active = accounts::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            balance: ActiveValue::Set(balance),
            modification_date: ActiveValue::Set(now),
            ..Default::default()
        };
        active.update(db_tx).await?;
    }

    let model = transactions::ActiveModel {
        transaction_id: ActiveValue::NotSet,
        source_account_id: ActiveValue::Set(cmd.source_account_id),
        destination_account_id: ActiveValue::Set(cmd.destination_account_id),
        amount: ActiveValue::Set(cmd.amount),
        date: ActiveValue::Set(now),
        status: ActiveValue::Set(TransactionStatus::Completed.as_str().to_string()),
        message: ActiveValue::Set(TRANSFER_COMPLETED.to_string()),
    }
    .insert(db_tx)
    .await?;

    let tx = Transaction::try_from(model)?;
    Ok(TransferReceipt::from(&tx))
}
