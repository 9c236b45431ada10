use chrono::Utc;
use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{Account, AccountNew, AccountPatch, EngineError, ResultEngine, accounts};

use super::{Engine, with_tx};

impl Engine {
    /// Open a new account. The opening balance defaults to `0`.
    pub async fn new_account(&self, cmd: AccountNew) -> ResultEngine<Account> {
        let balance = cmd.initial_balance.unwrap_or(0.0);
        if !balance.is_finite() {
            return Err(EngineError::InvalidAmount(
                "initial balance must be a finite number".to_string(),
            ));
        }

        let now = Utc::now();
        let model = accounts::ActiveModel {
            account_id: ActiveValue::NotSet,
            client_id: ActiveValue::Set(cmd.client_id),
            account_key: ActiveValue::Set(cmd.account_key),
            balance: ActiveValue::Set(balance),
            account_type: ActiveValue::Set(cmd.account_type),
            bank: ActiveValue::Set(cmd.bank),
            creation_date: ActiveValue::Set(now),
            modification_date: ActiveValue::Set(now),
        }
        .insert(&self.database)
        .await?;

        tracing::debug!(account_id = model.account_id, "account created");
        Ok(model.into())
    }

    pub async fn accounts(&self) -> ResultEngine<Vec<Account>> {
        let models = accounts::Entity::find()
            .order_by_asc(accounts::Column::AccountId)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Account::from).collect())
    }

    pub async fn account(&self, account_id: i64) -> ResultEngine<Option<Account>> {
        Ok(accounts::Entity::find_by_id(account_id)
            .one(&self.database)
            .await?
            .map(Account::from))
    }

    /// Apply a partial update. Returns `None` when the account does not exist.
    pub async fn update_account(
        &self,
        account_id: i64,
        patch: AccountPatch,
    ) -> ResultEngine<Option<Account>> {
        with_tx!(self, |db_tx| {
            match accounts::Entity::find_by_id(account_id).one(&db_tx).await? {
                Some(model) => {
                    let mut account = Account::from(model);
                    patch.merge_into(&mut account);
                    account.modification_date = Utc::now();

                    let mut active = accounts::ActiveModel::from(&account);
                    // A transfer may be running on this account.
                    active.balance = ActiveValue::NotSet;
                    let model = active.update(&db_tx).await?;
                    Ok(Some(Account::from(model)))
                }
                None => Ok(None),
            }
        })
    }

    /// Delete an account. Deleting a missing id is not an error.
    pub async fn delete_account(&self, account_id: i64) -> ResultEngine<()> {
        accounts::Entity::delete_by_id(account_id)
            .exec(&self.database)
            .await?;
        Ok(())
    }
}
