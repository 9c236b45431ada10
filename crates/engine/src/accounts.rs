//! The module contains `Account` struct and its storage model.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};

/// A balance-holding account owned by a client.
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub id: i64,
    /// Owning client. Not checked against the clients table.
    pub client_id: Option<i64>,
    /// Alias used to address the account, usually phone-number-like.
    pub account_key: Option<String>,
    /// Current balance. Never negative after a transfer, but not enforced
    /// at rest: an account may be opened with a negative balance.
    pub balance: f64,
    pub account_type: Option<String>,
    pub bank: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub modification_date: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub account_id: i64,
    pub client_id: Option<i64>,
    pub account_key: Option<String>,
    pub balance: f64,
    pub account_type: Option<String>,
    pub bank: Option<String>,
    pub creation_date: DateTimeUtc,
    pub modification_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Self {
            id: model.account_id,
            client_id: model.client_id,
            account_key: model.account_key,
            balance: model.balance,
            account_type: model.account_type,
            bank: model.bank,
            creation_date: model.creation_date,
            modification_date: model.modification_date,
        }
    }
}

impl From<&Account> for ActiveModel {
    fn from(value: &Account) -> Self {
        Self {
            account_id: ActiveValue::Set(value.id),
            client_id: ActiveValue::Set(value.client_id),
            account_key: ActiveValue::Set(value.account_key.clone()),
            balance: ActiveValue::Set(value.balance),
            account_type: ActiveValue::Set(value.account_type.clone()),
            bank: ActiveValue::Set(value.bank.clone()),
            creation_date: ActiveValue::Set(value.creation_date),
            modification_date: ActiveValue::Set(value.modification_date),
        }
    }
}
