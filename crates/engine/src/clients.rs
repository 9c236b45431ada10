//! The module contains `Client` struct and its storage model.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};

/// A bank customer.
#[derive(Clone, Debug, PartialEq)]
pub struct Client {
    pub id: i64,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub modification_date: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub client_id: i64,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub creation_date: DateTimeUtc,
    pub modification_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Client {
    fn from(model: Model) -> Self {
        Self {
            id: model.client_id,
            name: model.name,
            last_name: model.last_name,
            document_type: model.document_type,
            document_number: model.document_number,
            email: model.email,
            phone: model.phone,
            creation_date: model.creation_date,
            modification_date: model.modification_date,
        }
    }
}

impl From<&Client> for ActiveModel {
    fn from(value: &Client) -> Self {
        Self {
            client_id: ActiveValue::Set(value.id),
            name: ActiveValue::Set(value.name.clone()),
            last_name: ActiveValue::Set(value.last_name.clone()),
            document_type: ActiveValue::Set(value.document_type.clone()),
            document_number: ActiveValue::Set(value.document_number.clone()),
            email: ActiveValue::Set(value.email.clone()),
            phone: ActiveValue::Set(value.phone.clone()),
            creation_date: ActiveValue::Set(value.creation_date),
            modification_date: ActiveValue::Set(value.modification_date),
        }
    }
}
