use chrono::Utc;
use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{Client, ClientFields, ResultEngine, clients};

use super::{Engine, with_tx};

impl Engine {
    pub async fn new_client(&self, fields: ClientFields) -> ResultEngine<Client> {
        let now = Utc::now();
        let model = clients::ActiveModel {
            client_id: ActiveValue::NotSet,
            name: ActiveValue::Set(fields.name),
            last_name: ActiveValue::Set(fields.last_name),
            document_type: ActiveValue::Set(fields.document_type),
            document_number: ActiveValue::Set(fields.document_number),
            email: ActiveValue::Set(fields.email),
            phone: ActiveValue::Set(fields.phone),
            creation_date: ActiveValue::Set(now),
            modification_date: ActiveValue::Set(now),
        }
        .insert(&self.database)
        .await?;

        tracing::debug!(client_id = model.client_id, "client created");
        Ok(model.into())
    }

    pub async fn clients(&self) -> ResultEngine<Vec<Client>> {
        let models = clients::Entity::find()
            .order_by_asc(clients::Column::ClientId)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Client::from).collect())
    }

    pub async fn client(&self, client_id: i64) -> ResultEngine<Option<Client>> {
        Ok(clients::Entity::find_by_id(client_id)
            .one(&self.database)
            .await?
            .map(Client::from))
    }

    /// Overwrite name, last name, email and phone with the given values,
    /// absent ones included. Returns `None` when the client does not exist.
    pub async fn replace_client(
        &self,
        client_id: i64,
        fields: ClientFields,
    ) -> ResultEngine<Option<Client>> {
        self.write_client(client_id, |client| fields.replace_into(client))
            .await
    }

    /// Apply a partial update. Returns `None` when the client does not exist.
    pub async fn update_client(
        &self,
        client_id: i64,
        fields: ClientFields,
    ) -> ResultEngine<Option<Client>> {
        self.write_client(client_id, |client| fields.merge_into(client))
            .await
    }

    /// Delete a client. Its accounts are kept.
    pub async fn delete_client(&self, client_id: i64) -> ResultEngine<()> {
        clients::Entity::delete_by_id(client_id)
            .exec(&self.database)
            .await?;
        Ok(())
    }

    async fn write_client(
        &self,
        client_id: i64,
        change: impl FnOnce(&mut Client),
    ) -> ResultEngine<Option<Client>> {
        with_tx!(self, |db_tx| {
            match clients::Entity::find_by_id(client_id).one(&db_tx).await? {
                Some(model) => {
                    let mut client = Client::from(model);
                    change(&mut client);
                    client.modification_date = Utc::now();

                    let model = clients::ActiveModel::from(&client).update(&db_tx).await?;
                    Ok(Some(Client::from(model)))
                }
                None => Ok(None),
            }
        })
    }
}
