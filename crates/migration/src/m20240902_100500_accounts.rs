use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `client_id` is a plain reference: accounts are not validated against
        // the clients table and survive client deletion.
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::AccountId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::ClientId).big_integer())
                    .col(ColumnDef::new(Accounts::AccountKey).string())
                    .col(
                        ColumnDef::new(Accounts::Balance)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Accounts::AccountType).string())
                    .col(ColumnDef::new(Accounts::Bank).string())
                    .col(
                        ColumnDef::new(Accounts::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Accounts::ModificationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-accounts-client_id")
                    .table(Accounts::Table)
                    .col(Accounts::ClientId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub enum Accounts {
    Table,
    AccountId,
    ClientId,
    AccountKey,
    Balance,
    AccountType,
    Bank,
    CreationDate,
    ModificationDate,
}
