use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::ClientId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clients::Name).string())
                    .col(ColumnDef::new(Clients::LastName).string())
                    .col(ColumnDef::new(Clients::DocumentType).string())
                    .col(ColumnDef::new(Clients::DocumentNumber).string())
                    .col(ColumnDef::new(Clients::Email).string())
                    .col(ColumnDef::new(Clients::Phone).string())
                    .col(
                        ColumnDef::new(Clients::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Clients::ModificationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub enum Clients {
    Table,
    ClientId,
    Name,
    LastName,
    DocumentType,
    DocumentNumber,
    Email,
    Phone,
    CreationDate,
    ModificationDate,
}
