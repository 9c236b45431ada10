pub use sea_orm_migration::prelude::*;

mod m20240902_100000_clients;
mod m20240902_100500_accounts;
mod m20240902_101000_transactions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240902_100000_clients::Migration),
            Box::new(m20240902_100500_accounts::Migration),
            Box::new(m20240902_101000_transactions::Migration),
        ]
    }
}
