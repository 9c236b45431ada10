use sea_orm::DatabaseConnection;

use crate::{ResultEngine, locks::AccountLocks};

mod accounts;
mod clients;
mod transfers;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    /// Per-account locks held for the duration of a transfer. `None` leaves
    /// concurrent transfers on overlapping accounts to the database alone.
    transfer_locks: Option<AccountLocks>,
    /// Reject non-positive amounts and self-transfers.
    validate_transfers: bool,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
pub struct EngineBuilder {
    database: DatabaseConnection,
    serialize_transfers: bool,
    validate_transfers: bool,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            database: DatabaseConnection::default(),
            serialize_transfers: true,
            validate_transfers: true,
        }
    }
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Serialize transfers touching the same account inside this process.
    ///
    /// Enabled by default. With `false` the engine falls back to unguarded
    /// transfers: overlapping transfers are ordered by the database
    /// transaction alone, with no in-process lock.
    pub fn serialize_transfers(mut self, enabled: bool) -> EngineBuilder {
        self.serialize_transfers = enabled;
        self
    }

    /// Reject transfers with a non-positive amount or with the same account
    /// on both sides.
    ///
    /// Enabled by default. When disabled such transfers go through as long as
    /// both accounts exist and the source balance covers the amount.
    pub fn validate_transfers(mut self, enabled: bool) -> EngineBuilder {
        self.validate_transfers = enabled;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
            transfer_locks: self.serialize_transfers.then(AccountLocks::default),
            validate_transfers: self.validate_transfers,
        })
    }
}
