//! Back-office engine for clients, accounts and transfers between accounts.
//!
//! Every operation goes through [`Engine`], which owns the database
//! connection. Balances are only ever mutated by [`Engine::execute_transfer`].

pub use accounts::Account;
pub use clients::Client;
pub use commands::{AccountNew, AccountPatch, ClientFields, TransferCmd};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use transactions::{Transaction, TransactionStatus, TransferReceipt, TransferRejection};

mod accounts;
mod clients;
mod commands;
mod error;
mod locks;
mod ops;
mod transactions;

type ResultEngine<T> = Result<T, EngineError>;
