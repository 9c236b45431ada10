//! Command structs for engine operations.
//!
//! Every optional field follows the same merge rule on partial updates: a
//! `Some` overwrites the stored value, a `None` keeps it. There is no way to
//! clear a field through a partial update.

use crate::{Account, Client};

/// Move `amount` from one account to another.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferCmd {
    pub source_account_id: i64,
    pub destination_account_id: i64,
    pub amount: f64,
}

impl TransferCmd {
    #[must_use]
    pub fn new(source_account_id: i64, destination_account_id: i64, amount: f64) -> Self {
        Self {
            source_account_id,
            destination_account_id,
            amount,
        }
    }
}

/// Open a new account.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountNew {
    pub client_id: Option<i64>,
    pub account_key: Option<String>,
    /// Opening balance, `0` when absent.
    pub initial_balance: Option<f64>,
    pub account_type: Option<String>,
    pub bank: Option<String>,
}

/// Partial update of an account.
///
/// The balance is deliberately absent: it only changes through transfers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountPatch {
    pub client_id: Option<i64>,
    pub account_key: Option<String>,
    pub account_type: Option<String>,
    pub bank: Option<String>,
}

impl AccountPatch {
    pub(crate) fn merge_into(self, account: &mut Account) {
        if let Some(client_id) = self.client_id {
            account.client_id = Some(client_id);
        }
        if let Some(account_key) = self.account_key {
            account.account_key = Some(account_key);
        }
        if let Some(account_type) = self.account_type {
            account.account_type = Some(account_type);
        }
        if let Some(bank) = self.bank {
            account.bank = Some(bank);
        }
    }
}

/// Client data, used to create, replace and patch clients.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientFields {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientFields {
    /// Null-skip merge of every field.
    pub(crate) fn merge_into(self, client: &mut Client) {
        let Self {
            name,
            last_name,
            document_type,
            document_number,
            email,
            phone,
        } = self;
        merge(&mut client.name, name);
        merge(&mut client.last_name, last_name);
        merge(&mut client.document_type, document_type);
        merge(&mut client.document_number, document_number);
        merge(&mut client.email, email);
        merge(&mut client.phone, phone);
    }

    /// Full update of the contact fields.
    ///
    /// Name, last name, email and phone are overwritten even when absent;
    /// the identity document is left untouched.
    pub(crate) fn replace_into(self, client: &mut Client) {
        client.name = self.name;
        client.last_name = self.last_name;
        client.email = self.email;
        client.phone = self.phone;
    }
}

fn merge<T>(current: &mut Option<T>, incoming: Option<T>) {
    if incoming.is_some() {
        *current = incoming;
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn account() -> Account {
        let created = Utc.timestamp_opt(0, 0).unwrap();
        Account {
            id: 1,
            client_id: Some(1),
            account_key: Some("3001234567".to_string()),
            balance: 1000.0,
            account_type: Some("Ahorros".to_string()),
            bank: Some("BBVA".to_string()),
            creation_date: created,
            modification_date: created,
        }
    }

    fn client() -> Client {
        let created = Utc.timestamp_opt(0, 0).unwrap();
        Client {
            id: 1,
            name: Some("Ana".to_string()),
            last_name: Some("Gomez".to_string()),
            document_type: Some("CC".to_string()),
            document_number: Some("1020304050".to_string()),
            email: Some("ana@example.com".to_string()),
            phone: Some("3001234567".to_string()),
            creation_date: created,
            modification_date: created,
        }
    }

    #[test]
    fn account_patch_keeps_omitted_fields() {
        let mut account = account();
        AccountPatch {
            bank: Some("Bancolombia".to_string()),
            ..Default::default()
        }
        .merge_into(&mut account);

        assert_eq!(account.bank.as_deref(), Some("Bancolombia"));
        assert_eq!(account.client_id, Some(1));
        assert_eq!(account.account_key.as_deref(), Some("3001234567"));
        assert_eq!(account.account_type.as_deref(), Some("Ahorros"));
        assert_eq!(account.balance, 1000.0);
    }

    #[test]
    fn client_patch_keeps_omitted_fields() {
        let mut client = client();
        ClientFields {
            email: Some("ana.gomez@example.com".to_string()),
            ..Default::default()
        }
        .merge_into(&mut client);

        assert_eq!(client.email.as_deref(), Some("ana.gomez@example.com"));
        assert_eq!(client.name.as_deref(), Some("Ana"));
        assert_eq!(client.document_number.as_deref(), Some("1020304050"));
    }

    #[test]
    fn client_replace_overwrites_contact_fields_only() {
        let mut client = client();
        ClientFields {
            name: Some("Ana Maria".to_string()),
            document_type: Some("TI".to_string()),
            ..Default::default()
        }
        .replace_into(&mut client);

        assert_eq!(client.name.as_deref(), Some("Ana Maria"));
        assert_eq!(client.last_name, None);
        assert_eq!(client.email, None);
        assert_eq!(client.phone, None);
        assert_eq!(client.document_type.as_deref(), Some("CC"));
    }
}
