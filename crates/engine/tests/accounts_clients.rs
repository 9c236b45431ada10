use sea_orm::Database;

use engine::{AccountNew, AccountPatch, ClientFields, Engine};
use migration::MigratorTrait;

async fn engine() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

fn ana() -> ClientFields {
    ClientFields {
        name: Some("Ana".to_string()),
        last_name: Some("Gomez".to_string()),
        document_type: Some("CC".to_string()),
        document_number: Some("1020304050".to_string()),
        email: Some("ana@example.com".to_string()),
        phone: Some("3001234567".to_string()),
    }
}

#[tokio::test]
async fn new_account_defaults_balance_to_zero() {
    let engine = engine().await;

    let account = engine
        .new_account(AccountNew {
            client_id: Some(7),
            account_key: Some("3001234567".to_string()),
            account_type: Some("Ahorros".to_string()),
            bank: Some("BBVA".to_string()),
            initial_balance: None,
        })
        .await
        .unwrap();

    assert_eq!(account.balance, 0.0);
    assert_eq!(account.client_id, Some(7));
    assert_eq!(account.creation_date, account.modification_date);
    assert_eq!(engine.account(account.id).await.unwrap(), Some(account));
}

#[tokio::test]
async fn new_account_rejects_non_finite_balance() {
    let engine = engine().await;

    let err = engine
        .new_account(AccountNew {
            initial_balance: Some(f64::NAN),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        engine::EngineError::InvalidAmount("initial balance must be a finite number".to_string())
    );
}

#[tokio::test]
async fn account_partial_update_keeps_omitted_fields_and_balance() {
    let engine = engine().await;
    let created = engine
        .new_account(AccountNew {
            client_id: Some(1),
            account_key: Some("3001234567".to_string()),
            initial_balance: Some(1000.0),
            account_type: Some("Ahorros".to_string()),
            bank: Some("BBVA".to_string()),
        })
        .await
        .unwrap();

    let updated = engine
        .update_account(
            created.id,
            AccountPatch {
                bank: Some("Bancolombia".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.bank.as_deref(), Some("Bancolombia"));
    assert_eq!(updated.client_id, Some(1));
    assert_eq!(updated.account_key.as_deref(), Some("3001234567"));
    assert_eq!(updated.account_type.as_deref(), Some("Ahorros"));
    assert_eq!(updated.balance, 1000.0);
    assert_eq!(updated.creation_date, created.creation_date);
    assert!(updated.modification_date >= created.modification_date);
}

#[tokio::test]
async fn missing_account_reads_and_updates_are_none() {
    let engine = engine().await;

    assert_eq!(engine.account(3).await.unwrap(), None);
    assert_eq!(
        engine
            .update_account(3, AccountPatch::default())
            .await
            .unwrap(),
        None
    );
    engine.delete_account(3).await.unwrap();
}

#[tokio::test]
async fn accounts_are_listed_and_deleted() {
    let engine = engine().await;
    let first = engine.new_account(AccountNew::default()).await.unwrap();
    let second = engine.new_account(AccountNew::default()).await.unwrap();

    let ids: Vec<i64> = engine
        .accounts()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);

    engine.delete_account(first.id).await.unwrap();
    assert_eq!(engine.account(first.id).await.unwrap(), None);
    assert_eq!(engine.accounts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn client_crud() {
    let engine = engine().await;
    let client = engine.new_client(ana()).await.unwrap();
    assert_eq!(client.name.as_deref(), Some("Ana"));

    assert_eq!(engine.client(client.id).await.unwrap(), Some(client.clone()));
    assert_eq!(engine.clients().await.unwrap(), vec![client.clone()]);

    engine.delete_client(client.id).await.unwrap();
    assert_eq!(engine.client(client.id).await.unwrap(), None);
    assert!(engine.clients().await.unwrap().is_empty());
}

#[tokio::test]
async fn client_partial_update_skips_absent_fields() {
    let engine = engine().await;
    let client = engine.new_client(ana()).await.unwrap();

    let updated = engine
        .update_client(
            client.id,
            ClientFields {
                phone: Some("3109876543".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.phone.as_deref(), Some("3109876543"));
    assert_eq!(updated.name, client.name);
    assert_eq!(updated.email, client.email);
    assert_eq!(updated.document_number, client.document_number);
}

#[tokio::test]
async fn client_replace_overwrites_contact_fields() {
    let engine = engine().await;
    let client = engine.new_client(ana()).await.unwrap();

    let replaced = engine
        .replace_client(
            client.id,
            ClientFields {
                name: Some("Ana Maria".to_string()),
                email: Some("am@example.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.name.as_deref(), Some("Ana Maria"));
    assert_eq!(replaced.email.as_deref(), Some("am@example.com"));
    assert_eq!(replaced.last_name, None);
    assert_eq!(replaced.phone, None);
    assert_eq!(replaced.document_type.as_deref(), Some("CC"));

    assert_eq!(
        engine.replace_client(999, ana()).await.unwrap(),
        None
    );
}
