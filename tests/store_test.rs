//! Integration tests for the record store against a live database
//!
//! These tests exercise the full create path: flatten a request, insert the
//! user row, insert the converted item records with their owner assigned,
//! and read everything back. They run only when DATABASE_URL is set and are
//! skipped otherwise.

use flathaus::prelude::*;

#[derive(Debug, Clone, Schema)]
#[schema(name = "store_test_item")]
pub struct StoreTestItem {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Schema)]
#[schema(name = "store_test_user")]
pub struct StoreTestUser {
    pub username: String,
    pub password: String,
    #[field(nested_list)]
    pub items: Vec<StoreTestItem>,
}

static TEST_USERS: TableSpec = TableSpec::new(
    "store_test_users",
    &[
        ColumnSpec::new("id", "BIGSERIAL").primary_key(),
        ColumnSpec::new("username", "TEXT"),
        ColumnSpec::new("password", "TEXT"),
        ColumnSpec::new("is_active", "BOOLEAN").default_sql("TRUE"),
    ],
);

static TEST_ITEMS: TableSpec = TableSpec::new(
    "store_test_items",
    &[
        ColumnSpec::new("id", "BIGSERIAL").primary_key(),
        ColumnSpec::new("title", "TEXT"),
        ColumnSpec::new("description", "TEXT").nullable(),
        ColumnSpec::new("owner_id", "BIGINT").nullable(),
    ],
);

async fn setup_pool() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPool::connect(&url)
        .await
        .expect("failed to connect to DATABASE_URL");

    sqlx::query("DROP TABLE IF EXISTS store_test_items")
        .execute(&pool)
        .await
        .expect("failed to drop items table");
    sqlx::query("DROP TABLE IF EXISTS store_test_users")
        .execute(&pool)
        .await
        .expect("failed to drop users table");

    for spec in [&TEST_USERS, &TEST_ITEMS] {
        sqlx::query(&spec.create_table_sql())
            .execute(&pool)
            .await
            .expect("failed to create table");
    }

    Some(pool)
}

fn registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry.register::<StoreTestItem>().unwrap();
    registry.register::<StoreTestUser>().unwrap();
    registry.map_record::<StoreTestItem>(&TEST_ITEMS).unwrap();
    registry.validate().unwrap();
    registry
}

#[tokio::test]
async fn test_create_user_with_items_round_trip() {
    let Some(pool) = setup_pool().await else {
        return;
    };
    let store = PgRecordStore::new(pool);
    let registry = registry();

    let user = StoreTestUser {
        username: "bob".to_string(),
        password: "y".to_string(),
        items: vec![
            StoreTestItem {
                title: "t1".to_string(),
                description: None,
            },
            StoreTestItem {
                title: "t2".to_string(),
                description: Some("d2".to_string()),
            },
        ],
    };

    let mut columns = flatten(&user, &registry).unwrap();
    let items = columns.remove("items").unwrap();

    let user_record = TableRecord::from_fields(&TEST_USERS, columns).unwrap();
    let user_id = store.insert(&user_record).await.unwrap();
    assert!(user_id > 0);

    let Value::Array(item_values) = items else {
        panic!("items should flatten to an array");
    };
    for value in item_values {
        let Value::Record(record) = value else {
            panic!("item should flatten to a record");
        };
        store
            .insert_with(&record, &[("owner_id", Value::BigInt(user_id))])
            .await
            .unwrap();
    }

    let row = store
        .fetch_by_id(&TEST_USERS, user_id)
        .await
        .unwrap()
        .expect("inserted user should exist");
    assert_eq!(row["username"], Value::Text("bob".to_string()));
    // The database default applies when the record leaves the column unset
    assert_eq!(row["is_active"], Value::Boolean(true));

    let items = store
        .fetch_by_column(&TEST_ITEMS, "owner_id", &Value::BigInt(user_id))
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], Value::Text("t1".to_string()));
    assert_eq!(items[0]["description"], Value::Null);
    assert_eq!(items[1]["description"], Value::Text("d2".to_string()));
}

// Separate table so this test cannot race the round-trip test's setup
static LOOKUP_USERS: TableSpec = TableSpec::new(
    "store_test_lookup_users",
    &[
        ColumnSpec::new("id", "BIGSERIAL").primary_key(),
        ColumnSpec::new("username", "TEXT"),
    ],
);

#[tokio::test]
async fn test_fetch_missing_user_returns_none() {
    let Some(url) = std::env::var("DATABASE_URL").ok() else {
        return;
    };
    let pool = PgPool::connect(&url)
        .await
        .expect("failed to connect to DATABASE_URL");
    sqlx::query(&LOOKUP_USERS.create_table_sql())
        .execute(&pool)
        .await
        .expect("failed to create table");
    let store = PgRecordStore::new(pool);

    let row = store.fetch_by_id(&LOOKUP_USERS, i64::MAX).await.unwrap();
    assert!(row.is_none());
}
