//! Database integration tests.
//!
//! These tests require a running `PostgreSQL` instance.
//! Run with: `cargo test --test db_integration -- --ignored`
//!
//! Environment variables:
//!   `TEST_DB_HOST` (default: localhost)
//!   `TEST_DB_PORT` (default: 5433)
//!   `TEST_DB_USER` (default: `workbridge_test`)
//!   `TEST_DB_PASSWORD` (default: `workbridge_test`)
//!   `TEST_DB_NAME` (default: `workbridge_test`)

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use workbridge_common::IdGenerator;
use workbridge_db::entities::{User, user};
use workbridge_db::repositories::{GitSshKeyRepository, UserRepository};
use workbridge_db::test_utils::{TestDatabase, TestDbConfig};

async fn seed_user(conn: &Arc<DatabaseConnection>, id: &str, username: &str) -> user::Model {
    let repo = UserRepository::new(Arc::clone(conn));
    repo.create(user::ActiveModel {
        id: Set(id.to_string()),
        username: Set(username.to_string()),
        token: Set(Some(IdGenerator::new().generate_token())),
        is_operator: Set(false),
        created_at: Set(Utc::now().into()),
    })
    .await
    .unwrap()
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_database_connection() {
    let config = TestDbConfig::default();
    let result = TestDatabase::with_config(config).await;
    assert!(result.is_ok(), "Failed to connect: {:?}", result.err());
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_upsert_creates_key() {
    let db = TestDatabase::create_unique().await.unwrap();
    let conn = Arc::new(sea_orm::Database::connect(db.config.database_url()).await.unwrap());

    seed_user(&conn, "u1", "alice").await;

    let repo = GitSshKeyRepository::new(Arc::clone(&conn));
    repo.upsert("u1", "private1", "public1", Utc::now().into())
        .await
        .unwrap();

    let key = repo.get_by_user_id("u1").await.unwrap();
    assert_eq!(key.public_key, "public1");
    assert_eq!(key.private_key, "private1");
    assert_eq!(key.created_at, key.updated_at);

    db.drop_database().await.unwrap();
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_upsert_replaces_key_preserving_created_at() {
    let db = TestDatabase::create_unique().await.unwrap();
    let conn = Arc::new(sea_orm::Database::connect(db.config.database_url()).await.unwrap());

    seed_user(&conn, "u1", "alice").await;

    let repo = GitSshKeyRepository::new(Arc::clone(&conn));
    let t1 = Utc::now();
    repo.upsert("u1", "private1", "public1", t1.into())
        .await
        .unwrap();
    let first = repo.get_by_user_id("u1").await.unwrap();

    let t2 = t1 + Duration::seconds(5);
    repo.upsert("u1", "private2", "public2", t2.into())
        .await
        .unwrap();
    let second = repo.get_by_user_id("u1").await.unwrap();

    // Full replace of both halves
    assert_eq!(second.public_key, "public2");
    assert_eq!(second.private_key, "private2");
    assert_ne!(second.public_key, first.public_key);

    // updated_at moves, created_at keeps the first-issuance time
    assert!(second.updated_at > first.updated_at);
    assert_eq!(second.created_at, first.created_at);

    db.drop_database().await.unwrap();
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_read_does_not_create() {
    let db = TestDatabase::create_unique().await.unwrap();
    let conn = Arc::new(sea_orm::Database::connect(db.config.database_url()).await.unwrap());

    seed_user(&conn, "u1", "alice").await;

    let repo = GitSshKeyRepository::new(Arc::clone(&conn));
    assert!(repo.find_by_user_id("u1").await.unwrap().is_none());

    // A second read still finds nothing: the first one created no row
    assert!(repo.find_by_user_id("u1").await.unwrap().is_none());

    db.drop_database().await.unwrap();
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_user_delete_cascades_to_key() {
    let db = TestDatabase::create_unique().await.unwrap();
    let conn = Arc::new(sea_orm::Database::connect(db.config.database_url()).await.unwrap());

    seed_user(&conn, "u1", "alice").await;

    let repo = GitSshKeyRepository::new(Arc::clone(&conn));
    repo.upsert("u1", "private1", "public1", Utc::now().into())
        .await
        .unwrap();

    User::delete_by_id("u1").exec(conn.as_ref()).await.unwrap();

    assert!(repo.find_by_user_id("u1").await.unwrap().is_none());

    db.drop_database().await.unwrap();
}
