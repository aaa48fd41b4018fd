//! Tests for SQLite database connection and migrations.

use crate::db::{Database, Movie, MovieRepository, SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_movies_table() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("Migration should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    // _sqlx_migrations is created by sqlx for migration tracking.
    for table in ["_sqlx_migrations", "movies"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should succeed");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(db.pool())
        .await
        .expect("Query should succeed");

    assert_eq!(count, 0, "Fresh database should have no movies");
}

#[tokio::test(flavor = "multi_thread")]
async fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("movies.db");

    let db = SqliteDatabase::open(&path, 2)
        .await
        .expect("Open should succeed");
    db.migrate().await.expect("Migration should succeed");
    let saved = db
        .movies()
        .create(&Movie::new("Persisted"))
        .await
        .expect("Create should succeed");
    db.close().await;

    let reopened = SqliteDatabase::open(&path, 2)
        .await
        .expect("Reopen should succeed");
    reopened.migrate().await.expect("Migration should succeed");
    let movie = reopened
        .movies()
        .get(saved.id)
        .await
        .expect("Get should succeed");
    assert_eq!(movie.name, "Persisted");
    reopened.close().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn closed_pool_reports_connection_error() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db.close().await;

    let err = db.movies().list().await.expect_err("List should fail");
    assert!(matches!(err, crate::db::DbError::Connection { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn ping_succeeds_until_pool_is_closed() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.ping().await.expect("Ping should succeed on an open pool");

    db.close().await;
    let err = db.ping().await.expect_err("Ping should fail once closed");
    assert!(matches!(err, crate::db::DbError::Connection { .. }));
}
