//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "Movie".to_string(),
        id: "42".to_string(),
    };
    assert_eq!(err.to_string(), "Entity not found: Movie with id '42'");
}

#[test]
fn movie_not_found_shorthand_uses_movie_entity() {
    let err = DbError::movie_not_found(7);
    assert!(matches!(
        err,
        DbError::NotFound { ref entity_type, ref id } if entity_type == "Movie" && id == "7"
    ));
}

#[test]
fn constraint_error_displays_correctly() {
    let err = DbError::Constraint {
        message: "NOT NULL constraint failed: movies.name".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Constraint violation: NOT NULL constraint failed: movies.name"
    );
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "no such table: movies".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: no such table: movies");
}

#[test]
fn migration_error_displays_correctly() {
    let err = DbError::Migration {
        message: "failed to apply migration 20250101000000".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Migration error: failed to apply migration 20250101000000"
    );
}

#[test]
fn pool_closed_maps_to_connection_error() {
    let err = DbError::from(sqlx::Error::PoolClosed);
    assert!(matches!(err, DbError::Connection { .. }));
}

#[test]
fn row_not_found_maps_to_database_error() {
    let err = DbError::from(sqlx::Error::RowNotFound);
    assert!(matches!(err, DbError::Database { .. }));
}

#[test]
fn db_result_err_returns_error() {
    let result: DbResult<i32> = Err(DbError::movie_not_found(1));
    assert!(result.is_err());
}
