//! Favorite place persistence.
//!
//! A favorite is a (city, place name) pair. Place names are unique across
//! the whole store, not per city — see the schema comment in
//! `migrations/0001_create_favorites.sql`. Records are immutable once
//! created; the only way to remove them is [`clear_all`].

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during favorites operations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Place already saved: {0}")]
    DuplicatePlace(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Row returned by favorites queries.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct FavoriteRow {
    pub id: i64,
    pub city: String,
    pub place_name: String,
}

/// Save a favorite place. Returns the assigned row id.
///
/// Validation runs before any storage access: both fields must be
/// non-empty after trimming. A `place_name` that already exists anywhere
/// in the store fails with [`FavoritesError::DuplicatePlace`]; existing
/// rows are untouched either way.
pub async fn add(pool: &SqlitePool, city: &str, place_name: &str) -> Result<i64, FavoritesError> {
    if city.trim().is_empty() {
        return Err(FavoritesError::InvalidInput(
            "city must not be empty".into(),
        ));
    }
    if place_name.trim().is_empty() {
        return Err(FavoritesError::InvalidInput(
            "place name must not be empty".into(),
        ));
    }

    let result = sqlx::query("INSERT INTO favorites (city, place_name) VALUES (?1, ?2)")
        .bind(city)
        .bind(place_name)
        .execute(pool)
        .await;

    match result {
        Ok(r) => {
            let id = r.last_insert_rowid();
            debug!(id, city, place_name, "favorite saved");
            Ok(id)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(FavoritesError::DuplicatePlace(place_name.to_string()))
        }
        Err(e) => Err(FavoritesError::Unavailable(e)),
    }
}

/// List all favorites in insertion order (id ascending).
///
/// An empty store yields an empty vec, never an error.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<FavoriteRow>, FavoritesError> {
    let rows = sqlx::query_as::<_, FavoriteRow>(
        "SELECT id, city, place_name FROM favorites ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Delete every favorite unconditionally. Returns the number of rows
/// removed (zero on an empty store).
pub async fn clear_all(pool: &SqlitePool) -> Result<u64, FavoritesError> {
    let result = sqlx::query("DELETE FROM favorites").execute(pool).await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, migrate};

    async fn test_pool() -> SqlitePool {
        let pool = db::connect_memory().await.expect("in-memory pool");
        migrate::migrate(&pool).await.expect("migrations");
        pool
    }

    #[tokio::test]
    async fn add_then_list_contains_record_once() {
        let pool = test_pool().await;

        let id = add(&pool, "Paris", "Eiffel Tower").await.expect("add");
        assert!(id >= 1);

        let rows = list_all(&pool).await.expect("list");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].city, "Paris");
        assert_eq!(rows[0].place_name, "Eiffel Tower");
    }

    #[tokio::test]
    async fn duplicate_place_rejected_store_unchanged() {
        let pool = test_pool().await;

        add(&pool, "Paris", "Eiffel Tower").await.expect("add");
        let err = add(&pool, "Paris", "Eiffel Tower").await.unwrap_err();
        assert!(matches!(err, FavoritesError::DuplicatePlace(_)));

        let rows = list_all(&pool).await.expect("list");
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn duplicate_rejected_across_cities() {
        // Uniqueness is on place_name alone, not (city, place).
        let pool = test_pool().await;

        add(&pool, "Paris", "Eiffel Tower").await.expect("add");
        let err = add(&pool, "Rome", "Eiffel Tower").await.unwrap_err();
        assert!(matches!(err, FavoritesError::DuplicatePlace(_)));
    }

    #[tokio::test]
    async fn empty_fields_rejected_without_write() {
        let pool = test_pool().await;

        let err = add(&pool, "", "Eiffel Tower").await.unwrap_err();
        assert!(matches!(err, FavoritesError::InvalidInput(_)));

        let err = add(&pool, "Paris", "   ").await.unwrap_err();
        assert!(matches!(err, FavoritesError::InvalidInput(_)));

        let rows = list_all(&pool).await.expect("list");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn clear_all_is_idempotent_and_counts() {
        let pool = test_pool().await;

        assert_eq!(clear_all(&pool).await.expect("clear on empty"), 0);

        add(&pool, "Paris", "Eiffel Tower").await.expect("add");
        add(&pool, "Rome", "Colosseum").await.expect("add");

        assert_eq!(clear_all(&pool).await.expect("clear"), 2);
        assert!(list_all(&pool).await.expect("list").is_empty());
        assert_eq!(clear_all(&pool).await.expect("clear again"), 0);
    }

    #[tokio::test]
    async fn concurrent_same_place_one_wins() {
        let pool = test_pool().await;

        let (a, b) = tokio::join!(
            add(&pool, "Paris", "Eiffel Tower"),
            add(&pool, "Rome", "Eiffel Tower"),
        );

        assert!(a.is_ok() != b.is_ok(), "exactly one add should succeed");
        let dup = if a.is_ok() { b } else { a };
        assert!(matches!(dup, Err(FavoritesError::DuplicatePlace(_))));

        let rows = list_all(&pool).await.expect("list");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].place_name, "Eiffel Tower");
    }

    #[tokio::test]
    async fn full_lifecycle_scenario() {
        let pool = test_pool().await;

        let id = add(&pool, "Paris", "Eiffel Tower").await.expect("add");
        assert!(id >= 1);

        let rows = list_all(&pool).await.expect("list");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].city, "Paris");
        assert_eq!(rows[0].place_name, "Eiffel Tower");

        let err = add(&pool, "Rome", "Eiffel Tower").await.unwrap_err();
        assert!(matches!(err, FavoritesError::DuplicatePlace(_)));

        assert_eq!(clear_all(&pool).await.expect("clear"), 1);
        assert!(list_all(&pool).await.expect("list").is_empty());
    }
}
