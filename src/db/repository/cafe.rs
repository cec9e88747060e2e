//! Cafe Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Cafe, CafeCreate};

/// All cafes, ascending id
pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price FROM cafe ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(cafes)
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price FROM cafe WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price FROM cafe WHERE name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

/// Create a new cafe; the id is assigned by the database
pub async fn create(pool: &SqlitePool, data: CafeCreate) -> RepoResult<Cafe> {
    // Check duplicate name first for a clean message; the UNIQUE constraint
    // still backs this up under concurrent inserts
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Cafe '{}' already exists",
            data.name
        )));
    }

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO cafe (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.map_url)
    .bind(&data.img_url)
    .bind(&data.location)
    .bind(&data.seats)
    .bind(data.has_toilet)
    .bind(data.has_wifi)
    .bind(data.has_sockets)
    .bind(data.can_take_calls)
    .bind(&data.coffee_price)
    .fetch_one(pool)
    .await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create cafe".into()))
}

/// Overwrite `coffee_price` for an existing cafe
pub async fn update_price(pool: &SqlitePool, id: i64, new_price: &str) -> RepoResult<Cafe> {
    let rows = sqlx::query("UPDATE cafe SET coffee_price = ?1 WHERE id = ?2")
        .bind(new_price)
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cafe {id} not found")));
    }

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Cafe {id} not found")))
}

/// Hard delete; returns false when the id does not exist
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
