//! User repository - the gateway's operations over the users collection.
//!
//! Identifiers are assigned here, on create; callers never pick ids.
//! Absence is reported as `Ok(None)` / `Ok(false)` rather than an error so
//! that callers can distinguish not-found from store failures without
//! inspecting messages.

use crate::{DbError, Result as DbErrorResult};

use um_core::{NewUser, User};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user record, assigning its id.
    ///
    /// Returns `DbError::UniqueViolation` when the email is already taken.
    pub async fn create(&self, new_user: NewUser) -> DbErrorResult<User> {
        let user = User::from_new(Uuid::new_v4(), new_user);
        let id = user.id.to_string();

        sqlx::query(
            r#"
                INSERT INTO users (id, name, email, password)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, name, email, password
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| user_from_row(&r)).transpose()
    }

    /// All user records, in the store's natural order.
    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, email, password
                FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(user_from_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Overwrite the record's mutable fields. The id never changes.
    ///
    /// Returns `DbError::UniqueViolation` when the new email is already
    /// taken by another record.
    pub async fn update(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();

        sqlx::query(
            r#"
                UPDATE users
                SET name = ?, email = ?, password = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove the record. Returns `false` when no record had that id.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query(
            r#"
                DELETE FROM users
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
    })
}
