use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};

use crate::domain::{Wallet, WalletId};

use super::{MIGRATION_001_INITIAL, WalletStore};

/// Repository for persisting and querying wallets in SQLite.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations. Safe to run against an existing schema.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;

        Ok(())
    }

    /// Initialize a database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let repo = Self::connect(database_url).await?;
        repo.migrate().await?;
        Ok(repo)
    }

    /// Close the underlying pool, waiting for checked-out connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn row_to_wallet(row: &sqlx::sqlite::SqliteRow) -> Result<Wallet> {
        Ok(Wallet {
            id: row.try_get("id").context("Invalid wallet id")?,
            user: row.try_get("user").context("Invalid wallet user")?,
            points: row.try_get("points").context("Invalid wallet points")?,
            description: row
                .try_get("description")
                .context("Invalid wallet description")?,
        })
    }
}

impl WalletStore for Repository {
    async fn get(&self, id: WalletId) -> Result<Option<Wallet>> {
        let row = sqlx::query(
            r#"
            SELECT id, "user", points, description
            FROM wallet
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch wallet")?;

        match row {
            Some(row) => Ok(Some(Self::row_to_wallet(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Wallet>> {
        let rows = sqlx::query(r#"SELECT id, "user", points, description FROM wallet ORDER BY id"#)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list wallets")?;

        rows.iter().map(Self::row_to_wallet).collect()
    }

    async fn insert(&self, wallet: &Wallet) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO wallet (id, "user", points, description)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(wallet.id)
        .bind(&wallet.user)
        .bind(wallet.points)
        .bind(&wallet.description)
        .execute(&self.pool)
        .await
        .context("Failed to save wallet")?;
        Ok(())
    }

    async fn update(&self, wallet: &Wallet) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE wallet
            SET "user" = ?, points = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(&wallet.user)
        .bind(wallet.points)
        .bind(&wallet.description)
        .bind(wallet.id)
        .execute(&self.pool)
        .await
        .context("Failed to update wallet")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: WalletId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM wallet WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete wallet")?;

        Ok(result.rows_affected() > 0)
    }
}
