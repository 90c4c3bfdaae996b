use anyhow::anyhow;
use tracing::{debug, info, warn};

use crate::domain::{Points, Wallet, WalletId};
use crate::storage::{Repository, WalletStore};

use super::AppError;

/// Application service providing the wallet operations.
/// This is the primary interface for any client (CLI, HTTP, tests).
pub struct WalletLedger<S = Repository> {
    store: S,
}

impl WalletLedger<Repository> {
    /// Open (or create) a database at the given path and ensure the schema exists.
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let repo = Repository::init(&db_url).await?;
        Ok(Self::new(repo))
    }

    /// Connect to an existing database.
    pub async fn connect(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}", database_path);
        let repo = Repository::connect(&db_url).await?;
        Ok(Self::new(repo))
    }
}

impl<S: WalletStore> WalletLedger<S> {
    /// Create a new ledger over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a new wallet with exactly the supplied fields.
    pub async fn create_wallet(&self, wallet: Wallet) -> Result<Wallet, AppError> {
        if !wallet.points.is_finite() {
            return Err(AppError::InvalidAmount(format!(
                "Points must be a finite number, got {}",
                wallet.points
            )));
        }

        if self.store.get(wallet.id).await?.is_some() {
            return Err(AppError::WalletAlreadyExists(wallet.id));
        }

        self.store.insert(&wallet).await?;
        info!(wallet_id = wallet.id, user = %wallet.user, points = wallet.points, "wallet created");

        self.store
            .get(wallet.id)
            .await?
            .ok_or_else(|| anyhow!("Wallet {} missing right after insert", wallet.id).into())
    }

    /// Get a wallet by id.
    pub async fn get_wallet(&self, id: WalletId) -> Result<Wallet, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or(AppError::WalletNotFound(id))
    }

    /// List all wallets.
    pub async fn list_wallets(&self) -> Result<Vec<Wallet>, AppError> {
        Ok(self.store.list().await?)
    }

    /// Add points to a wallet. Any finite amount is applied, including zero
    /// and negative values.
    pub async fn add_points(&self, id: WalletId, amount: Points) -> Result<Wallet, AppError> {
        if !amount.is_finite() {
            return Err(AppError::InvalidAmount(format!(
                "Amount must be a finite number, got {}",
                amount
            )));
        }

        let mut wallet = self.get_wallet(id).await?;
        let balance = wallet.points + amount;
        if !balance.is_finite() {
            return Err(AppError::InvalidAmount(format!(
                "Adding {} to wallet {} overflows the balance",
                amount, id
            )));
        }

        wallet.points = balance;
        self.save(&wallet).await?;

        info!(wallet_id = id, amount, balance = wallet.points, "points added");
        Ok(wallet)
    }

    /// Withdraw points from a wallet. The balance may reach zero but never
    /// go below it.
    pub async fn withdraw_points(&self, id: WalletId, amount: Points) -> Result<Wallet, AppError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(AppError::InvalidAmount(format!(
                "Amount must be a non-negative number, got {}",
                amount
            )));
        }

        let mut wallet = self.get_wallet(id).await?;
        if !wallet.can_cover(amount) {
            warn!(wallet_id = id, amount, balance = wallet.points, "withdrawal rejected");
            return Err(AppError::InsufficientBalance {
                wallet_id: id,
                balance: wallet.points,
                requested: amount,
            });
        }

        wallet.points -= amount;
        self.save(&wallet).await?;

        info!(wallet_id = id, amount, balance = wallet.points, "points withdrawn");
        Ok(wallet)
    }

    /// Delete a wallet permanently.
    pub async fn delete_wallet(&self, id: WalletId) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(AppError::WalletNotFound(id));
        }

        info!(wallet_id = id, "wallet deleted");
        Ok(())
    }

    async fn save(&self, wallet: &Wallet) -> Result<(), AppError> {
        // The row can vanish between read and write when a delete races us.
        if !self.store.update(wallet).await? {
            debug!(wallet_id = wallet.id, "wallet disappeared before update");
            return Err(AppError::WalletNotFound(wallet.id));
        }
        Ok(())
    }
}
