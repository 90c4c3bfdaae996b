use std::future::Future;

use anyhow::Result;

use crate::domain::{Wallet, WalletId};

/// Row-level access to persisted wallets.
///
/// Every method is a single statement against the backing store; business
/// rules (existence checks, balance checks) live in the ledger service.
pub trait WalletStore: Send + Sync {
    /// Fetch a wallet by id.
    fn get(&self, id: WalletId) -> impl Future<Output = Result<Option<Wallet>>> + Send;

    /// List every wallet, ordered by id.
    fn list(&self) -> impl Future<Output = Result<Vec<Wallet>>> + Send;

    /// Insert a new row with exactly the given fields.
    fn insert(&self, wallet: &Wallet) -> impl Future<Output = Result<()>> + Send;

    /// Overwrite an existing row. Returns false if no row has this id.
    fn update(&self, wallet: &Wallet) -> impl Future<Output = Result<bool>> + Send;

    /// Remove a row. Returns false if no row has this id.
    fn delete(&self, id: WalletId) -> impl Future<Output = Result<bool>> + Send;
}
