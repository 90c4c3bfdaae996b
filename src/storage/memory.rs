use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Result, anyhow, bail};

use crate::domain::{Wallet, WalletId};

use super::WalletStore;

/// In-process wallet store. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    wallets: Mutex<BTreeMap<WalletId, Wallet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn wallets(&self) -> Result<MutexGuard<'_, BTreeMap<WalletId, Wallet>>> {
        self.wallets
            .lock()
            .map_err(|_| anyhow!("Wallet store lock poisoned"))
    }
}

impl WalletStore for MemoryStore {
    async fn get(&self, id: WalletId) -> Result<Option<Wallet>> {
        Ok(self.wallets()?.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Wallet>> {
        Ok(self.wallets()?.values().cloned().collect())
    }

    async fn insert(&self, wallet: &Wallet) -> Result<()> {
        let mut wallets = self.wallets()?;
        if wallets.contains_key(&wallet.id) {
            bail!("Wallet id {} already taken", wallet.id);
        }
        wallets.insert(wallet.id, wallet.clone());
        Ok(())
    }

    async fn update(&self, wallet: &Wallet) -> Result<bool> {
        let mut wallets = self.wallets()?;
        match wallets.get_mut(&wallet.id) {
            Some(existing) => {
                *existing = wallet.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: WalletId) -> Result<bool> {
        Ok(self.wallets()?.remove(&id).is_some())
    }
}
