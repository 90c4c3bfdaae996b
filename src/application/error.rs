use thiserror::Error;

use crate::domain::{Points, WalletId};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Wallet not found: {0}")]
    WalletNotFound(WalletId),

    #[error("Wallet already exists: {0}")]
    WalletAlreadyExists(WalletId),

    #[error("Insufficient points in wallet {wallet_id}: balance {balance}, requested {requested}")]
    InsufficientBalance {
        wallet_id: WalletId,
        balance: Points,
        requested: Points,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}
