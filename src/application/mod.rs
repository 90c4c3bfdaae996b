// Application layer - the wallet ledger and its error type.
// Both the HTTP server and the CLI drive wallets through `WalletLedger`.

pub mod error;
mod service;

pub use error::*;
pub use service::*;
