use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::application::WalletLedger;
use crate::domain::{Points, Wallet, WalletId};
use crate::server;

/// Pointwallet - point balance wallets over HTTP
#[derive(Parser)]
#[command(name = "pointwallet")]
#[command(about = "A small point-balance wallet ledger backed by SQLite")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, env = "POINTWALLET_DATABASE", default_value = "pointwallet.db")]
    pub database: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Run the HTTP server
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "POINTWALLET_BIND", default_value = "127.0.0.1:8000")]
        bind: String,
    },

    /// Wallet management commands
    #[command(subcommand)]
    Wallet(WalletCommands),
}

#[derive(Subcommand)]
pub enum WalletCommands {
    /// Create a new wallet
    Create {
        /// Wallet id (must be unique)
        id: WalletId,

        /// Owner label
        user: String,

        /// Starting balance
        #[arg(allow_negative_numbers = true)]
        points: Points,

        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List all wallets
    List,

    /// Show a single wallet
    Show {
        /// Wallet id
        id: WalletId,
    },

    /// Add points to a wallet
    Add {
        /// Wallet id
        id: WalletId,

        /// Points to add
        #[arg(allow_negative_numbers = true)]
        points: Points,
    },

    /// Withdraw points from a wallet
    Withdraw {
        /// Wallet id
        id: WalletId,

        /// Points to withdraw
        #[arg(allow_negative_numbers = true)]
        points: Points,
    },

    /// Delete a wallet
    Delete {
        /// Wallet id
        id: WalletId,
    },
}

impl Cli {
    /// Default log filter, used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "pointwallet=debug,tower_http=debug,sqlx=info"
        } else {
            "pointwallet=info,tower_http=info,sqlx=warn"
        }
    }

    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Init => {
                WalletLedger::init(&self.database).await?;
                println!("Database initialized: {}", self.database);
            }

            Commands::Serve { bind } => {
                let ledger = WalletLedger::init(&self.database).await?;
                server::serve(ledger, &bind).await?;
            }

            Commands::Wallet(wallet_cmd) => {
                let ledger = WalletLedger::init(&self.database).await?;
                run_wallet_command(&ledger, wallet_cmd).await?;
            }
        }

        Ok(())
    }
}

async fn run_wallet_command(ledger: &WalletLedger, cmd: WalletCommands) -> Result<()> {
    match cmd {
        WalletCommands::Create {
            id,
            user,
            points,
            description,
        } => {
            let mut wallet = Wallet::new(id, user, points);
            if let Some(desc) = description {
                wallet = wallet.with_description(desc);
            }
            let wallet = ledger.create_wallet(wallet).await?;
            println!("Created wallet {} for {}", wallet.id, wallet.user);
        }

        WalletCommands::List => {
            let wallets = ledger.list_wallets().await?;
            if wallets.is_empty() {
                println!("No wallets found.");
            } else {
                println!("{:<8} {:<20} {:>12}", "ID", "USER", "POINTS");
                println!("{}", "-".repeat(42));
                for wallet in wallets {
                    println!("{:<8} {:<20} {:>12}", wallet.id, wallet.user, wallet.points);
                }
            }
        }

        WalletCommands::Show { id } => {
            let wallet = ledger.get_wallet(id).await?;
            println!("Wallet: {}", wallet.id);
            println!("  User:        {}", wallet.user);
            println!("  Points:      {}", wallet.points);
            if let Some(desc) = &wallet.description {
                println!("  Description: {}", desc);
            }
        }

        WalletCommands::Add { id, points } => {
            let wallet = ledger.add_points(id, points).await?;
            println!("Wallet {} balance: {}", wallet.id, wallet.points);
        }

        WalletCommands::Withdraw { id, points } => {
            let wallet = ledger.withdraw_points(id, points).await?;
            println!("Wallet {} balance: {}", wallet.id, wallet.points);
        }

        WalletCommands::Delete { id } => {
            ledger.delete_wallet(id).await?;
            println!("Deleted wallet: {}", id);
        }
    }

    Ok(())
}
