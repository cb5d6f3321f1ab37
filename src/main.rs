//! eth-personal
//!
//! Command line front end for the `personal_*` namespace. Loads
//! configuration from the environment/.env file, lets flags override it,
//! runs one operation against the node and prints the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use eth_personal::config::Config;
use eth_personal::{to_checksum_address, BackendKind, Personal, UnsignedTransaction};

#[derive(Parser, Debug)]
#[command(
    name = "eth-personal",
    about = "Manage keystore accounts of an Ethereum node over JSON-RPC",
    version
)]
struct Cli {
    /// JSON-RPC endpoint (overrides ETH_PERSONAL_RPC_URL)
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Node family: geth or ganache (overrides ETH_PERSONAL_BACKEND)
    #[arg(long, global = true)]
    backend: Option<BackendKind>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List keystore accounts
    Accounts,
    /// Create a new keystore account
    NewAccount {
        #[arg(long, env = "ETH_PERSONAL_PASSPHRASE", hide_env_values = true)]
        passphrase: String,
    },
    /// Import a raw private key into the keystore
    ImportRawKey {
        private_key: String,
        #[arg(long, env = "ETH_PERSONAL_PASSPHRASE", hide_env_values = true)]
        passphrase: String,
    },
    /// Unlock an account for a number of seconds
    Unlock {
        address: String,
        #[arg(long, env = "ETH_PERSONAL_PASSPHRASE", hide_env_values = true, default_value = "")]
        passphrase: String,
        #[arg(long, default_value_t = 300)]
        duration: u64,
    },
    /// Lock an account
    Lock { address: String },
    /// Sign data (hex or text) with a keystore account
    Sign {
        data: String,
        address: String,
        #[arg(long, env = "ETH_PERSONAL_PASSPHRASE", hide_env_values = true)]
        passphrase: String,
    },
    /// Recover the signer address of signed data
    EcRecover {
        data: String,
        signature: String,
        /// Print the checksum form instead of the node's raw output
        #[arg(long)]
        checksum: bool,
    },
    /// Sign a transaction without sending it
    SignTransaction(TxArgs),
    /// Sign and send a transaction
    SendTransaction(TxArgs),
}

#[derive(Args, Debug)]
struct TxArgs {
    #[arg(long)]
    from: String,
    #[arg(long)]
    to: Option<String>,
    #[arg(long)]
    value: Option<String>,
    #[arg(long)]
    gas: Option<String>,
    #[arg(long)]
    gas_price: Option<String>,
    #[arg(long)]
    max_fee_per_gas: Option<String>,
    #[arg(long)]
    max_priority_fee_per_gas: Option<String>,
    #[arg(long)]
    nonce: Option<String>,
    #[arg(long)]
    chain_id: Option<String>,
    #[arg(long)]
    data: Option<String>,
    #[arg(long, env = "ETH_PERSONAL_PASSPHRASE", hide_env_values = true, default_value = "")]
    passphrase: String,
}

impl TxArgs {
    fn to_transaction(&self) -> UnsignedTransaction {
        UnsignedTransaction {
            from: self.from.clone(),
            to: self.to.clone(),
            value: self.value.clone().map(Into::into),
            gas: self.gas.clone().map(Into::into),
            gas_price: self.gas_price.clone().map(Into::into),
            max_fee_per_gas: self.max_fee_per_gas.clone().map(Into::into),
            max_priority_fee_per_gas: self.max_priority_fee_per_gas.clone().map(Into::into),
            nonce: self.nonce.clone().map(Into::into),
            chain_id: self.chain_id.clone().map(Into::into),
            tx_type: None,
            data: self.data.clone(),
        }
    }
}

/// Log filter from the configured level, falling back to `info` when it does not parse.
fn log_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let mut config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(url) = cli.rpc_url {
        config.rpc_url = url;
    }
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    debug!("endpoint {} ({})", config.rpc_url, config.backend);

    let personal = Personal::from_config(&config).context("Failed to build HTTP transport")?;

    match cli.command {
        Command::Accounts => {
            for account in personal.get_accounts().await? {
                println!("{account}");
            }
        }
        Command::NewAccount { passphrase } => {
            println!("{}", personal.new_account(&passphrase).await?);
        }
        Command::ImportRawKey {
            private_key,
            passphrase,
        } => {
            println!("{}", personal.import_raw_key(&private_key, &passphrase).await?);
        }
        Command::Unlock {
            address,
            passphrase,
            duration,
        } => {
            println!(
                "{}",
                personal.unlock_account(&address, &passphrase, duration).await?
            );
        }
        Command::Lock { address } => {
            println!("{}", personal.lock_account(&address).await?);
        }
        Command::Sign {
            data,
            address,
            passphrase,
        } => {
            println!("{}", personal.sign(&data, &address, &passphrase).await?);
        }
        Command::EcRecover {
            data,
            signature,
            checksum,
        } => {
            let signer = personal.ec_recover(&data, &signature).await?;
            if checksum {
                println!("{}", to_checksum_address(&signer)?);
            } else {
                println!("{signer}");
            }
        }
        Command::SignTransaction(args) => {
            let tx = args.to_transaction();
            println!("{}", personal.sign_transaction(&tx, &args.passphrase).await?);
        }
        Command::SendTransaction(args) => {
            let tx = args.to_transaction();
            println!("{}", personal.send_transaction(&tx, &args.passphrase).await?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_level(level: &str) -> Config {
        Config {
            log_level: level.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_log_filter_uses_configured_level() {
        assert_eq!(log_filter(&config_with_level("debug")).to_string(), "debug");
        assert_eq!(
            log_filter(&config_with_level("eth_personal=trace")).to_string(),
            "eth_personal=trace"
        );
    }

    #[test]
    fn test_log_filter_falls_back_to_info() {
        assert_eq!(log_filter(&config_with_level("eth_personal=loud")).to_string(), "info");
    }
}
