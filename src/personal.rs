use serde_json::Value;
use tracing::info;

use crate::codec::hex::{decode_fixed, message_to_hex};
use crate::codec::Address;
use crate::config::Config;
use crate::dispatch::{dispatch, Call, HttpTransport, Method, TransactionRequest, Transport};
use crate::error::{Error, Result};
use crate::mapper::reply::{
    expect_address, expect_address_list, expect_bool, expect_hex, expect_raw_address,
};
use crate::mapper::{Backend, BackendKind, HASH_BYTES, SIGNATURE_BYTES};
use crate::normalizer::{normalize_transaction, UnsignedTransaction};

/// Client for the `personal_*` namespace.
///
/// Holds only the transport and the backend dialect; every method is a
/// single round trip and may be called concurrently.
pub struct Personal<T> {
    transport: T,
    backend: Box<dyn Backend>,
}

impl Personal<HttpTransport> {
    /// HTTP client built from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpTransport::from_config(config)?, config.backend))
    }
}

impl<T: Transport> Personal<T> {
    pub fn new(transport: T, backend: BackendKind) -> Self {
        Self::with_backend(transport, backend.into_backend())
    }

    pub fn with_backend(transport: T, backend: Box<dyn Backend>) -> Self {
        Self { transport, backend }
    }

    pub fn backend(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, call: Call<'_>) -> Result<Value> {
        let method = call.method();
        let reply = dispatch(&self.transport, &call).await?;
        Ok(self.backend.adjust_reply(method, reply))
    }

    /// Create a keystore account locked with `passphrase`.
    pub async fn new_account(&self, passphrase: &str) -> Result<Address> {
        let reply = self.call(Call::NewAccount { passphrase }).await?;
        let address = expect_address(Method::NewAccount, &reply)?;
        info!("created keystore account {}", address);
        Ok(address)
    }

    /// Import a 32-byte raw private key, with or without `0x`.
    pub async fn import_raw_key(&self, private_key: &str, passphrase: &str) -> Result<Address> {
        let bytes = decode_fixed(private_key, 32).ok_or(Error::InvalidPrivateKey)?;
        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes);

        let call = Call::ImportRawKey {
            key: self.backend.encode_private_key(&key),
            passphrase,
        };
        let reply = self.call(call).await?;
        let address = expect_address(Method::ImportRawKey, &reply)?;
        info!("imported keystore account {}", address);
        Ok(address)
    }

    /// Unlock `address` for `duration` seconds.
    pub async fn unlock_account(
        &self,
        address: &str,
        passphrase: &str,
        duration: u64,
    ) -> Result<bool> {
        let call = Call::UnlockAccount {
            address: address.parse()?,
            passphrase,
            duration,
        };
        let reply = self.call(call).await?;
        expect_bool(Method::UnlockAccount, &reply)
    }

    pub async fn lock_account(&self, address: &str) -> Result<bool> {
        let call = Call::LockAccount {
            address: address.parse()?,
        };
        let reply = self.call(call).await?;
        expect_bool(Method::LockAccount, &reply)
    }

    /// Keystore accounts, in node order. Never cached.
    pub async fn get_accounts(&self) -> Result<Vec<Address>> {
        let reply = self.call(Call::ListAccounts).await?;
        expect_address_list(Method::ListAccounts, &reply)
    }

    /// Sign `data` (hex, or text to be UTF-8 encoded) with a keystore key.
    /// Returns the 65-byte signature as hex.
    pub async fn sign(&self, data: &str, address: &str, passphrase: &str) -> Result<String> {
        let call = Call::Sign {
            data: message_to_hex(data),
            address: address.parse()?,
            passphrase,
        };
        let reply = self.call(call).await?;
        expect_hex(Method::Sign, &reply, Some(SIGNATURE_BYTES))
    }

    /// Recover the signer of `data`.
    ///
    /// The address comes back exactly as the node sent it, which is
    /// lowercase for the supported nodes. Compare it through
    /// [`crate::to_checksum_address`].
    pub async fn ec_recover(&self, data: &str, signature: &str) -> Result<String> {
        let signature_bytes =
            decode_fixed(signature, SIGNATURE_BYTES).ok_or_else(|| Error::InvalidHex {
                field: "signature",
                value: signature.to_string(),
            })?;
        let call = Call::EcRecover {
            data: message_to_hex(data),
            signature: format!("0x{}", hex::encode(signature_bytes)),
        };
        let reply = self.call(call).await?;
        expect_raw_address(Method::EcRecover, &reply)
    }

    /// Sign a transaction with the keystore key of `tx.from`, without sending it.
    /// Returns the signed envelope as hex.
    pub async fn sign_transaction(
        &self,
        tx: &UnsignedTransaction,
        passphrase: &str,
    ) -> Result<String> {
        let call = Call::SignTransaction {
            tx: encode_transaction(tx)?,
            passphrase,
        };
        let reply = self.call(call).await?;
        expect_hex(Method::SignTransaction, &reply, None)
    }

    /// Sign and submit a transaction. Returns the transaction hash.
    pub async fn send_transaction(
        &self,
        tx: &UnsignedTransaction,
        passphrase: &str,
    ) -> Result<String> {
        let call = Call::SendTransaction {
            tx: encode_transaction(tx)?,
            passphrase,
        };
        let reply = self.call(call).await?;
        expect_hex(Method::SendTransaction, &reply, Some(HASH_BYTES))
    }
}

fn encode_transaction(tx: &UnsignedTransaction) -> Result<TransactionRequest> {
    TransactionRequest::try_from(normalize_transaction(tx)?)
}
