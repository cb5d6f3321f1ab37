use std::fmt;

use serde_json::{json, Value};

use super::types::TransactionRequest;
use crate::codec::Address;

/// The nine `personal_*` JSON-RPC methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    NewAccount,
    ImportRawKey,
    UnlockAccount,
    LockAccount,
    ListAccounts,
    Sign,
    EcRecover,
    SignTransaction,
    SendTransaction,
}

impl Method {
    pub const ALL: [Method; 9] = [
        Method::NewAccount,
        Method::ImportRawKey,
        Method::UnlockAccount,
        Method::LockAccount,
        Method::ListAccounts,
        Method::Sign,
        Method::EcRecover,
        Method::SignTransaction,
        Method::SendTransaction,
    ];

    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::NewAccount => "personal_newAccount",
            Method::ImportRawKey => "personal_importRawKey",
            Method::UnlockAccount => "personal_unlockAccount",
            Method::LockAccount => "personal_lockAccount",
            Method::ListAccounts => "personal_listAccounts",
            Method::Sign => "personal_sign",
            Method::EcRecover => "personal_ecRecover",
            Method::SignTransaction => "personal_signTransaction",
            Method::SendTransaction => "personal_sendTransaction",
        }
    }

    /// Whether repeating the call can create a new account or transaction.
    pub fn is_idempotent(&self) -> bool {
        !matches!(
            self,
            Method::NewAccount | Method::ImportRawKey | Method::SendTransaction
        )
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully validated operation, ready to be put on the wire.
///
/// Passphrases are borrowed for the duration of the call only.
pub enum Call<'a> {
    NewAccount {
        passphrase: &'a str,
    },
    ImportRawKey {
        key: String,
        passphrase: &'a str,
    },
    UnlockAccount {
        address: Address,
        passphrase: &'a str,
        duration: u64,
    },
    LockAccount {
        address: Address,
    },
    ListAccounts,
    Sign {
        data: String,
        address: Address,
        passphrase: &'a str,
    },
    EcRecover {
        data: String,
        signature: String,
    },
    SignTransaction {
        tx: TransactionRequest,
        passphrase: &'a str,
    },
    SendTransaction {
        tx: TransactionRequest,
        passphrase: &'a str,
    },
}

impl Call<'_> {
    pub fn method(&self) -> Method {
        match self {
            Call::NewAccount { .. } => Method::NewAccount,
            Call::ImportRawKey { .. } => Method::ImportRawKey,
            Call::UnlockAccount { .. } => Method::UnlockAccount,
            Call::LockAccount { .. } => Method::LockAccount,
            Call::ListAccounts => Method::ListAccounts,
            Call::Sign { .. } => Method::Sign,
            Call::EcRecover { .. } => Method::EcRecover,
            Call::SignTransaction { .. } => Method::SignTransaction,
            Call::SendTransaction { .. } => Method::SendTransaction,
        }
    }

    /// Positional parameters. Secrets come after the primary subject.
    pub fn params(&self) -> Vec<Value> {
        match self {
            Call::NewAccount { passphrase } => vec![json!(passphrase)],
            Call::ImportRawKey { key, passphrase } => vec![json!(key), json!(passphrase)],
            Call::UnlockAccount {
                address,
                passphrase,
                duration,
            } => vec![json!(address), json!(passphrase), json!(duration)],
            Call::LockAccount { address } => vec![json!(address)],
            Call::ListAccounts => vec![],
            Call::Sign {
                data,
                address,
                passphrase,
            } => vec![json!(data), json!(address), json!(passphrase)],
            Call::EcRecover { data, signature } => vec![json!(data), json!(signature)],
            Call::SignTransaction { tx, passphrase } | Call::SendTransaction { tx, passphrase } => {
                vec![json!(tx), json!(passphrase)]
            }
        }
    }
}

impl fmt::Debug for Call<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct(self.method().as_str());
        match self {
            Call::UnlockAccount {
                address, duration, ..
            } => d.field("address", address).field("duration", duration),
            Call::LockAccount { address } => d.field("address", address),
            Call::Sign { data, address, .. } => d.field("data", data).field("address", address),
            Call::EcRecover { data, signature } => {
                d.field("data", data).field("signature", signature)
            }
            Call::SignTransaction { tx, .. } | Call::SendTransaction { tx, .. } => {
                d.field("tx", tx)
            }
            Call::NewAccount { .. } | Call::ImportRawKey { .. } | Call::ListAccounts => &mut d,
        };
        d.finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> Address {
        "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap()
    }

    #[test]
    fn test_method_names_are_unique() {
        let mut names: Vec<_> = Method::ALL.iter().map(|m| m.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 9);
        assert!(names.iter().all(|n| n.starts_with("personal_")));
    }

    #[test]
    fn test_idempotency() {
        assert!(!Method::NewAccount.is_idempotent());
        assert!(!Method::SendTransaction.is_idempotent());
        assert!(Method::ListAccounts.is_idempotent());
        assert!(Method::SignTransaction.is_idempotent());
    }

    #[test]
    fn test_unlock_params() {
        let call = Call::UnlockAccount {
            address: addr(),
            passphrase: "",
            duration: 10_000,
        };
        assert_eq!(call.method(), Method::UnlockAccount);
        assert_eq!(
            call.params(),
            vec![
                json!("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
                json!(""),
                json!(10_000)
            ]
        );
    }

    #[test]
    fn test_sign_params_order() {
        let call = Call::Sign {
            data: "0xdeadbeaf".to_string(),
            address: addr(),
            passphrase: "123",
        };
        assert_eq!(
            call.params(),
            vec![
                json!("0xdeadbeaf"),
                json!("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
                json!("123")
            ]
        );
    }

    #[test]
    fn test_list_accounts_has_no_params() {
        assert!(Call::ListAccounts.params().is_empty());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let call = Call::ImportRawKey {
            key: "cd3376bb711cb332ee3fb2ca04c6a8b9f70c316fcdf7a1f44ef4c7999483295d".to_string(),
            passphrase: "password123",
        };
        let printed = format!("{call:?}");
        assert!(!printed.contains("cd3376bb"));
        assert!(!printed.contains("password123"));

        let call = Call::Sign {
            data: "0x2313".to_string(),
            address: addr(),
            passphrase: "abc",
        };
        let printed = format!("{call:?}");
        assert!(printed.contains("0x2313"));
        assert!(!printed.contains("\"abc\""));
    }
}
