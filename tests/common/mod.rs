//! In-memory stand-in for a node's keystore, reachable through `Transport`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use sha3::{Digest, Keccak256};

use eth_personal::dispatch::Transport;
use eth_personal::{Error, Result, TransportError};

/// Envelope returned for the canonical EIP-1559 signing example.
pub const SIGNED_ENVELOPE: &str = "0x02f86e82053980841dcd65008459682f0082520894962f9a9c2a6c092474d24def35eccb3d9363265e82271080c001a02661e510e0a64d65694808278f11dacbee33f3d8bcb589d37a168e911ba5f97fa0488b98a76e25487e28d393757b25d22f7272e0a0b39da4c1b8c8cd45e3173819";

struct Account {
    passphrase: String,
    unlocked: bool,
}

#[derive(Default)]
struct NodeState {
    accounts: Vec<String>,
    keystore: HashMap<String, Account>,
    signatures: HashMap<(String, String), String>,
    calls: Vec<(String, Vec<Value>)>,
    overrides: HashMap<String, Value>,
    fail_transport: bool,
    created: u64,
}

/// Answers `personal_*` calls from memory. Addresses come back lowercase,
/// the way real nodes answer.
#[derive(Default)]
pub struct MockNode {
    state: Mutex<NodeState>,
    /// Answer `personal_signTransaction` with geth's `{ raw, tx }` object.
    geth_sign_result: bool,
    /// Answer `personal_sendTransaction` with a receipt object.
    receipt_result: bool,
}

fn keccak(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

fn rpc_error(message: &str) -> Error {
    Error::Rpc {
        code: -32000,
        message: message.to_string(),
        data: None,
    }
}

fn str_param(params: &[Value], i: usize) -> String {
    params
        .get(i)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl MockNode {
    pub fn geth() -> Self {
        Self {
            geth_sign_result: true,
            ..Default::default()
        }
    }

    pub fn ganache() -> Self {
        Self {
            receipt_result: true,
            ..Default::default()
        }
    }

    /// Make `method` answer `reply` regardless of its parameters.
    pub fn override_reply(&self, method: &str, reply: Value) {
        self.state
            .lock()
            .unwrap()
            .overrides
            .insert(method.to_string(), reply);
    }

    /// Make every call fail at the transport level.
    pub fn fail_transport(&self) {
        self.state.lock().unwrap().fail_transport = true;
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn last_params(&self, method: &str) -> Vec<Value> {
        self.calls()
            .into_iter()
            .rev()
            .find(|(m, _)| m == method)
            .map(|(_, p)| p)
            .unwrap_or_default()
    }

    pub fn is_unlocked(&self, address: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .keystore
            .get(&address.to_lowercase())
            .map(|a| a.unlocked)
            .unwrap_or(false)
    }

    fn handle(&self, state: &mut NodeState, method: &str, params: &[Value]) -> Result<Value> {
        match method {
            "personal_newAccount" => {
                state.created += 1;
                let hash = keccak(&state.created.to_be_bytes());
                let address = format!("0x{}", hex::encode(&hash[12..]));
                state.insert(&address, &str_param(params, 0));
                Ok(json!(address))
            }
            "personal_importRawKey" => {
                let key = str_param(params, 0);
                let key = key.trim_start_matches("0x");
                let hash = keccak(&hex::decode(key).map_err(|_| rpc_error("invalid hex"))?);
                let address = format!("0x{}", hex::encode(&hash[12..]));
                state.insert(&address, &str_param(params, 1));
                Ok(json!(address))
            }
            "personal_unlockAccount" => {
                let address = str_param(params, 0).to_lowercase();
                let passphrase = str_param(params, 1);
                let account = state
                    .keystore
                    .get_mut(&address)
                    .ok_or_else(|| rpc_error("no key for given address or file"))?;
                if account.passphrase != passphrase {
                    return Err(rpc_error("could not decrypt key with given password"));
                }
                account.unlocked = true;
                Ok(json!(true))
            }
            "personal_lockAccount" => {
                let address = str_param(params, 0).to_lowercase();
                match state.keystore.get_mut(&address) {
                    Some(account) => {
                        account.unlocked = false;
                        Ok(json!(true))
                    }
                    None => Ok(json!(false)),
                }
            }
            "personal_listAccounts" => Ok(json!(state.accounts)),
            "personal_sign" => {
                let data = str_param(params, 0);
                let address = str_param(params, 1).to_lowercase();
                state.check_passphrase(&address, &str_param(params, 2))?;

                let r = keccak(format!("{data}{address}").as_bytes());
                let s = keccak(&r);
                let signature = format!("0x{}{}1c", hex::encode(r), hex::encode(s));
                state
                    .signatures
                    .insert((data, signature.clone()), address);
                Ok(json!(signature))
            }
            "personal_ecRecover" => {
                let key = (str_param(params, 0), str_param(params, 1));
                state
                    .signatures
                    .get(&key)
                    .cloned()
                    .map(Value::String)
                    .ok_or_else(|| rpc_error("invalid signature"))
            }
            "personal_signTransaction" => {
                let tx = params.first().cloned().unwrap_or(Value::Null);
                let from = tx["from"].as_str().unwrap_or_default().to_lowercase();
                state.check_passphrase(&from, &str_param(params, 1))?;
                if self.geth_sign_result {
                    Ok(json!({ "raw": SIGNED_ENVELOPE, "tx": tx }))
                } else {
                    Ok(json!(SIGNED_ENVELOPE))
                }
            }
            "personal_sendTransaction" => {
                let tx = params.first().cloned().unwrap_or(Value::Null);
                let from = tx["from"].as_str().unwrap_or_default().to_lowercase();
                state.check_passphrase(&from, &str_param(params, 1))?;
                let hash = format!("0x{}", hex::encode(keccak(tx.to_string().as_bytes())));
                if self.receipt_result {
                    Ok(json!({ "transactionHash": hash, "status": "0x1" }))
                } else {
                    Ok(json!(hash))
                }
            }
            other => Err(Error::Rpc {
                code: -32601,
                message: format!("the method {other} does not exist/is not available"),
                data: None,
            }),
        }
    }
}

impl NodeState {
    fn insert(&mut self, address: &str, passphrase: &str) {
        if !self.keystore.contains_key(address) {
            self.accounts.push(address.to_string());
        }
        self.keystore.insert(
            address.to_string(),
            Account {
                passphrase: passphrase.to_string(),
                unlocked: false,
            },
        );
    }

    fn check_passphrase(&self, address: &str, passphrase: &str) -> Result<()> {
        let account = self
            .keystore
            .get(address)
            .ok_or_else(|| rpc_error("unknown account"))?;
        if account.passphrase != passphrase && !account.unlocked {
            return Err(rpc_error("could not decrypt key with given password"));
        }
        Ok(())
    }
}

#[async_trait]
impl Transport for MockNode {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let mut state = self.state.lock().unwrap();
        state.calls.push((method.to_string(), params.clone()));

        if state.fail_transport {
            return Err(TransportError::Other("connection refused".to_string()).into());
        }
        if let Some(reply) = state.overrides.get(method) {
            return Ok(reply.clone());
        }
        self.handle(&mut state, method, &params)
    }
}
