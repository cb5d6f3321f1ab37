use super::quantity::{to_hex_quantity, Quantity};
use crate::error::Result;

/// Transaction fields as supplied by the caller.
///
/// Numeric fields accept anything convertible into [`Quantity`]. Address
/// fields are kept as given and validated at encoding time. Absent fields
/// stay absent; nothing is defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnsignedTransaction {
    pub from: String,
    pub to: Option<String>,
    pub value: Option<Quantity>,
    pub gas: Option<Quantity>,
    pub gas_price: Option<Quantity>,
    pub max_fee_per_gas: Option<Quantity>,
    pub max_priority_fee_per_gas: Option<Quantity>,
    pub nonce: Option<Quantity>,
    pub chain_id: Option<Quantity>,
    pub tx_type: Option<Quantity>,
    pub data: Option<String>,
}

impl UnsignedTransaction {
    /// Start a transaction sent by the keystore account `from`.
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            ..Default::default()
        }
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn value(mut self, value: impl Into<Quantity>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn gas(mut self, gas: impl Into<Quantity>) -> Self {
        self.gas = Some(gas.into());
        self
    }

    pub fn gas_price(mut self, gas_price: impl Into<Quantity>) -> Self {
        self.gas_price = Some(gas_price.into());
        self
    }

    pub fn max_fee_per_gas(mut self, fee: impl Into<Quantity>) -> Self {
        self.max_fee_per_gas = Some(fee.into());
        self
    }

    pub fn max_priority_fee_per_gas(mut self, fee: impl Into<Quantity>) -> Self {
        self.max_priority_fee_per_gas = Some(fee.into());
        self
    }

    pub fn nonce(mut self, nonce: impl Into<Quantity>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn chain_id(mut self, chain_id: impl Into<Quantity>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    pub fn tx_type(mut self, tx_type: impl Into<Quantity>) -> Self {
        self.tx_type = Some(tx_type.into());
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}

/// Transaction with every numeric field in canonical hex-quantity form.
/// Address and data fields are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTransaction {
    pub from: String,
    pub to: Option<String>,
    pub value: Option<String>,
    pub gas: Option<String>,
    pub gas_price: Option<String>,
    pub max_fee_per_gas: Option<String>,
    pub max_priority_fee_per_gas: Option<String>,
    pub nonce: Option<String>,
    pub chain_id: Option<String>,
    pub tx_type: Option<String>,
    pub data: Option<String>,
}

fn quantity(field: &Option<Quantity>) -> Result<Option<String>> {
    field.clone().map(to_hex_quantity).transpose()
}

/// Apply [`to_hex_quantity`] to each numeric field present in `tx`.
pub fn normalize_transaction(tx: &UnsignedTransaction) -> Result<NormalizedTransaction> {
    Ok(NormalizedTransaction {
        from: tx.from.clone(),
        to: tx.to.clone(),
        value: quantity(&tx.value)?,
        gas: quantity(&tx.gas)?,
        gas_price: quantity(&tx.gas_price)?,
        max_fee_per_gas: quantity(&tx.max_fee_per_gas)?,
        max_priority_fee_per_gas: quantity(&tx.max_priority_fee_per_gas)?,
        nonce: quantity(&tx.nonce)?,
        chain_id: quantity(&tx.chain_id)?,
        tx_type: quantity(&tx.tx_type)?,
        data: tx.data.clone(),
    })
}
