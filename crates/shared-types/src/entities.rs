//! # Core Domain Entities
//!
//! Defines the entities exchanged between the validation, registry, mempool
//! and block application subsystems.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `TransactionId`, `Amount`, `Timestamp`
//! - **Asset**: `DappAsset`, `DappCategory`, `UniquenessKey`
//! - **Transactions**: `RawDappTransaction`, `DappTransaction`

use crate::errors::IdentifierError;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Token amount in base units (1 coin = 10^8 base units).
pub type Amount = u64;

/// Timestamp in milliseconds since UNIX epoch.
pub type Timestamp = u64;

/// Number of base units in one coin.
pub const BASE_UNITS_PER_COIN: Amount = 100_000_000;

/// Account address as issued by the ledger (e.g. `"16313739661670634666L"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Opaque 32-byte transaction identity.
///
/// Serialized as a lowercase hex string so registry snapshots stay readable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransactionId(pub [u8; 32]);

impl TransactionId {
    /// Parses an id from its hex representation.
    pub fn from_hex(encoded: &str) -> Result<Self, IdentifierError> {
        let bytes = hex::decode(encoded).map_err(|e| IdentifierError::InvalidHex(e.to_string()))?;
        let array: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| IdentifierError::InvalidLength(bytes.len()))?;
        Ok(Self(array))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionId({})", &self.to_hex()[..12])
    }
}

impl TryFrom<String> for TransactionId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<TransactionId> for String {
    fn from(id: TransactionId) -> Self {
        id.to_hex()
    }
}

// =============================================================================
// CLUSTER B: THE DAPP ASSET
// =============================================================================

/// Registry category of an application (`category` field, 0..=8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DappCategory {
    Education,
    Entertainment,
    Finance,
    Games,
    Miscellaneous,
    Social,
    Utilities,
    Hardware,
    Ecommerce,
}

impl DappCategory {
    /// All categories in index order.
    pub const ALL: [DappCategory; 9] = [
        Self::Education,
        Self::Entertainment,
        Self::Finance,
        Self::Games,
        Self::Miscellaneous,
        Self::Social,
        Self::Utilities,
        Self::Hardware,
        Self::Ecommerce,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A schema-valid dapp registration payload.
///
/// Instances are produced by the schema validator; business rules
/// (URL validity, whitelists, uniqueness) have not necessarily been checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DappAsset {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Comma-delimited tag list as submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(rename = "type")]
    pub dapp_type: u8,
    pub category: u8,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl DappAsset {
    /// Trimmed, non-empty tag tokens in submission order.
    pub fn tags(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn category_kind(&self) -> Option<DappCategory> {
        DappCategory::from_index(self.category)
    }

    /// The keys this registration claims in the confirmed registry.
    pub fn uniqueness_keys(&self) -> [UniquenessKey; 2] {
        [
            UniquenessKey::Name(self.name.clone()),
            UniquenessKey::Link(self.link.clone()),
        ]
    }
}

/// A globally unique (field, value) pair protected by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UniquenessKey {
    Name(String),
    Link(String),
}

impl UniquenessKey {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Link(_) => "link",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Name(value) | Self::Link(value) => value,
        }
    }
}

impl fmt::Display for UniquenessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field(), self.value())
    }
}

// =============================================================================
// CLUSTER C: TRANSACTIONS
// =============================================================================

/// A dapp registration transaction as received from a client.
///
/// The signature has been verified upstream; the asset is still untyped JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawDappTransaction {
    pub id: TransactionId,
    pub sender: Address,
    pub fee: Amount,
    pub timestamp: Timestamp,
    pub asset: serde_json::Value,
    #[serde(with = "hex::serde")]
    pub signature: Vec<u8>,
}

impl RawDappTransaction {
    /// Builds a transaction whose id is derived from its content and signature.
    pub fn new(
        sender: Address,
        fee: Amount,
        timestamp: Timestamp,
        asset: serde_json::Value,
        signature: Vec<u8>,
    ) -> Self {
        let asset_bytes = serde_json::to_vec(&asset).unwrap_or_default();
        let id = compute_id(&sender, fee, timestamp, &asset_bytes, &signature);
        Self {
            id,
            sender,
            fee,
            timestamp,
            asset,
            signature,
        }
    }

    /// Attaches the typed asset produced by schema validation.
    pub fn into_typed(self, asset: DappAsset) -> DappTransaction {
        DappTransaction {
            id: self.id,
            sender: self.sender,
            fee: self.fee,
            timestamp: self.timestamp,
            asset,
            signature: self.signature,
        }
    }
}

/// A dapp registration transaction with a schema-valid asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DappTransaction {
    pub id: TransactionId,
    pub sender: Address,
    pub fee: Amount,
    pub timestamp: Timestamp,
    pub asset: DappAsset,
    #[serde(with = "hex::serde")]
    pub signature: Vec<u8>,
}

impl DappTransaction {
    pub fn uniqueness_keys(&self) -> [UniquenessKey; 2] {
        self.asset.uniqueness_keys()
    }
}

/// Derives a transaction id as SHA-256 over the canonical content and signature.
pub fn compute_id(
    sender: &Address,
    fee: Amount,
    timestamp: Timestamp,
    asset_bytes: &[u8],
    signature: &[u8],
) -> TransactionId {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(sender.as_str().as_bytes());
    hasher.update(fee.to_le_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(asset_bytes);
    hasher.update(signature);
    TransactionId(hasher.finalize().into())
}
