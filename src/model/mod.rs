//! Domain model
//!
//! Value objects shared by the pagination service and the REST binding:
//! account addresses, block heights, transactions and their transport
//! metadata, and the transaction type filter forwarded to listing endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Address
// ============================================================================

/// Network-agnostic, string-backed account identity.
///
/// The crate never validates or interprets the address; it is an opaque
/// value handed to the backend, which applies its own validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create an address from its string form
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The plain string form
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

// ============================================================================
// Block Height
// ============================================================================

/// Height of a block, an opaque 64-bit unsigned value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHeight(pub u64);

impl BlockHeight {
    /// The raw height value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BlockHeight {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

// ============================================================================
// Transaction Type
// ============================================================================

/// Transaction type with its stable numeric wire code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Transfer,
    AggregateComplete,
    AggregateBonded,
    NamespaceRegistration,
    MosaicDefinition,
    MosaicSupplyChange,
}

impl TransactionType {
    /// The numeric code used on the wire
    pub fn code(self) -> u16 {
        match self {
            TransactionType::Transfer => 0x4154,
            TransactionType::AggregateComplete => 0x4141,
            TransactionType::AggregateBonded => 0x4241,
            TransactionType::NamespaceRegistration => 0x414E,
            TransactionType::MosaicDefinition => 0x414D,
            TransactionType::MosaicSupplyChange => 0x424D,
        }
    }
}

// ============================================================================
// Transaction Filter
// ============================================================================

/// Set of transaction types the caller wants the backend to filter by.
///
/// The pagination core forwards this untouched; only the REST binding
/// serializes it into query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Types to include; empty means no filtering
    pub types: Vec<TransactionType>,
}

impl TransactionFilter {
    /// Create a filter over the given types
    pub fn of(types: impl IntoIterator<Item = TransactionType>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    /// True when the filter selects nothing (i.e. everything passes)
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// Transport metadata the backend attaches to a stored transaction.
///
/// `height` is absent for unconfirmed and partial transactions, which have
/// not been included in a block yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMeta {
    /// Backend-assigned id, monotonically increasing per network.
    /// This is the value used as the pagination cursor.
    pub id: String,
    /// Height of the containing block, when confirmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    /// Transaction hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// A retrieved transaction.
///
/// The payload is kept opaque; the only field this crate ever interprets is
/// `meta.id`, used to cursor into the next page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transport metadata; `None` for transactions that were never persisted
    /// by the backend (e.g. locally built, not yet announced)
    pub meta: Option<TransactionMeta>,
    /// Raw transaction body as returned by the backend
    pub body: serde_json::Value,
}

impl Transaction {
    /// Create a transaction with transport metadata
    pub fn new(meta: TransactionMeta, body: serde_json::Value) -> Self {
        Self {
            meta: Some(meta),
            body,
        }
    }

    /// The backend-assigned id, when present
    pub fn id(&self) -> Option<&str> {
        self.meta.as_ref().map(|m| m.id.as_str())
    }

    /// The containing block height, when confirmed
    pub fn height(&self) -> Option<u64> {
        self.meta.as_ref().and_then(|m| m.height)
    }
}

/// Identity extractor used for cursoring.
///
/// Pure and total over transactions with populated transport metadata;
/// returns `None` when the metadata is missing, which the pagination engine
/// turns into a fail-fast [`crate::Error::MissingTransactionId`].
pub fn transaction_identity(tx: &Transaction) -> Option<String> {
    tx.meta.as_ref().map(|m| m.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address_display() {
        let address = Address::new("TADP6C2GVEG654MAGJMXRIMX6ECCNEHJZ6OCJYQ");
        assert_eq!(address.to_string(), address.as_str());
    }

    #[test]
    fn test_block_height_ordering() {
        assert!(BlockHeight(1) < BlockHeight(2));
        assert_eq!(BlockHeight::from(7).value(), 7);
    }

    #[test]
    fn test_transaction_type_codes_are_distinct() {
        let all = [
            TransactionType::Transfer,
            TransactionType::AggregateComplete,
            TransactionType::AggregateBonded,
            TransactionType::NamespaceRegistration,
            TransactionType::MosaicDefinition,
            TransactionType::MosaicSupplyChange,
        ];
        let mut codes: Vec<u16> = all.iter().map(|t| t.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_filter_is_empty() {
        assert!(TransactionFilter::default().is_empty());
        assert!(!TransactionFilter::of([TransactionType::Transfer]).is_empty());
    }

    #[test]
    fn test_transaction_identity() {
        let tx = Transaction::new(
            TransactionMeta {
                id: "5E21".to_string(),
                height: Some(42),
                hash: None,
            },
            json!({"type": "transfer"}),
        );
        assert_eq!(transaction_identity(&tx).as_deref(), Some("5E21"));
        assert_eq!(tx.height(), Some(42));

        let bare = Transaction {
            meta: None,
            body: json!({}),
        };
        assert_eq!(transaction_identity(&bare), None);
        assert_eq!(bare.id(), None);
    }
}
