//! Transport DTOs for transaction listing responses

use crate::model::{Transaction, TransactionMeta};
use serde::Deserialize;

/// One entry of a transaction listing response
#[derive(Debug, Deserialize)]
pub(crate) struct TransactionInfoDto {
    pub meta: TransactionMetaDto,
    pub transaction: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionMetaDto {
    pub id: String,
    #[serde(default)]
    pub height: Option<u64>,
    #[serde(default)]
    pub hash: Option<String>,
}

impl TransactionInfoDto {
    pub fn into_transaction(self) -> Transaction {
        Transaction::new(
            TransactionMeta {
                id: self.meta.id,
                height: self.meta.height,
                hash: self.meta.hash,
            },
            self.transaction,
        )
    }
}
