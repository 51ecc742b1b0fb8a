//! REST binding
//!
//! [`RestTransactionRepository`] implements [`TransactionRepository`] against
//! a node's transaction listing routes:
//!
//! - `GET /accounts/{address}/transactions[/partial|/unconfirmed|/incoming|/outgoing]`
//! - `GET /blocks/{height}/transactions`
//!
//! Paging parameters travel as query parameters: `pageSize`, `id` (the
//! cursor, omitted on the first page), `ordering` (`id` ascending, `-id`
//! descending) and `type` (comma-joined filter codes). Responses are JSON
//! arrays of `{ meta, transaction }` entries.
//!
//! No retrying happens here: transport errors surface to the stream consumer
//! as-is, and timeout policy belongs to the injected [`reqwest::Client`].

mod dto;

use crate::error::{Error, Result};
use crate::model::{Address, BlockHeight, Transaction, TransactionFilter};
use crate::paginate::{Order, PageRequest};
use crate::service::TransactionRepository;
use async_trait::async_trait;
use dto::TransactionInfoDto;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// HTTP-backed transaction repository
pub struct RestTransactionRepository {
    client: Client,
    base_url: Url,
}

impl RestTransactionRepository {
    /// Create a repository for the node at `base_url`.
    ///
    /// The URL is validated here so a malformed one fails before any
    /// pagination starts.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url.as_ref())?,
        })
    }

    /// Use a pre-configured client (timeouts, proxies, default headers)
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// The node this repository talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn fetch_page(
        &self,
        path: &str,
        filter: Option<&TransactionFilter>,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>> {
        let mut url = Url::parse(&format!(
            "{}/{path}",
            self.base_url.as_str().trim_end_matches('/')
        ))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("pageSize", &request.page_size.to_string());
            if let Some(cursor) = &request.cursor {
                query.append_pair("id", cursor);
            }
            query.append_pair("ordering", ordering_param(request.order));
            if let Some(filter) = filter.filter(|f| !f.is_empty()) {
                query.append_pair("type", &type_param(filter));
            }
        }

        debug!(%url, "requesting transaction page");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        let entries: Vec<TransactionInfoDto> = serde_json::from_str(&body)?;
        Ok(entries
            .into_iter()
            .map(TransactionInfoDto::into_transaction)
            .collect())
    }
}

#[async_trait]
impl TransactionRepository for RestTransactionRepository {
    async fn account_transactions(
        &self,
        address: &Address,
        filter: Option<&TransactionFilter>,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>> {
        self.fetch_page(&account_route(address, ""), filter, request)
            .await
    }

    async fn account_partial_transactions(
        &self,
        address: &Address,
        filter: Option<&TransactionFilter>,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>> {
        self.fetch_page(&account_route(address, "/partial"), filter, request)
            .await
    }

    async fn account_unconfirmed_transactions(
        &self,
        address: &Address,
        filter: Option<&TransactionFilter>,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>> {
        self.fetch_page(&account_route(address, "/unconfirmed"), filter, request)
            .await
    }

    async fn account_incoming_transactions(
        &self,
        address: &Address,
        filter: Option<&TransactionFilter>,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>> {
        self.fetch_page(&account_route(address, "/incoming"), filter, request)
            .await
    }

    async fn account_outgoing_transactions(
        &self,
        address: &Address,
        filter: Option<&TransactionFilter>,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>> {
        self.fetch_page(&account_route(address, "/outgoing"), filter, request)
            .await
    }

    async fn block_transactions(
        &self,
        height: BlockHeight,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>> {
        self.fetch_page(&format!("blocks/{height}/transactions"), None, request)
            .await
    }
}

/// Route for one of the account-scoped listing endpoints
fn account_route(address: &Address, suffix: &str) -> String {
    format!("accounts/{address}/transactions{suffix}")
}

/// Wire form of the `ordering` query parameter
fn ordering_param(order: Order) -> &'static str {
    match order {
        Order::Asc => "id",
        Order::Desc => "-id",
    }
}

/// Comma-joined type codes for the `type` query parameter
fn type_param(filter: &TransactionFilter) -> String {
    filter
        .types
        .iter()
        .map(|t| t.code().to_string())
        .collect::<Vec<_>>()
        .join(",")
}
