//! Transaction retrieval service
//!
//! # Overview
//!
//! [`TransactionService`] exposes one streaming operation per
//! transaction-listing context (account transactions, partial, unconfirmed,
//! incoming, outgoing, and block transactions). All six are thin partial
//! applications of the generic [`paginate`] engine over a
//! [`TransactionRepository`], the seam behind which the actual transport
//! (HTTP, in-memory stub, ...) lives.
//!
//! Each call returns a fresh, forward-only stream; the operations share no
//! mutable state and may be consumed concurrently.

use crate::error::Result;
use crate::model::{transaction_identity, Address, BlockHeight, Transaction, TransactionFilter};
use crate::paginate::{ensure_page_size, paginate, Order, PageRequest, DEFAULT_PAGE_SIZE};
use async_trait::async_trait;
use futures::Stream;

/// One page read per listing endpoint.
///
/// Implementations perform the actual page fetch for the scope given
/// (`address` or `height`), honoring `request.order` and cursor semantics,
/// and returning at most `request.page_size` transactions already ordered.
/// The filter, when present, is applied backend-side; the service never
/// inspects it.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Confirmed transactions involving the account
    async fn account_transactions(
        &self,
        address: &Address,
        filter: Option<&TransactionFilter>,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>>;

    /// Aggregate-bonded transactions awaiting cosignatures
    async fn account_partial_transactions(
        &self,
        address: &Address,
        filter: Option<&TransactionFilter>,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>>;

    /// Announced transactions not yet included in a block
    async fn account_unconfirmed_transactions(
        &self,
        address: &Address,
        filter: Option<&TransactionFilter>,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>>;

    /// Confirmed transactions where the account is the recipient
    async fn account_incoming_transactions(
        &self,
        address: &Address,
        filter: Option<&TransactionFilter>,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>>;

    /// Confirmed transactions signed by the account
    async fn account_outgoing_transactions(
        &self,
        address: &Address,
        filter: Option<&TransactionFilter>,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>>;

    /// Transactions included in the block at the given height
    async fn block_transactions(
        &self,
        height: BlockHeight,
        request: &PageRequest,
    ) -> Result<Vec<Transaction>>;
}

/// Streaming facade over a [`TransactionRepository`].
///
/// The page size is fixed per service instance ([`DEFAULT_PAGE_SIZE`] unless
/// configured) and applies to every operation; `order` defaults to the
/// backend's descending order when omitted.
pub struct TransactionService<R> {
    repository: R,
    page_size: u32,
}

impl<R> TransactionService<R>
where
    R: TransactionRepository,
{
    /// Create a service over the given repository with the default page size
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size, rejecting zero before any request is made
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self> {
        ensure_page_size(page_size)?;
        self.page_size = page_size;
        Ok(self)
    }

    /// The underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// The page size every operation fetches with
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Stream all confirmed transactions of an account
    pub fn account_transactions<'a>(
        &'a self,
        address: &Address,
        filter: Option<TransactionFilter>,
        order: Option<Order>,
    ) -> impl Stream<Item = Result<Transaction>> + Send + 'a {
        let address = address.clone();
        paginate(
            move |request| {
                let address = address.clone();
                let filter = filter.clone();
                async move {
                    self.repository
                        .account_transactions(&address, filter.as_ref(), &request)
                        .await
                }
            },
            transaction_identity,
            self.first_request(order),
        )
    }

    /// Stream all partial (aggregate-bonded) transactions of an account
    pub fn account_partial_transactions<'a>(
        &'a self,
        address: &Address,
        filter: Option<TransactionFilter>,
        order: Option<Order>,
    ) -> impl Stream<Item = Result<Transaction>> + Send + 'a {
        let address = address.clone();
        paginate(
            move |request| {
                let address = address.clone();
                let filter = filter.clone();
                async move {
                    self.repository
                        .account_partial_transactions(&address, filter.as_ref(), &request)
                        .await
                }
            },
            transaction_identity,
            self.first_request(order),
        )
    }

    /// Stream all unconfirmed transactions of an account
    pub fn account_unconfirmed_transactions<'a>(
        &'a self,
        address: &Address,
        filter: Option<TransactionFilter>,
        order: Option<Order>,
    ) -> impl Stream<Item = Result<Transaction>> + Send + 'a {
        let address = address.clone();
        paginate(
            move |request| {
                let address = address.clone();
                let filter = filter.clone();
                async move {
                    self.repository
                        .account_unconfirmed_transactions(&address, filter.as_ref(), &request)
                        .await
                }
            },
            transaction_identity,
            self.first_request(order),
        )
    }

    /// Stream all confirmed transactions received by an account
    pub fn account_incoming_transactions<'a>(
        &'a self,
        address: &Address,
        filter: Option<TransactionFilter>,
        order: Option<Order>,
    ) -> impl Stream<Item = Result<Transaction>> + Send + 'a {
        let address = address.clone();
        paginate(
            move |request| {
                let address = address.clone();
                let filter = filter.clone();
                async move {
                    self.repository
                        .account_incoming_transactions(&address, filter.as_ref(), &request)
                        .await
                }
            },
            transaction_identity,
            self.first_request(order),
        )
    }

    /// Stream all confirmed transactions sent by an account
    pub fn account_outgoing_transactions<'a>(
        &'a self,
        address: &Address,
        filter: Option<TransactionFilter>,
        order: Option<Order>,
    ) -> impl Stream<Item = Result<Transaction>> + Send + 'a {
        let address = address.clone();
        paginate(
            move |request| {
                let address = address.clone();
                let filter = filter.clone();
                async move {
                    self.repository
                        .account_outgoing_transactions(&address, filter.as_ref(), &request)
                        .await
                }
            },
            transaction_identity,
            self.first_request(order),
        )
    }

    /// Stream all transactions of the block at the given height
    pub fn block_transactions(
        &self,
        height: BlockHeight,
        order: Option<Order>,
    ) -> impl Stream<Item = Result<Transaction>> + Send + '_ {
        paginate(
            move |request| async move {
                self.repository.block_transactions(height, &request).await
            },
            transaction_identity,
            self.first_request(order),
        )
    }

    fn first_request(&self, order: Option<Order>) -> PageRequest {
        PageRequest::first(self.page_size, order.unwrap_or_default())
    }
}
