//! # txstream
//!
//! Cursor-paginated transaction streaming for blockchain REST APIs.
//!
//! The crate turns page-oriented transaction listing endpoints into lazily
//! consumed, ordered, finite streams. Pages are chained by using the
//! backend-assigned id of the last item of each full page as the cursor for
//! the next request; a page shorter than the requested size ends the stream.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use txstream::{Address, RestTransactionRepository, Result, TransactionService};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let repository = RestTransactionRepository::new("http://localhost:3000")?;
//!     let service = TransactionService::new(repository);
//!
//!     let address = Address::new("TADP6C2GVEG654MAGJMXRIMX6ECCNEHJZ6OCJYQ");
//!     let mut transactions = std::pin::pin!(service.account_transactions(&address, None, None));
//!     while let Some(tx) = transactions.next().await {
//!         println!("{:?}", tx?.id());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    TransactionService                       │
//! │  account / partial / unconfirmed / incoming / outgoing /    │
//! │  block transactions → Stream<Result<Transaction>>           │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────────────────────────┴──────────────────────────────┐
//! │                      paginate engine                        │
//! │  PageRequest{page_size, cursor, order} → page → next cursor │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────────────────────────┴──────────────────────────────┐
//! │            TransactionRepository (Page Reader)              │
//! │        RestTransactionRepository / test stubs / ...         │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Domain value objects
pub mod model;

/// Generic cursor pagination engine
pub mod paginate;

/// HTTP-backed repository
pub mod rest;

/// Streaming transaction retrieval service
pub mod service;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use model::{
    Address, BlockHeight, Transaction, TransactionFilter, TransactionMeta, TransactionType,
};
pub use paginate::{paginate, Order, PageRequest, DEFAULT_PAGE_SIZE};
pub use rest::RestTransactionRepository;
pub use service::{TransactionRepository, TransactionService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
