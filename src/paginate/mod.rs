//! Pagination engine
//!
//! Turns a page-oriented listing endpoint into a single lazily-evaluated,
//! ordered, finite stream of items spanning arbitrarily many backend pages.
//!
//! # Overview
//!
//! The engine knows nothing about HTTP or concrete item shapes. It is given
//! a page reader (any async closure taking a [`PageRequest`] and returning
//! one page of items) and an identity extractor, and chains pages by using
//! the id of the last item of each full page as the cursor for the next
//! request. A page shorter than the requested size is the terminal page.
//!
//! Fetches are strictly sequential: page N+1 is never requested before page
//! N has been fully received, and not before the consumer has taken up page
//! N's items. Dropping the stream cancels pagination; no further reads are
//! issued.

mod types;

pub(crate) use types::ensure_page_size;
pub use types::{Order, PageRequest, DEFAULT_PAGE_SIZE};

use crate::error::{Error, Result};
use async_stream::try_stream;
use futures::Stream;
use std::future::Future;
use tracing::debug;

/// Stream all items behind a page-oriented endpoint.
///
/// * `read_page` — performs one page fetch; bound to a specific endpoint by
///   the caller. Must honor `request.order` and cursor semantics (ascending
///   cursor returns the next-higher-id page, descending the next-lower-id
///   page); the engine does no re-sorting of its own.
/// * `identity` — maps an item to its cursor value. Returning `None` for the
///   last item of a full page is a data-integrity error and fails the stream
///   with [`Error::MissingTransactionId`] rather than issuing a request with
///   an unusable cursor.
/// * `request` — parameters for the first page. `page_size` must be greater
///   than zero; zero fails the stream before any fetch.
///
/// Errors from `read_page` propagate verbatim at the failing page: items
/// yielded earlier stay valid, nothing is retried, and the stream ends.
pub fn paginate<T, R, Fut, I>(
    read_page: R,
    identity: I,
    request: PageRequest,
) -> impl Stream<Item = Result<T>> + Send
where
    T: Send,
    R: Fn(PageRequest) -> Fut + Send,
    Fut: Future<Output = Result<Vec<T>>> + Send,
    I: Fn(&T) -> Option<String> + Send,
{
    try_stream! {
        ensure_page_size(request.page_size)?;

        let mut request = request;
        loop {
            let page = read_page(request.clone()).await?;
            debug!(
                len = page.len(),
                cursor = request.cursor.as_deref().unwrap_or("-"),
                "fetched page"
            );

            if page.len() < request.page_size as usize {
                // Terminal page, including the empty one
                for item in page {
                    yield item;
                }
                break;
            }

            // Full page: resolve the next cursor before handing items out,
            // so a consumer never sees items from a page whose continuation
            // is unusable.
            let next = page
                .last()
                .and_then(|last| identity(last))
                .ok_or_else(Error::missing_transaction_id)?;

            for item in page {
                yield item;
            }
            request = request.after(next);
        }
    }
}

#[cfg(test)]
mod tests;
