//! Page request types
//!
//! Defines the parameters one page fetch is made with.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Page size used when the caller does not configure one.
///
/// Callers depending on request-for-request compatibility with existing
/// deployments should leave this untouched.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Requested sort direction for a listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Ascending by backend-assigned id
    Asc,
    /// Descending by backend-assigned id (backend default)
    #[default]
    Desc,
}

impl Order {
    /// Lowercase wire form
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Parameters for one page fetch.
///
/// `page_size` and `order` are fixed for the lifetime of a pagination
/// operation; `cursor` starts unset and each follow-up request is built as a
/// fresh value via [`PageRequest::after`], never by mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum number of items one page may contain
    pub page_size: u32,
    /// Id of the last item of the previous page; `None` on the first fetch
    pub cursor: Option<String>,
    /// Sort direction the backend is asked for
    pub order: Order,
}

impl PageRequest {
    /// Request for the first page of an operation
    pub fn first(page_size: u32, order: Order) -> Self {
        Self {
            page_size,
            cursor: None,
            order,
        }
    }

    /// Fresh request for the page following the item with the given id.
    /// Page size and order carry over unchanged.
    pub fn after(&self, cursor: impl Into<String>) -> Self {
        Self {
            page_size: self.page_size,
            cursor: Some(cursor.into()),
            order: self.order,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE, Order::default())
    }
}

/// Reject a zero page size before any request is issued
pub(crate) fn ensure_page_size(page_size: u32) -> Result<()> {
    if page_size == 0 {
        return Err(Error::invalid_page_size(page_size));
    }
    Ok(())
}
