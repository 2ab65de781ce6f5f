//! Offset pagination that detects a further page by over-fetching one row.
//!
//! A listing asks the store for `PAGE_SIZE + 1` rows starting at
//! `skip * PAGE_SIZE`. If the extra row comes back there is a next page and the
//! extra row is dropped; no count query is needed.

use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: u64 = 5;

/// Zero-based page index requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    skip: u64,
}

impl PageRequest {
    pub fn new(skip: u64) -> Self {
        Self { skip }
    }

    /// Reads the `skip` query value. Missing, non-numeric and negative values mean page 0.
    pub fn from_query(raw: Option<&str>) -> Self {
        let skip = raw
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(0);
        Self { skip }
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            offset: self.skip.saturating_mul(PAGE_SIZE),
            limit: PAGE_SIZE + 1,
        }
    }
}

/// Rows to fetch from a store: `limit` rows after skipping `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDetails {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub details: PaginationDetails,
}

/// Turns the rows fetched for `request.window()` into a page plus navigation metadata.
pub fn paginate<T>(request: PageRequest, mut rows: Vec<T>) -> Page<T> {
    let skip = request.skip();
    let page_size = usize::try_from(PAGE_SIZE).unwrap_or(usize::MAX);

    let has_next_page = rows.len() > page_size;
    let has_previous_page = skip > 0;

    if has_next_page {
        rows.truncate(page_size);
    }

    Page {
        items: rows,
        details: PaginationDetails {
            has_next_page,
            has_previous_page,
            next_page: has_next_page.then(|| skip.saturating_add(1)),
            previous_page: has_previous_page.then(|| skip - 1),
        },
    }
}
