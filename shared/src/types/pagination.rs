//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_COUNT: u64 = 5;

/// Validated page/count pair (both ≥ 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u64,

    /// Number of items per page
    pub count: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            count: DEFAULT_COUNT,
        }
    }
}

impl Pagination {
    /// Callers are expected to have rejected zero values already
    pub fn new(page: u64, count: u64) -> Self {
        Self {
            page: page.max(1),
            count: count.max(1),
        }
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.count)
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u64 {
        self.count
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }
}

/// Next/previous page URLs, `null` when there is no such page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    pub next_url: Option<String>,
    pub prev_url: Option<String>,
}

/// One page of items with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub items: Vec<T>,

    /// Current page number
    pub page: u64,

    /// Items per page requested
    pub count: u64,

    /// Total number of items
    pub total: u64,

    /// Total number of pages, never less than 1
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            items,
            page: pagination.page,
            count: pagination.count,
            total,
            total_pages: Self::calculate_total_pages(total, pagination.count),
        }
    }

    fn calculate_total_pages(total: u64, count: u64) -> u64 {
        let count = count.max(1);
        (total / count + u64::from(total % count != 0)).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Build navigation links against `base_url` (e.g. `http://host/api/users`)
    pub fn links(&self, base_url: &str) -> PageLinks {
        let url = |page: u64| format!("{}?page={}&count={}", base_url, page, self.count);
        PageLinks {
            next_url: self.has_next().then(|| url(self.page + 1)),
            prev_url: self.has_prev().then(|| url(self.page - 1)),
        }
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            count: self.count,
            total: self.total,
            total_pages: self.total_pages,
        }
    }

    /// Check if the response is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
