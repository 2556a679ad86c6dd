//! Page requests and page-position metadata for list results.

use serde::{Deserialize, Serialize};

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Maximum allowed items per page
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Page query parameters (`?page=2&per_page=50`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Page number, treating 0 as the first page.
    pub fn page_number(&self) -> u64 {
        self.page.max(1)
    }

    /// Number of items to skip, saturating at `u64::MAX` for absurd pages.
    pub fn offset(&self) -> u64 {
        (self.page_number() - 1).saturating_mul(self.limit())
    }

    /// Page size capped at [`MAX_PAGE_SIZE`].
    pub fn limit(&self) -> u64 {
        self.per_page.min(MAX_PAGE_SIZE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Position of one page inside a paged collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PagedInfo {
    /// 1-based position of the first item on this page (0 if the page is empty)
    pub first_item_on_page: u64,
    /// 1-based position of the last item on this page (0 if the page is empty)
    pub last_item_on_page: u64,
    pub page_number: u64,
    pub page_size: u64,
    pub page_count: u64,
    pub total_count: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

impl PagedInfo {
    /// Derive every position field from the page number, page size and total.
    pub fn new(page_number: u64, page_size: u64, total_count: u64) -> Self {
        let page_count = if page_size > 0 {
            total_count.div_ceil(page_size)
        } else {
            0
        };

        let in_range = page_number >= 1 && page_number <= page_count;
        let (first_item_on_page, last_item_on_page) = if in_range {
            // In range implies the page starts at or before `total_count`.
            let first = (page_number - 1) * page_size + 1;
            let last = first.saturating_add(page_size - 1).min(total_count);
            (first, last)
        } else {
            (0, 0)
        };

        Self {
            first_item_on_page,
            last_item_on_page,
            page_number,
            page_size,
            page_count,
            total_count,
            has_next_page: page_number < page_count,
            has_previous_page: page_number > 1,
            is_first_page: page_number == 1,
            is_last_page: page_number >= page_count,
        }
    }

    pub fn from_request(request: &PageRequest, total_count: u64) -> Self {
        Self::new(request.page_number(), request.limit(), total_count)
    }
}
