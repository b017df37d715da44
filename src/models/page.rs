use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;

/// One page window plus the counts the client needs to render a pager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub per_page: usize,
}

/// Cuts the 1-based `page` of size `per_page` out of `items`.
///
/// Out-of-range pages (including page 0) come back empty. A `per_page` of 0
/// yields no data and zero pages.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> PaginatedResponse<T> {
    let total_count = items.len();
    let total_pages = if per_page == 0 {
        0
    } else {
        total_count.div_ceil(per_page)
    };

    let data = match page.checked_sub(1) {
        Some(index) if per_page > 0 => items
            .iter()
            .skip(index.saturating_mul(per_page))
            .take(per_page)
            .cloned()
            .collect(),
        _ => Vec::new(),
    };

    PaginatedResponse {
        data,
        total_count,
        total_pages,
        current_page: page,
        per_page,
    }
}
