// ============================================================================
// PAGINATION - Visible row window of the sorted collection
// ============================================================================

use serde::{Deserialize, Serialize};

/// Rows per page. Only the sizes offered by the pager are representable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    pub fn rows(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.rows() == value)
            .ok_or(value)
    }
}

/// `sorted[page_index * page_size ..][..page_size]`; out of range is an empty slice
pub fn visible_rows<T>(sorted: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size);
    if start >= sorted.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(sorted.len());
    &sorted[start..end]
}

/// Filler rows that keep the last page as tall as a full one. Layout only.
pub fn empty_row_count(page_index: usize, page_size: usize, total_rows: usize) -> usize {
    if page_index == 0 {
        return 0;
    }
    page_index
        .saturating_add(1)
        .saturating_mul(page_size)
        .saturating_sub(total_rows)
}

pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_rows.div_ceil(page_size)
}
