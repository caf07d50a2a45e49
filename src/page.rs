/// RecordView Pagination Stage
///
/// Fixed-size offset pagination with a clamped current page. A requested page
/// outside `[1, total_pages]` (a caller still on page 5 after a filter shrank
/// the set) is silently corrected, never indexed out of bounds. An empty
/// result set still reports one page so pagination controls always have a
/// valid current page to render.
use crate::error::ViewError;

/// The computed page of a collection view plus its pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult<'a, R> {
    /// The records visible on the current page, in final order
    pub page_records: Vec<&'a R>,
    /// Requested page clamped into `[1, total_pages]`
    pub current_page: usize,
    /// `max(1, ceil(total_items / page_size))`
    pub total_pages: usize,
    /// Matching records after search and filters, before pagination
    pub total_items: usize,
    /// Records per page (fixed per view instance)
    pub page_size: usize,
}

impl<'a, R> ViewResult<'a, R> {
    /// 1-indexed inclusive item range for a "showing X-Y of Z" label.
    /// `None` when there are no matching records.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.total_items == 0 {
            return None;
        }
        let start = (self.current_page - 1) * self.page_size + 1;
        let end = (self.current_page * self.page_size).min(self.total_items);
        Some((start, end))
    }
}

/// Slice out the requested page of `records`.
///
/// `page` is 1-indexed; out-of-range values are clamped. A zero page size is
/// a configuration error.
pub fn paginate<R>(
    records: Vec<&R>,
    page: usize,
    page_size: usize,
) -> Result<ViewResult<'_, R>, ViewError> {
    if page_size == 0 {
        return Err(ViewError::InvalidPageSize);
    }

    let total_items = records.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let current_page = page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let page_records = if start < total_items {
        records[start..end].to_vec()
    } else {
        Vec::new()
    };

    Ok(ViewResult {
        page_records,
        current_page,
        total_pages,
        total_items,
        page_size,
    })
}
