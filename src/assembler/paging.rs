//! Pager construction and lookahead trimming

use crate::grid::{Grid, Pager};
use crate::params::AnalyticsPagingParams;

/// Build the pager for a delivered grid, trimming the lookahead row
///
/// When the caller asked for an exact total the pager carries it and any
/// lookahead row is dropped. Otherwise the query layer fetched
/// `page_size + 1` rows; a full lookahead means more pages exist.
/// Returns `None` for unpaged requests.
pub fn apply_paging(
    grid: &mut Grid,
    paging: &AnalyticsPagingParams,
    total: Option<u64>,
) -> Option<Pager> {
    if !paging.paging {
        return None;
    }

    let page_size = paging.page_size as usize;

    if paging.total_pages {
        let total = total.unwrap_or(grid.row_count() as u64);
        if grid.row_count() > page_size {
            grid.truncate_rows(page_size);
        }
        return Some(Pager::exact(paging.page, paging.page_size, total));
    }

    let row_count = grid.row_count();
    let is_last_page = row_count > 0 && row_count < paging.lookahead_page_size() as usize;
    if row_count > page_size {
        grid.truncate_rows(page_size);
    }
    Some(Pager::slim(paging.page, paging.page_size, is_last_page))
}
