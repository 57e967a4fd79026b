//! Pagination range builder
//!
//! Computes which page numbers to show for a pagination control and where the
//! gaps go. Boundary pages are pinned at both ends, sibling pages surround the
//! active page, and any longer run of hidden pages collapses into a single
//! ellipsis.
//!
//! The slot arithmetic below is exact: changing any `+ 1`/`+ 2` shifts where
//! boundary blocks start and breaks pinning.

use crate::token::PageToken;
use crate::window::{PaginationWindow, TokenRange};

/// Build the pagination window for `active` out of `total` pages.
///
/// A negative `total` is treated as zero pages. `active` is used as given;
/// when it is not part of the computed range the window is returned without
/// the predecessor page inserted.
pub fn build(total: i64, active: i64, siblings: u32, boundaries: u32) -> PaginationWindow {
    let total = total.max(0);
    let siblings = i64::from(siblings);
    let boundaries = i64::from(boundaries);

    // Active page plus one slot per side where an ellipsis would go.
    let total_page_numbers = siblings * 2 + 3 + boundaries * 2;

    let mut range = TokenRange::new();

    if total_page_numbers >= total {
        push_pages(&mut range, 1, total);
    } else {
        let left_sibling_index = active.saturating_sub(siblings).max(boundaries + 1);
        let right_sibling_index = active.saturating_add(siblings).min(total - boundaries);

        let should_show_left_dots = left_sibling_index > boundaries + 2;
        let should_show_right_dots = right_sibling_index < total - boundaries - 1;

        match (should_show_left_dots, should_show_right_dots) {
            (false, true) => {
                push_pages(&mut range, 1, siblings * 2 + boundaries + 2);
                range.push(PageToken::Ellipsis);
                push_pages(&mut range, total - boundaries + 1, total);
            }
            (true, false) => {
                push_pages(&mut range, 1, boundaries);
                range.push(PageToken::Ellipsis);
                push_pages(
                    &mut range,
                    total - (boundaries + 1 + 2 * siblings) + 1,
                    total,
                );
            }
            // Both gaps. Neither-gap cannot happen while the no-collapse guard
            // above holds; if it ever does, it lays out like both-gap.
            (true, true) | (false, false) => {
                push_pages(&mut range, 1, boundaries);
                range.push(PageToken::Ellipsis);
                push_pages(&mut range, left_sibling_index, right_sibling_index);
                range.push(PageToken::Ellipsis);
                push_pages(&mut range, total - boundaries + 1, total);
            }
        }
    }

    insert_active_predecessor(&mut range, active);

    tracing::trace!(
        total,
        active,
        siblings,
        boundaries,
        tokens = range.len(),
        "built pagination range"
    );

    PaginationWindow {
        range,
        active,
        total,
    }
}

/// Append `start..=stop`; nothing when `start > stop`.
fn push_pages(range: &mut TokenRange, start: i64, stop: i64) {
    range.extend((start..=stop).map(PageToken::PageNumber));
}

/// Make sure the page right before `active` is clickable.
fn insert_active_predecessor(range: &mut TokenRange, active: i64) {
    if active == 1 {
        return;
    }
    let Some(previous) = active.checked_sub(1) else {
        return;
    };
    if range.contains(&PageToken::PageNumber(previous)) {
        return;
    }
    if let Some(index) = range
        .iter()
        .position(|token| *token == PageToken::PageNumber(active))
    {
        range.insert(index, PageToken::PageNumber(previous));
    }
}
