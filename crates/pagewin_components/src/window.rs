//! The computed pagination window and its navigation helpers.

use crate::token::PageToken;
use pagewin_core::{PaginationError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Token storage; common windows fit inline.
pub type TokenRange = SmallVec<[PageToken; 16]>;

/// The ordered page tokens to display, plus the echoed active page.
///
/// `total` is the normalized page count (never negative) the range was
/// built from. Deserialized windows go through [`PaginationWindow::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct PaginationWindow {
    pub range: TokenRange,
    pub active: i64,
    pub total: i64,
}

#[derive(Deserialize)]
struct RawWindow {
    range: TokenRange,
    active: i64,
    total: i64,
}

impl TryFrom<RawWindow> for PaginationWindow {
    type Error = PaginationError;

    fn try_from(raw: RawWindow) -> Result<Self> {
        let window = PaginationWindow {
            range: raw.range,
            active: raw.active,
            total: raw.total,
        };
        window.validate()?;
        Ok(window)
    }
}

impl PaginationWindow {
    /// Check the range invariants: pages lie in `1..=total`, no two
    /// ellipsis markers touch, and each run of pages counts up by one.
    pub fn validate(&self) -> Result<()> {
        if self.total < 0 {
            return Err(PaginationError::InvalidWindow(format!(
                "negative total {}",
                self.total
            )));
        }
        if let Some(page) = self.pages().find(|page| !(1..=self.total).contains(page)) {
            return Err(PaginationError::InvalidWindow(format!(
                "page {page} is outside 1..={}",
                self.total
            )));
        }
        for pair in self.range.windows(2) {
            match (pair[0], pair[1]) {
                (PageToken::Ellipsis, PageToken::Ellipsis) => {
                    return Err(PaginationError::InvalidWindow(
                        "adjacent ellipsis markers".to_string(),
                    ));
                }
                (PageToken::PageNumber(a), PageToken::PageNumber(b))
                    if a.checked_add(1) != Some(b) =>
                {
                    return Err(PaginationError::InvalidWindow(format!(
                        "page {b} does not follow {a}"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn tokens(&self) -> &[PageToken] {
        &self.range
    }

    /// Concrete page numbers in display order.
    pub fn pages(&self) -> impl Iterator<Item = i64> + '_ {
        self.range.iter().filter_map(PageToken::page)
    }

    pub fn contains(&self, page: i64) -> bool {
        self.range.contains(&PageToken::PageNumber(page))
    }

    pub fn is_active(&self, page: i64) -> bool {
        page == self.active
    }

    pub fn first(&self) -> Option<i64> {
        (self.total > 0).then_some(1)
    }

    pub fn last(&self) -> Option<i64> {
        (self.total > 0).then_some(self.total)
    }

    /// Target of a "previous" control, if it points at a real page.
    pub fn previous_page(&self) -> Option<i64> {
        let prev = self.active.checked_sub(1)?;
        (1..=self.total).contains(&prev).then_some(prev)
    }

    /// Target of a "next" control, if it points at a real page.
    pub fn next_page(&self) -> Option<i64> {
        let next = self.active.checked_add(1)?;
        (1..=self.total).contains(&next).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn window(range: TokenRange, active: i64, total: i64) -> PaginationWindow {
        PaginationWindow {
            range,
            active,
            total,
        }
    }

    #[test]
    fn test_pages_skip_ellipsis() {
        let w = window(
            smallvec![
                PageToken::PageNumber(1),
                PageToken::Ellipsis,
                PageToken::PageNumber(9),
                PageToken::PageNumber(10),
            ],
            10,
            10,
        );
        assert_eq!(w.pages().collect::<Vec<_>>(), vec![1, 9, 10]);
        assert_eq!(w.len(), 4);
        assert!(w.contains(9));
        assert!(!w.contains(5));
        assert!(w.is_active(10));
    }

    #[test]
    fn test_validate_accepts_built_shapes() {
        let w = window(
            smallvec![
                PageToken::Ellipsis,
                PageToken::PageNumber(9),
                PageToken::PageNumber(10),
                PageToken::Ellipsis,
            ],
            10,
            20,
        );
        assert!(w.validate().is_ok());
        assert!(window(smallvec![], 1, 0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_broken_ranges() {
        let adjacent = window(
            smallvec![
                PageToken::PageNumber(1),
                PageToken::Ellipsis,
                PageToken::Ellipsis,
                PageToken::PageNumber(10),
            ],
            1,
            10,
        );
        assert!(matches!(
            adjacent.validate(),
            Err(PaginationError::InvalidWindow(_))
        ));

        let gap = window(
            smallvec![PageToken::PageNumber(1), PageToken::PageNumber(3)],
            1,
            3,
        );
        assert!(gap
            .validate()
            .unwrap_err()
            .to_string()
            .contains("page 3 does not follow 1"));

        let past_end = window(smallvec![PageToken::PageNumber(4)], 4, 3);
        assert!(past_end.validate().is_err());

        assert!(window(smallvec![], 1, -1).validate().is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: PaginationWindow =
            serde_json::from_str(r#"{"range":[1,"ellipsis",9,10],"active":10,"total":10}"#)
                .unwrap();
        assert_eq!(ok.len(), 4);

        let err = serde_json::from_str::<PaginationWindow>(
            r#"{"range":[1,"ellipsis","ellipsis",10],"active":1,"total":10}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("adjacent ellipsis markers"));

        let err = serde_json::from_str::<PaginationWindow>(
            r#"{"range":[1,2,5],"active":1,"total":5}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("page 5 does not follow 2"));
    }

    #[test]
    fn test_navigation_middle() {
        let w = window(smallvec![], 5, 10);
        assert_eq!(w.previous_page(), Some(4));
        assert_eq!(w.next_page(), Some(6));
        assert_eq!(w.first(), Some(1));
        assert_eq!(w.last(), Some(10));
    }

    #[test]
    fn test_navigation_edges() {
        let w = window(smallvec![], 1, 3);
        assert_eq!(w.previous_page(), None);
        assert_eq!(w.next_page(), Some(2));

        let w = window(smallvec![], 3, 3);
        assert_eq!(w.previous_page(), Some(2));
        assert_eq!(w.next_page(), None);
    }

    #[test]
    fn test_navigation_empty() {
        let w = window(smallvec![], 1, 0);
        assert!(w.is_empty());
        assert_eq!(w.first(), None);
        assert_eq!(w.last(), None);
        assert_eq!(w.previous_page(), None);
        assert_eq!(w.next_page(), None);
    }

    #[test]
    fn test_navigation_out_of_range_active() {
        let w = window(smallvec![], 50, 10);
        assert_eq!(w.previous_page(), None);
        assert_eq!(w.next_page(), None);

        let w = window(smallvec![], i64::MIN, 10);
        assert_eq!(w.previous_page(), None);
        assert_eq!(w.next_page(), None);
    }
}
