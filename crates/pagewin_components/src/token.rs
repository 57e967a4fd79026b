//! Page tokens: one entry in the row of page controls.

use pagewin_core::PaginationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire name of the ellipsis marker.
pub const ELLIPSIS: &str = "ellipsis";

/// A concrete page number or a gap marker.
///
/// Serializes as a bare integer or the string `"ellipsis"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawToken", into = "RawToken")]
pub enum PageToken {
    /// 1-based page index
    PageNumber(i64),
    /// Pages omitted here
    Ellipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<i64> {
        match self {
            PageToken::PageNumber(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl From<i64> for PageToken {
    fn from(page: i64) -> Self {
        PageToken::PageNumber(page)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::PageNumber(n) => write!(f, "{n}"),
            PageToken::Ellipsis => write!(f, "…"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawToken {
    Page(i64),
    Marker(String),
}

impl TryFrom<RawToken> for PageToken {
    type Error = PaginationError;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        match raw {
            RawToken::Page(n) => Ok(PageToken::PageNumber(n)),
            RawToken::Marker(s) if s == ELLIPSIS => Ok(PageToken::Ellipsis),
            RawToken::Marker(s) => Err(PaginationError::InvalidToken(s)),
        }
    }
}

impl From<PageToken> for RawToken {
    fn from(token: PageToken) -> Self {
        match token {
            PageToken::PageNumber(n) => RawToken::Page(n),
            PageToken::Ellipsis => RawToken::Marker(ELLIPSIS.to_string()),
        }
    }
}
