//! Pagination window components.
//!
//! Computes the row of page numbers and ellipsis markers a pagination control
//! displays. Rendering the row is left to the caller: every
//! [`PageToken::PageNumber`] becomes a page link and every
//! [`PageToken::Ellipsis`] a non-interactive separator.
//!
//! ```
//! use pagewin_components::{build, PageToken::{Ellipsis, PageNumber as P}};
//!
//! let window = build(20, 10, 2, 1);
//! assert_eq!(
//!     window.tokens(),
//!     &[P(1), Ellipsis, P(8), P(9), P(10), P(11), P(12), Ellipsis, P(20)]
//! );
//! ```

pub mod paginator;
pub mod range;
pub mod token;
pub mod window;

#[cfg(feature = "python")]
pub mod python;

pub use paginator::{clamp_page, total_pages, Paginator};
pub use range::build;
pub use token::PageToken;
pub use window::{PaginationWindow, TokenRange};

pub use pagewin_core::{ActivePolicy, PaginationConfig, PaginationError, Result};

#[cfg(feature = "python")]
pub use python::register_components;
