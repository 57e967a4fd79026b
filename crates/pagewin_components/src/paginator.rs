//! Config-driven entry point around [`build`](crate::range::build).

use crate::range::build;
use crate::window::PaginationWindow;
use pagewin_core::{ActivePolicy, PaginationConfig, PaginationError, Result};

/// Number of pages needed for `item_count` items, `per_page` at a time.
pub fn total_pages(item_count: u64, per_page: u64) -> i64 {
    let pages = item_count.div_ceil(per_page.max(1));
    i64::try_from(pages).unwrap_or(i64::MAX)
}

/// Clamp a requested page into `1..=max(total, 1)`.
pub fn clamp_page(page: i64, total: i64) -> i64 {
    page.clamp(1, total.max(1))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Like [`Paginator::new`], but rejects window sizes above
    /// [`MAX_WINDOW`](pagewin_core::MAX_WINDOW).
    pub fn try_new(config: PaginationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Build the window for `active` after applying the active-page policy.
    pub fn window(&self, total: i64, active: i64) -> Result<PaginationWindow> {
        let active = self.resolve_active(total, active)?;
        Ok(build(
            total,
            active,
            self.config.siblings,
            self.config.boundaries,
        ))
    }

    pub fn window_for_items(
        &self,
        item_count: u64,
        per_page: u64,
        active: i64,
    ) -> Result<PaginationWindow> {
        self.window(total_pages(item_count, per_page), active)
    }

    fn resolve_active(&self, total: i64, active: i64) -> Result<i64> {
        let in_range = (1..=total).contains(&active);
        match self.config.active_policy {
            ActivePolicy::PassThrough => Ok(active),
            ActivePolicy::Clamp => {
                let clamped = clamp_page(active, total);
                if clamped != active {
                    tracing::debug!(active, clamped, total, "clamped active page");
                }
                Ok(clamped)
            }
            // Nothing to check against when there are no pages.
            ActivePolicy::Reject if total <= 0 || in_range => Ok(active),
            ActivePolicy::Reject => {
                tracing::debug!(active, total, "rejected active page");
                Err(PaginationError::ActiveOutOfRange { active, total })
            }
        }
    }
}
