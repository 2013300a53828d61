use crate::{
    config::PagerConfig,
    error::PaginationError,
    page::{PageNumber, magnitude},
    paginator::Paginator,
};

///
/// PaginatorBuilder
///
/// Fluent construction with the stock policy `(10, 1, 5, 10)`. Signed
/// inputs are magnitude-normalized, except `changeset_range`, which keeps
/// its sign; the current page is normalized but never clamped.
///

#[derive(Clone, Copy, Debug)]
pub struct PaginatorBuilder<'a, T> {
    items: &'a [T],
    total_entries: usize,
    config: PagerConfig,
    current_page: PageNumber,
}

impl<'a, T> PaginatorBuilder<'a, T> {
    pub(crate) const fn new(items: &'a [T], total_entries: usize) -> Self {
        Self {
            items,
            total_entries,
            config: PagerConfig::new(),
            current_page: PageNumber::FIRST,
        }
    }

    /// Replace the whole page-size policy at once.
    #[must_use]
    pub const fn config(mut self, config: PagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Items shown on one page; magnitude-normalized.
    #[must_use]
    pub const fn entries_per_page(mut self, entries_per_page: i64) -> Self {
        self.config.entries_per_page = magnitude(entries_per_page);
        self
    }

    /// One-based page to stand on; magnitude-normalized, never clamped.
    #[must_use]
    pub const fn current_page(mut self, current_page: i64) -> Self {
        self.current_page = PageNumber::from_signed(current_page);
        self
    }

    /// Window radius around the current page; magnitude-normalized.
    #[must_use]
    pub const fn pageset_range(mut self, pageset_range: i64) -> Self {
        self.config.pageset_range = magnitude(pageset_range);
        self
    }

    /// Jump distance for skip links; sign kept as given.
    #[must_use]
    pub const fn changeset_range(mut self, changeset_range: i64) -> Self {
        self.config.changeset_range = changeset_range;
        self
    }

    /// Build the paginator, rejecting a zero page size.
    pub const fn build(self) -> Result<Paginator<'a, T>, PaginationError> {
        Paginator::from_parts(
            self.items,
            self.total_entries,
            self.config.entries_per_page,
            self.current_page,
            self.config.pageset_range,
            self.config.changeset_range,
        )
    }
}
