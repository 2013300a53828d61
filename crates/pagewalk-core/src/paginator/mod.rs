//! Module: paginator
//! Responsibility: paginator construction, navigation queries, page slicing.
//! Does not own: window-shaping math (`window`) or target coercion (`goto`).
//! Boundary: the per-request value object callers build from request input.

mod builder;
mod window;

#[cfg(test)]
mod tests;

pub use builder::PaginatorBuilder;
pub use window::WindowClip;

use crate::{
    error::PaginationError, goto::PageTarget, page::PageNumber, run::PageRun, view::PageView,
};

///
/// Paginator
///
/// Stateless pagination calculator over a borrowed sequence or a bare
/// count. Built once per request; every query is a pure function of the
/// stored fields. `current_page` is not clamped at build time: each query
/// degrades to the current page instead of erroring on out-of-range state.
///
/// The borrow of `items` also pins `total_entries`: the source cannot be
/// resized while the paginator lives, so no derived field can go stale.
///

#[derive(Clone, Copy, Debug)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    total_entries: usize,
    entries_per_page: usize,
    current_page: PageNumber,
    pageset_range: usize,
    changeset_range: i64,
    last_page: PageNumber,
}

impl<'a, T> Paginator<'a, T> {
    /// Start a builder over a borrowed sequence.
    #[must_use]
    pub const fn over(items: &'a [T]) -> PaginatorBuilder<'a, T> {
        PaginatorBuilder::new(items, items.len())
    }

    pub(crate) const fn from_parts(
        items: &'a [T],
        total_entries: usize,
        entries_per_page: usize,
        current_page: PageNumber,
        pageset_range: usize,
        changeset_range: i64,
    ) -> Result<Self, PaginationError> {
        if entries_per_page == 0 {
            return Err(PaginationError::ZeroEntriesPerPage);
        }
        let last_page = PageNumber::new(total_entries.div_ceil(entries_per_page));

        Ok(Self {
            items,
            total_entries,
            entries_per_page,
            current_page,
            pageset_range,
            changeset_range,
            last_page,
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The first page; always 1.
    #[must_use]
    pub const fn first_page(&self) -> PageNumber {
        PageNumber::FIRST
    }

    /// The last page; 0 only for an empty collection.
    #[must_use]
    pub const fn last_page(&self) -> PageNumber {
        self.last_page
    }

    /// The page this paginator stands on, as built.
    #[must_use]
    pub const fn current_page(&self) -> PageNumber {
        self.current_page
    }

    /// Items shown on one page; at least 1.
    #[must_use]
    pub const fn entries_per_page(&self) -> usize {
        self.entries_per_page
    }

    /// Total entries in the source, snapshotted at build.
    #[must_use]
    pub const fn total_entries(&self) -> usize {
        self.total_entries
    }

    /// Window radius around the current page.
    #[must_use]
    pub const fn pageset_range(&self) -> usize {
        self.pageset_range
    }

    /// Jump distance for skip links; sign preserved as built.
    #[must_use]
    pub const fn changeset_range(&self) -> i64 {
        self.changeset_range
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Previous page, or the current page when already at (or before) the
    /// first.
    #[must_use]
    pub const fn previous_page(&self) -> PageNumber {
        if self.current_page.get() > PageNumber::FIRST.get() {
            PageNumber::new(self.current_page.get() - 1)
        } else {
            self.current_page
        }
    }

    /// Next page, or the current page when no further page exists.
    #[must_use]
    pub const fn next_page(&self) -> PageNumber {
        if self.current_page.get() < self.last_page.get() {
            PageNumber::new(self.current_page.get() + 1)
        } else {
            self.current_page
        }
    }

    /// Every page of the book, first to last.
    #[must_use]
    pub const fn pages(&self) -> PageRun {
        PageRun::new(PageNumber::FIRST, self.last_page)
    }

    /// The pageset window around the current page.
    #[must_use]
    pub const fn window(&self) -> PageRun {
        window::pageset_window(
            self.current_page.get(),
            self.pageset_range,
            self.last_page.get(),
        )
    }

    /// Which sides of the window the page book clipped.
    #[must_use]
    pub const fn window_clip(&self) -> WindowClip {
        window::clip(
            self.current_page.get(),
            self.pageset_range,
            self.last_page.get(),
        )
    }

    /// Skip `changeset_range` pages forward, staying put when the target
    /// leaves the book.
    #[must_use]
    pub fn jump_forward(&self) -> PageNumber {
        self.jump(i128::from(self.changeset_range))
    }

    /// Skip `changeset_range` pages back, staying put when the target
    /// leaves the book.
    #[must_use]
    pub fn jump_back(&self) -> PageNumber {
        self.jump(-i128::from(self.changeset_range))
    }

    /// Resolve an untrusted page target, falling back to the current page
    /// on non-coercible or out-of-range input. Never errors.
    #[must_use]
    pub fn goto(&self, target: impl PageTarget) -> PageNumber {
        match target.to_page_candidate() {
            Some(candidate) => self.accept(candidate),
            None => self.current_page,
        }
    }

    /// Evaluate every navigation query once for a render layer.
    #[must_use]
    pub fn view(&self) -> PageView {
        PageView::from(self)
    }

    // ------------------------------------------------------------------
    // Page slicing
    // ------------------------------------------------------------------

    /// The slice of the source sequence on the current page.
    ///
    /// A start at or beyond the end of the source yields the empty slice,
    /// as does a count-only paginator. A current page of zero clamps the
    /// start to the head of the source.
    #[must_use]
    pub fn page_items(&self) -> &'a [T] {
        let ordinal = self.current_page.get().saturating_sub(1);
        let Some(start) = self.entries_per_page.checked_mul(ordinal) else {
            return &[];
        };
        if start >= self.items.len() {
            return &[];
        }
        let end = start
            .saturating_add(self.entries_per_page)
            .min(self.items.len());

        &self.items[start..end]
    }

    fn jump(&self, delta: i128) -> PageNumber {
        self.accept(widen(self.current_page.get()) + delta)
    }

    const fn accept(&self, candidate: i128) -> PageNumber {
        if candidate >= 1 && candidate <= widen(self.last_page.get()) {
            // candidate lies in [1, last_page], so it fits a page ordinal
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let page = candidate as usize;

            PageNumber::new(page)
        } else {
            self.current_page
        }
    }
}

impl Paginator<'static, ()> {
    /// Start a builder from a bare entry count, with no backing sequence.
    #[must_use]
    pub const fn from_total(total_entries: usize) -> PaginatorBuilder<'static, ()> {
        PaginatorBuilder::new(&[], total_entries)
    }
}

// Page ordinals fit i128 on every supported target.
#[allow(clippy::cast_possible_wrap)]
const fn widen(value: usize) -> i128 {
    value as i128
}
