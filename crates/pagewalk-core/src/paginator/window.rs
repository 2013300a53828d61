//! Module: paginator::window
//! Responsibility: pageset window derivation around the current page.
//! Does not own: page slicing or jump-target policy.
//! Boundary: pure math over `(current, radius, last)`.

use crate::{page::PageNumber, run::PageRun};

///
/// WindowClip
///
/// Which sides of the pageset window the page book clipped.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum WindowClip {
    /// Clipped at both ends: the whole book fits inside the radius.
    Both,
    /// Clipped at the first page only.
    Left,
    /// Unclipped: the full radius fits on both sides.
    None,
    /// Clipped at the last page only.
    Right,
}

/// Classify how the window around `current` lands on `[1, last]`.
pub(crate) const fn clip(current: usize, radius: usize, last: usize) -> WindowClip {
    let fits_left = current > radius;
    let fits_right = current.saturating_add(radius) <= last;

    match (fits_left, fits_right) {
        (true, true) => WindowClip::None,
        (false, true) => WindowClip::Left,
        (true, false) => WindowClip::Right,
        (false, false) => WindowClip::Both,
    }
}

/// Shape the window run for `current` with the given radius.
///
/// A current page far outside the book produces an empty run, never an
/// error: the right-clipped start can exceed `last`, and `PageRun` treats
/// reversed bounds as empty.
pub(crate) const fn pageset_window(current: usize, radius: usize, last: usize) -> PageRun {
    match clip(current, radius, last) {
        WindowClip::None => PageRun::new(
            PageNumber::new(current - radius),
            PageNumber::new(current.saturating_add(radius)),
        ),
        WindowClip::Left => PageRun::new(
            PageNumber::FIRST,
            PageNumber::new(current.saturating_add(radius)),
        ),
        WindowClip::Right => PageRun::new(PageNumber::new(current - radius), PageNumber::new(last)),
        WindowClip::Both => PageRun::new(PageNumber::FIRST, PageNumber::new(last)),
    }
}
