use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// PageNumber
///
/// One-based page ordinal. Page `0` only occurs as the `last_page` of an
/// empty collection and as a magnitude-normalized current page of zero;
/// navigation never produces it from valid state.
///

#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    PartialEq,
    FromStr,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct PageNumber(usize);

impl PageNumber {
    /// The first page of every page book.
    pub const FIRST: Self = Self(1);

    /// Wrap a page ordinal.
    #[must_use]
    pub const fn new(page: usize) -> Self {
        Self(page)
    }

    /// Normalize a signed ordinal to its magnitude.
    #[must_use]
    pub const fn from_signed(page: i64) -> Self {
        Self(magnitude(page))
    }

    /// Return the raw ordinal.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for PageNumber {
    fn from(page: usize) -> Self {
        Self(page)
    }
}

impl From<PageNumber> for usize {
    fn from(page: PageNumber) -> Self {
        page.0
    }
}

// Magnitudes come from request-sized inputs and fit usize on every
// supported target.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn magnitude(value: i64) -> usize {
    value.unsigned_abs() as usize
}
