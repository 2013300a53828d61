use serde::{Deserialize, Serialize};

/// Default number of items on one page.
pub const DEFAULT_ENTRIES_PER_PAGE: usize = 10;

/// Default window radius around the current page.
pub const DEFAULT_PAGESET_RANGE: usize = 5;

/// Default jump distance for skip-ahead and skip-back links.
pub const DEFAULT_CHANGESET_RANGE: i64 = 10;

///
/// PagerConfig
///
/// Page-size policy for one paginated surface. Every field has a serde
/// default, so partial config files deserialize into the stock policy.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PagerConfig {
    /// Items shown on one page.
    #[serde(default = "default_entries_per_page")]
    pub entries_per_page: usize,

    /// Pages shown left and right of the current page.
    #[serde(default = "default_pageset_range")]
    pub pageset_range: usize,

    /// Jump distance for skip links; may be negative.
    #[serde(default = "default_changeset_range")]
    pub changeset_range: i64,
}

impl PagerConfig {
    /// The stock policy `(10, 5, 10)`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries_per_page: DEFAULT_ENTRIES_PER_PAGE,
            pageset_range: DEFAULT_PAGESET_RANGE,
            changeset_range: DEFAULT_CHANGESET_RANGE,
        }
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self::new()
    }
}

const fn default_entries_per_page() -> usize {
    DEFAULT_ENTRIES_PER_PAGE
}

const fn default_pageset_range() -> usize {
    DEFAULT_PAGESET_RANGE
}

const fn default_changeset_range() -> i64 {
    DEFAULT_CHANGESET_RANGE
}
