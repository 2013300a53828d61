//! Module: view
//! Responsibility: render-facing navigation snapshot.
//! Does not own: page arithmetic; every fact is computed by the paginator.
//! Boundary: the DTO handed to template layers building pager links.

use crate::{page::PageNumber, paginator::Paginator};
use serde::{Deserialize, Serialize};

///
/// PageView
///
/// Every navigation fact for one render, evaluated once. Template layers
/// consume this instead of querying the paginator field by field.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageView {
    pub first_page: PageNumber,
    pub last_page: PageNumber,
    pub current_page: PageNumber,
    pub previous_page: PageNumber,
    pub next_page: PageNumber,
    pub jump_back: PageNumber,
    pub jump_forward: PageNumber,
    pub window: Vec<PageNumber>,
    pub total_entries: usize,
    pub entries_per_page: usize,
}

impl<T> From<&Paginator<'_, T>> for PageView {
    fn from(pager: &Paginator<'_, T>) -> Self {
        Self {
            first_page: pager.first_page(),
            last_page: pager.last_page(),
            current_page: pager.current_page(),
            previous_page: pager.previous_page(),
            next_page: pager.next_page(),
            jump_back: pager.jump_back(),
            jump_forward: pager.jump_forward(),
            window: pager.window().collect(),
            total_entries: pager.total_entries(),
            entries_per_page: pager.entries_per_page(),
        }
    }
}
