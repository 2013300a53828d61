//! Core runtime for Pagewalk: page ordinals, the paginator value object,
//! window shaping, target coercion, and the ergonomics exported via the
//! `prelude`.
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod goto;
pub mod page;
pub mod paginator;
pub mod run;
pub mod view;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No serializers or internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        config::PagerConfig,
        error::PaginationError,
        goto::PageTarget,
        page::PageNumber,
        paginator::{Paginator, PaginatorBuilder, WindowClip},
        run::PageRun,
        view::PageView,
    };
}
