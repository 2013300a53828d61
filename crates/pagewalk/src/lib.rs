//! ## Crate layout
//! - `core`: the pagination runtime — page ordinals, the paginator value
//!   object, window shaping, target coercion, and the render-facing view.
//!
//! The `prelude` module mirrors the runtime surface used at render sites.

pub use pagewalk_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::{error::PaginationError, paginator::Paginator};

///
/// Render Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        config::PagerConfig,
        error::PaginationError,
        goto::PageTarget as _,
        page::PageNumber,
        paginator::{Paginator, PaginatorBuilder, WindowClip},
        run::PageRun,
        view::PageView,
    };
    pub use serde::{Deserialize, Serialize};
}
