use thiserror::Error as ThisError;

///
/// PaginationError
///
/// Failures raised while building a paginator. Query methods on a built
/// paginator are total and never produce an error.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum PaginationError {
    /// A page size of zero cannot form pages.
    #[error("entries per page must be at least 1")]
    ZeroEntriesPerPage,
}
